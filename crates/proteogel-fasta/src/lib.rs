//! proteogel-fasta — FASTA upload parsing and protein-record construction.
//!
//! Turns uploaded FASTA content into the records the simulation engine
//! consumes: sequences with computed molecular weight and theoretical pI,
//! header-derived display metadata, and a stable colour assignment. Also
//! hosts the 1-D pipeline's per-well protein info extraction.

pub mod header;
pub mod parser;
pub mod records;
pub mod wells;

pub use parser::{parse_fasta_content, RawSequence};
pub use records::build_protein_records;
pub use wells::{batch_file_protein_info, file_protein_info, ProteinInfoEntry};

/// File extensions accepted as FASTA uploads.
pub const ACCEPTED_FILE_TYPES: [&str; 8] = ["fasta", "fas", "fa", "fna", "ffn", "faa", "mpfa", "frn"];

/// Does the filename carry an accepted FASTA extension?
pub fn is_accepted_filename(filename: &str) -> bool {
    let ext = filename.rsplit('.').next().unwrap_or_default().to_lowercase();
    ACCEPTED_FILE_TYPES.contains(&ext.as_str())
}
