//! FASTA content parsing.

use bio::io::fasta;
use serde::{Deserialize, Serialize};
use tracing::debug;

use proteogel_common::error::{ProteogelError, Result};
use proteogel_engine::residues;

/// One FASTA record with its computed properties, before display
/// enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSequence {
    pub header: String,
    pub sequence: String,
    pub name: String,
    pub organism: String,
    pub mw: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
}

/// Parse FASTA text into raw sequence records. Molecular weight and
/// theoretical pI come from the engine's residue tables.
pub fn parse_fasta_content(content: &str) -> Result<Vec<RawSequence>> {
    let reader = fasta::Reader::new(content.as_bytes());
    let mut sequences = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| {
            ProteogelError::InvalidRange(format!("malformed FASTA record: {}", e))
        })?;
        let header = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        let sequence = String::from_utf8_lossy(record.seq()).to_string();

        let mw = residues::molecular_weight(&sequence);
        let ph = residues::theoretical_pi(&sequence);
        let info = crate::header::extract_protein_info(&header);

        sequences.push(RawSequence {
            header,
            sequence,
            name: info.name,
            organism: info.organism,
            mw,
            ph,
        });
    }

    debug!(count = sequences.len(), "parsed FASTA content");
    Ok(sequences)
}
