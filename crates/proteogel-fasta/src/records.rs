//! Enrichment of raw sequences into full protein records.

use std::collections::HashMap;

use proteogel_common::ProteinRecord;

use crate::header;
use crate::parser::RawSequence;

/// Rotating display palette; assignment is by running protein index so
/// colours stay stable across multi-file uploads.
pub const COLOR_PALETTE: [&str; 12] = [
    "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#FFA500", "#800080", "#008000", "#FFC0CB", "#A52A2A", "#808080",
];

/// Build simulation-ready records from parsed sequences plus the resolved
/// external links. `existing_count` is the number of proteins already
/// accumulated from earlier files in the same upload.
pub fn build_protein_records(
    sequences: &[RawSequence],
    links: &HashMap<String, String>,
    existing_count: usize,
) -> Vec<ProteinRecord> {
    let mut records = Vec::with_capacity(sequences.len());

    for (offset, seq) in sequences.iter().enumerate() {
        let pid = header::accession(&seq.header);
        let link = links
            .get(&pid)
            .cloned()
            .unwrap_or_else(|| "N/A".to_string());

        records.push(ProteinRecord {
            name: seq.name.clone(),
            full_name: seq.name.clone(),
            organism: seq.organism.clone(),
            uniprot_id: header::extract_uniprot_id(&seq.header),
            mw: seq.mw,
            ph: seq.ph,
            color: COLOR_PALETTE[(existing_count + offset) % COLOR_PALETTE.len()].to_string(),
            sequence: seq.sequence.clone(),
            x: 50.0,
            y: 300.0,
            current_ph: 7.0,
            velocity: 0.0,
            settled: false,
            id: pid,
            link,
            display_name: header::display_name(&seq.header),
        });
    }

    records
}
