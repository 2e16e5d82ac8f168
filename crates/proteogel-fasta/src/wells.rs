//! 1-D pipeline: per-well protein info extracted from FASTA uploads.
//!
//! Contract quirk preserved from the original front end: unsupported file
//! types and parse failures are reported as sentinel entries in the well,
//! not as HTTP errors.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use proteogel_engine::residues;

use crate::parser::parse_fasta_content;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinInfoEntry {
    pub name: String,
    #[serde(rename = "molecularWeight")]
    pub molecular_weight: f64,
    pub color: String,
    pub id_num: String,
    pub id_str: String,
    #[serde(rename = "errorDetail", skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ProteinInfoEntry {
    fn sentinel(name: &str, error_detail: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            molecular_weight: 0.0,
            color: String::new(),
            id_num: String::new(),
            id_str: String::new(),
            error_detail,
        }
    }
}

/// Parse one FASTA upload into its protein info entries.
pub fn file_protein_info(filename: &str, content: &str) -> Vec<ProteinInfoEntry> {
    if !crate::is_accepted_filename(filename) {
        return vec![ProteinInfoEntry::sentinel("unsupported file format", None)];
    }

    let sequences = match parse_fasta_content(content) {
        Ok(sequences) => sequences,
        Err(e) => {
            warn!(filename, error = %e, "failed to parse protein file");
            return vec![ProteinInfoEntry::sentinel("error", Some(e.to_string()))];
        }
    };

    let mut rng = rand::thread_rng();
    sequences
        .iter()
        .map(|seq| {
            let header_parts: Vec<&str> = seq.header.split('|').collect();
            let (id_num, id_str) = if header_parts.len() > 1 {
                (header_parts[1].to_string(), header_parts[0].to_string())
            } else {
                (header_parts[0].to_string(), String::new())
            };
            ProteinInfoEntry {
                name: seq
                    .header
                    .split_whitespace()
                    .skip(1)
                    .collect::<Vec<_>>()
                    .join(" "),
                molecular_weight: residues::molecular_weight(&seq.sequence),
                color: random_band_color(&mut rng),
                id_num,
                id_str,
                error_detail: None,
            }
        })
        .collect()
}

/// Parse a batch of uploads into wells, one per accepted file, files
/// ordered by name.
pub fn batch_file_protein_info(files: &[(String, String)]) -> Vec<Vec<ProteinInfoEntry>> {
    let mut sorted: Vec<&(String, String)> = files.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    sorted
        .iter()
        .filter(|(filename, _)| crate::is_accepted_filename(filename))
        .map(|(filename, content)| file_protein_info(filename, content))
        .collect()
}

/// Random band colour at fixed lightness/saturation, so bands stay
/// readable against the gel background.
fn random_band_color(rng: &mut impl Rng) -> String {
    let (r, g, b) = hls_to_rgb(rng.gen_range(0.0..1.0), 0.5, 0.7);
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8
    )
}

fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_component(m1, m2, h + 1.0 / 3.0),
        hue_component(m1, m2, h),
        hue_component(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = ">sp|P69905|HBA_HUMAN Hemoglobin subunit alpha\nGGGG\n";

    #[test]
    fn test_file_protein_info_entries() {
        let entries = file_protein_info("hemoglobin.fasta", CONTENT);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.name, "Hemoglobin subunit alpha");
        assert_eq!(entry.molecular_weight, 57.05 * 4.0);
        assert_eq!(entry.id_num, "P69905");
        assert_eq!(entry.id_str, "sp");
        assert!(entry.color.starts_with('#') && entry.color.len() == 7);
    }

    #[test]
    fn test_unsupported_extension_sentinel() {
        let entries = file_protein_info("notes.txt", CONTENT);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "unsupported file format");
        assert_eq!(entries[0].molecular_weight, 0.0);
    }

    #[test]
    fn test_batch_sorts_files_and_skips_unsupported() {
        let files = vec![
            ("b.fasta".to_string(), CONTENT.to_string()),
            ("notes.txt".to_string(), "junk".to_string()),
            ("a.fa".to_string(), CONTENT.to_string()),
        ];
        let wells = batch_file_protein_info(&files);
        assert_eq!(wells.len(), 2);
        assert_eq!(wells[0][0].id_num, "P69905");
    }

    #[test]
    fn test_hls_round_trip_is_plausible() {
        // Fixed lightness keeps every channel inside the readable band.
        for h in [0.0, 0.25, 0.5, 0.75] {
            let (r, g, b) = hls_to_rgb(h, 0.5, 0.7);
            for v in [r, g, b] {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
