//! proteogel-retention — peptide retention-time prediction.
//!
//! A residue-additive model for reversed-phase HPLC retention: the
//! regression combines a summed retention-coefficient term with molecular
//! volume and hydrophobicity descriptors, all computed from fixed
//! per-residue tables (Zamyatnin volumes, Fauchère–Pliška π values).
//! Terminal `Ac-` / `-NH2` modifications are accepted and stripped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use proteogel_common::error::{ProteogelError, Result};

// Regression constants fitted against the reference HPLC dataset.
const TR_INTERCEPT: f64 = 8.02;
const TR_LOG_SUM_COEFF: f64 = 14.86;
const TR_LOG_VDW_COEFF: f64 = -5.77;
const TR_CLOGP_COEFF: f64 = 0.28;

/// Per-residue descriptors: retention coefficient (min), Van der Waals
/// volume (Å³), and side-chain hydrophobicity (π, logP units).
fn descriptors(code: char) -> Option<(f64, f64, f64)> {
    let d = match code.to_ascii_uppercase() {
        'A' => (2.10, 88.6, 0.31),
        'R' => (2.47, 173.4, -1.01),
        'N' => (1.92, 114.1, -0.60),
        'D' => (1.97, 111.1, -0.77),
        'C' => (2.12, 108.5, 1.54),
        'E' => (2.13, 138.4, -0.64),
        'Q' => (2.00, 143.8, -0.22),
        'G' => (1.87, 60.1, 0.00),
        'H' => (2.02, 153.2, 0.13),
        'I' => (8.98, 166.7, 1.80),
        'L' => (9.40, 166.7, 1.70),
        'K' => (2.02, 168.6, -0.99),
        'M' => (4.97, 162.9, 1.23),
        'F' => (11.60, 189.9, 1.79),
        'P' => (2.60, 112.7, 0.72),
        'S' => (1.85, 89.0, -0.04),
        'T' => (1.90, 116.1, 0.26),
        'W' => (12.02, 227.8, 2.25),
        'Y' => (8.63, 193.6, 0.96),
        'V' => (4.17, 140.0, 1.22),
        _ => return None,
    };
    Some(d)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetentionPrediction {
    pub peptide: String,
    pub log_sum_aa: f64,
    pub log_vdw_vol: f64,
    pub clog_p: f64,
    pub predicted_tr: f64,
}

/// Per-peptide outcome: prediction or an isolated failure. One bad
/// peptide never fails the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RetentionOutcome {
    Predicted(RetentionPrediction),
    Failed { peptide: String, error: String },
}

/// Predict retention times for a batch of peptides.
pub fn predict(peptides: &[String]) -> Vec<RetentionOutcome> {
    debug!(count = peptides.len(), "predicting retention times");
    peptides
        .iter()
        .map(|peptide| match predict_one(peptide) {
            Ok(prediction) => RetentionOutcome::Predicted(prediction),
            Err(e) => RetentionOutcome::Failed {
                peptide: peptide.clone(),
                error: e.to_string(),
            },
        })
        .collect()
}

/// Predict one peptide's retention time.
pub fn predict_one(peptide: &str) -> Result<RetentionPrediction> {
    let residues = strip_terminal_mods(peptide);
    if residues.is_empty() {
        return Err(ProteogelError::InvalidPeptide(format!(
            "no residues in {:?}",
            peptide
        )));
    }

    let mut retention_sum = 0.0;
    let mut vdw_sum = 0.0;
    let mut clog_p = 0.0;
    for c in residues.chars() {
        let (retention, volume, pi) = descriptors(c).ok_or_else(|| {
            ProteogelError::InvalidPeptide(format!("unknown residue {:?} in {:?}", c, peptide))
        })?;
        retention_sum += retention;
        vdw_sum += volume;
        clog_p += pi;
    }
    if retention_sum <= 0.0 {
        return Err(ProteogelError::InvalidPeptide(format!(
            "retention coefficient sum is 0 for {:?}",
            peptide
        )));
    }

    let log_sum_aa = retention_sum.log10();
    let log_vdw_vol = vdw_sum.log10();
    let predicted_tr = TR_INTERCEPT
        + TR_LOG_SUM_COEFF * log_sum_aa
        + TR_LOG_VDW_COEFF * log_vdw_vol
        + TR_CLOGP_COEFF * clog_p;

    Ok(RetentionPrediction {
        peptide: peptide.to_string(),
        log_sum_aa,
        log_vdw_vol,
        clog_p,
        predicted_tr,
    })
}

/// Drop `Ac-` / `-NH2` terminal modifications and surrounding whitespace.
fn strip_terminal_mods(peptide: &str) -> String {
    let mut seq = peptide.trim();
    seq = seq.strip_prefix("Ac-").unwrap_or(seq);
    seq = seq.strip_suffix("-NH2").unwrap_or(seq);
    seq.trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_glycine_tetramer_descriptors() {
        let p = predict_one("GGGG").unwrap();
        assert!((p.log_sum_aa - (4.0 * 1.87f64).log10()).abs() < 1e-9);
        assert!((p.log_vdw_vol - (4.0 * 60.1f64).log10()).abs() < 1e-9);
        assert_eq!(p.clog_p, 0.0);
        assert!(p.predicted_tr.is_finite());
    }

    #[test]
    fn test_hydrophobic_peptides_retain_longer() {
        let hydrophobic = predict_one("FFFF").unwrap();
        let polar = predict_one("GGGG").unwrap();
        assert!(hydrophobic.predicted_tr > polar.predicted_tr);
    }

    #[test]
    fn test_terminal_mods_are_stripped() {
        let plain = predict_one("AGLV").unwrap();
        let modified = predict_one("Ac-AGLV-NH2").unwrap();
        assert_eq!(plain.log_sum_aa, modified.log_sum_aa);
        assert_eq!(plain.clog_p, modified.clog_p);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let outcomes = predict(&["GGGG".to_string(), "GZG".to_string(), String::new()]);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0], RetentionOutcome::Predicted(_)));
        assert!(matches!(outcomes[1], RetentionOutcome::Failed { .. }));
        assert!(matches!(outcomes[2], RetentionOutcome::Failed { .. }));
    }

    #[test]
    fn test_failed_outcome_serialises_with_error_key() {
        let outcomes = predict(&["G!".to_string()]);
        let value = serde_json::to_value(&outcomes).unwrap();
        assert_eq!(value[0]["peptide"], "G!");
        assert!(value[0]["error"].is_string());
    }
}
