//! Protein property calculator over the 20 canonical amino acids.
//!
//! The mass table is additive average residue masses (no water-loss
//! correction), and the pI is a pKa-weighted average over titratable
//! residues only. Both are calibrated to the position-mapping layer:
//! swapping in a Henderson–Hasselbalch solver would shift every band.

use std::collections::BTreeMap;

/// Average residue mass (Daltons) and side-chain pKa for one amino acid.
/// `pka == 0.0` marks a non-titratable residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residue {
    pub mass: f64,
    pub pka: f64,
}

/// The 20 canonical one-letter codes, alphabetical.
pub const AMINO_ACID_CODES: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V',
    'W', 'Y',
];

/// Fixed lookup for one residue, case-insensitive. Unknown letters return
/// `None` and contribute nothing to mass or pI.
pub fn residue(code: char) -> Option<Residue> {
    let (mass, pka) = match code.to_ascii_uppercase() {
        'A' => (71.07, 0.0),
        'R' => (156.18, 12.48),
        'N' => (114.08, 0.0),
        'D' => (115.08, 3.65),
        'C' => (103.14, 8.18),
        'E' => (129.11, 4.25),
        'Q' => (128.13, 0.0),
        'G' => (57.05, 0.0),
        'H' => (137.14, 6.00),
        'I' => (113.16, 0.0),
        'L' => (113.16, 0.0),
        'K' => (128.17, 10.53),
        'M' => (131.19, 0.0),
        'F' => (147.17, 0.0),
        'P' => (97.11, 0.0),
        'S' => (87.07, 0.0),
        'T' => (101.10, 0.0),
        'W' => (186.21, 0.0),
        'Y' => (163.17, 10.07),
        'V' => (99.13, 0.0),
        _ => return None,
    };
    Some(Residue { mass, pka })
}

/// Sum of per-residue average masses in Daltons.
pub fn molecular_weight(sequence: &str) -> f64 {
    sequence
        .chars()
        .filter_map(residue)
        .map(|r| r.mass)
        .sum()
}

/// Weighted average of nonzero pKa values across the residues present.
/// A sequence with no titratable residues returns exactly 7.0 — a fixed
/// sentinel the position mapping expects, not a biological claim.
pub fn theoretical_pi(sequence: &str) -> f64 {
    let mut total_pka = 0.0;
    let mut count = 0u32;
    for r in sequence.chars().filter_map(residue) {
        if r.pka > 0.0 {
            total_pka += r.pka;
            count += 1;
        }
    }
    if count > 0 {
        total_pka / count as f64
    } else {
        7.0
    }
}

/// Per-letter counts over the canonical alphabet; every code is present in
/// the output, zero included (the 1-D pipeline reports the full table).
pub fn amino_acid_counts(sequence: &str) -> BTreeMap<char, u32> {
    let mut counts: BTreeMap<char, u32> = AMINO_ACID_CODES.iter().map(|&c| (c, 0)).collect();
    for c in sequence.chars() {
        let upper = c.to_ascii_uppercase();
        if let Some(count) = counts.get_mut(&upper) {
            *count += 1;
        }
    }
    counts
}
