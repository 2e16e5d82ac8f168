/// Protein records and simulation frames shared across the workspace.
/// Field renames mirror the JSON wire contract the visualization client
/// was built against, which mixes naming styles (`pH`, `fullName`, `ID`,
/// `display_name`).

use serde::{Deserialize, Serialize};

fn default_x() -> f64 {
    50.0
}

fn default_y() -> f64 {
    300.0
}

fn default_current_ph() -> f64 {
    7.0
}

fn default_link() -> String {
    "N/A".to_string()
}

// ---------------------------------------------------------------------------
// Protein record
// ---------------------------------------------------------------------------

/// One protein as produced by FASTA parsing or supplied by the caller.
/// Immutable per simulation: every frame derives from a fresh copy, so
/// caller-supplied records are never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub organism: String,
    #[serde(rename = "uniprotId", default = "default_link")]
    pub uniprot_id: String,
    /// Molecular weight in Daltons.
    pub mw: f64,
    /// Theoretical isoelectric point.
    #[serde(rename = "pH")]
    pub ph: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub sequence: String,
    /// Canvas seed position; SDS-PAGE carries `x` forward unchanged.
    #[serde(default = "default_x")]
    pub x: f64,
    #[serde(default = "default_y")]
    pub y: f64,
    #[serde(rename = "currentpH", default = "default_current_ph")]
    pub current_ph: f64,
    #[serde(default)]
    pub velocity: f64,
    #[serde(default)]
    pub settled: bool,
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Link", default = "default_link")]
    pub link: String,
    #[serde(rename = "display_name", default)]
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// Simulation frames
// ---------------------------------------------------------------------------

/// One protein at one simulation step: a full copy of the record with the
/// stage fields written over it, never a diff. Each frame is independently
/// renderable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    #[serde(flatten)]
    pub protein: ProteinRecord,
    #[serde(rename = "bandWidth")]
    pub band_width: f64,
    /// Set only by the SDS-PAGE stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condensing: Option<bool>,
}

/// Ordered steps `0..=N`, one frame per input protein per step, proteins in
/// stable input order. Serialises as the raw nested array — no envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationResult(pub Vec<Vec<Frame>>);

impl SimulationResult {
    pub fn step_count(&self) -> usize {
        self.0.len()
    }

    pub fn steps(&self) -> &[Vec<Frame>] {
        &self.0
    }

    pub fn final_step(&self) -> Option<&[Frame]> {
        self.0.last().map(|frames| frames.as_slice())
    }
}
