//! 2-D electrophoresis endpoints: FASTA upload and the two chained
//! simulation stages. Request field names and defaults follow the wire
//! contract of the visualization client.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use proteogel_common::error::ProteogelError;
use proteogel_common::{ApiError, ProteinRecord, SimulationResult};
use proteogel_engine::ief::{self, IefParams, PhRange};
use proteogel_engine::sds::{self, MwBounds, SdsParams, YAxisMode};
use proteogel_fasta::{build_protein_records, header, parse_fasta_content};

use crate::state::SharedState;

fn default_canvas_width() -> f64 {
    ief::DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f64 {
    ief::DEFAULT_CANVAS_HEIGHT
}

fn default_steps() -> usize {
    ief::DEFAULT_STEPS
}

fn default_y_axis_mode() -> YAxisMode {
    YAxisMode::Mw
}

fn default_acrylamide() -> f64 {
    sds::DEFAULT_ACRYLAMIDE_PERCENTAGE
}

#[derive(Debug, Deserialize)]
pub struct IefRequest {
    #[serde(default)]
    pub proteins: Vec<ProteinRecord>,
    #[serde(rename = "phRange", default)]
    pub ph_range: PhRange,
    #[serde(rename = "canvasWidth", default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(rename = "canvasHeight", default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
}

#[derive(Debug, Deserialize)]
pub struct SdsRequest {
    #[serde(default)]
    pub proteins: Vec<ProteinRecord>,
    #[serde(rename = "yAxisMode", default = "default_y_axis_mode")]
    pub y_axis_mode: YAxisMode,
    #[serde(rename = "acrylamidePercentage", default = "default_acrylamide")]
    pub acrylamide_percentage: f64,
    #[serde(rename = "canvasHeight", default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(rename = "mwBounds", default)]
    pub mw_bounds: MwBounds,
}

/// POST /2d/parse-fasta — multipart FASTA upload(s) to enriched records.
pub async fn parse_fasta(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<ProteinRecord>>, ApiError> {
    let mut new_proteins: Vec<ProteinRecord> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProteogelError::Upload(e.to_string()))?
    {
        let content = field
            .text()
            .await
            .map_err(|e| ProteogelError::Upload(e.to_string()))?;
        let sequences = parse_fasta_content(&content)?;

        // One keyed link batch per file, fetched concurrently.
        let ids: Vec<String> = sequences
            .iter()
            .map(|seq| header::accession(&seq.header))
            .collect();
        let links = state.links.find_links(&ids).await;

        let mut records = build_protein_records(&sequences, &links, new_proteins.len());
        new_proteins.append(&mut records);
    }

    info!(count = new_proteins.len(), "parsed FASTA upload");
    Ok(Json(new_proteins))
}

/// POST /2d/simulate-ief
pub async fn simulate_ief(Json(req): Json<IefRequest>) -> Result<Json<SimulationResult>, ApiError> {
    let params = IefParams {
        ph_range: req.ph_range,
        canvas_width: req.canvas_width,
        canvas_height: req.canvas_height,
        steps: req.steps,
        seed: None,
    };
    let result = ief::simulate_ief(&req.proteins, &params)?;
    Ok(Json(result))
}

/// POST /2d/simulate-sds
pub async fn simulate_sds(Json(req): Json<SdsRequest>) -> Json<SimulationResult> {
    let params = SdsParams {
        y_axis_mode: req.y_axis_mode,
        acrylamide_percentage: req.acrylamide_percentage,
        canvas_height: req.canvas_height,
        steps: req.steps,
        mw_bounds: req.mw_bounds,
    };
    Json(sds::simulate_sds(&req.proteins, &params))
}
