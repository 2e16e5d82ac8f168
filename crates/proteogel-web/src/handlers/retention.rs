//! Peptide retention-time prediction endpoint.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use proteogel_common::ApiError;

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    /// Comma-separated peptide sequences.
    #[serde(default)]
    pub peptides: Option<String>,
}

/// GET /pr/predict?peptides=GGGG,AGLV
pub async fn predict_retention(
    Query(query): Query<PredictQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let peptides: Vec<String> = query
        .peptides
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    if peptides.is_empty() {
        return Ok(Json(serde_json::json!({
            "error": "No valid peptides provided."
        })));
    }

    let outcomes = proteogel_retention::predict(&peptides);
    Ok(Json(serde_json::to_value(outcomes)?))
}
