//! Artifact storage endpoints.

use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use proteogel_artifacts::ArtifactMeta;
use proteogel_common::error::ProteogelError;
use proteogel_common::ApiError;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    pub new_name: String,
}

/// GET /artifacts
pub async fn list_artifacts(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ArtifactMeta>>, ApiError> {
    Ok(Json(state.artifacts.list().await?))
}

/// POST /artifacts — multipart upload, first file field wins.
pub async fn upload_artifact(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<ArtifactMeta>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProteogelError::Upload(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ProteogelError::Upload(e.to_string()))?;
        let meta = state.artifacts.save(&filename, &bytes).await?;
        return Ok(Json(meta));
    }
    Err(ProteogelError::MissingFilename.into())
}

/// GET /artifacts/{filename}
pub async fn download_artifact(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let path = state.artifacts.resolve(&filename).await?;
    let bytes = tokio::fs::read(&path).await.map_err(ProteogelError::from)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or(filename);

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", name),
        ),
    ];
    Ok((headers, bytes))
}

/// PUT /artifacts/{filename}
pub async fn rename_artifact(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
    Json(body): Json<RenameRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (old_name, new_name) = state.artifacts.rename(&filename, &body.new_name).await?;
    Ok(Json(serde_json::json!({
        "old_name": old_name,
        "new_name": new_name,
    })))
}

/// DELETE /artifacts/{filename}
pub async fn delete_artifact(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.artifacts.delete(&filename).await?;
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
