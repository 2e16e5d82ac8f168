//! 1-D pipeline endpoints: per-well protein info from FASTA uploads.

use axum::extract::Multipart;
use axum::Json;

use proteogel_common::error::ProteogelError;
use proteogel_common::ApiError;
use proteogel_fasta::{batch_file_protein_info, file_protein_info, ProteinInfoEntry};

/// POST /1d/protein-info — single FASTA upload.
pub async fn protein_info(mut multipart: Multipart) -> Result<Json<Vec<ProteinInfoEntry>>, ApiError> {
    if let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProteogelError::Upload(e.to_string()))?
    {
        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field
            .text()
            .await
            .map_err(|e| ProteogelError::Upload(e.to_string()))?;
        return Ok(Json(file_protein_info(&filename, &content)));
    }
    Err(ProteogelError::MissingFilename.into())
}

/// POST /1d/protein-info/batch — one well per uploaded file.
pub async fn protein_info_batch(
    mut multipart: Multipart,
) -> Result<Json<Vec<Vec<ProteinInfoEntry>>>, ApiError> {
    let mut files: Vec<(String, String)> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProteogelError::Upload(e.to_string()))?
    {
        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field
            .text()
            .await
            .map_err(|e| ProteogelError::Upload(e.to_string()))?;
        files.push((filename, content));
    }
    Ok(Json(batch_file_protein_info(&files)))
}
