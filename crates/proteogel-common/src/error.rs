use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProteogelError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Target name already exists: {0}")]
    AlreadyExists(String),

    #[error("Missing filename")]
    MissingFilename,

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Invalid peptide: {0}")]
    InvalidPeptide(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProteogelError>;

/// Axum-facing wrapper that maps the error taxonomy onto HTTP statuses.
/// Response body matches the `{"detail": ...}` shape the front end expects.
#[derive(Debug)]
pub struct ApiError(pub ProteogelError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ProteogelError::NotFound(_) => StatusCode::NOT_FOUND,
            ProteogelError::InvalidRange(_)
            | ProteogelError::AlreadyExists(_)
            | ProteogelError::MissingFilename
            | ProteogelError::Upload(_)
            | ProteogelError::InvalidPeptide(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<ProteogelError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}
