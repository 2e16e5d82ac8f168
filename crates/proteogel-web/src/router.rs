//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    artifacts::{delete_artifact, download_artifact, list_artifacts, rename_artifact, upload_artifact},
    electro1d::{protein_info, protein_info_batch},
    electro2d::{parse_fasta, simulate_ief, simulate_sds},
    retention::predict_retention,
    system::ready,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(ready))

        // 2-D electrophoresis pipeline
        .route("/2d/parse-fasta",  post(parse_fasta))
        .route("/2d/simulate-ief", post(simulate_ief))
        .route("/2d/simulate-sds", post(simulate_sds))

        // 1-D pipeline
        .route("/1d/protein-info",       post(protein_info))
        .route("/1d/protein-info/batch", post(protein_info_batch))

        // Artifact storage
        .route("/artifacts",            get(list_artifacts).post(upload_artifact))
        .route(
            "/artifacts/{filename}",
            get(download_artifact).put(rename_artifact).delete(delete_artifact),
        )

        // Peptide retention prediction
        .route("/pr/predict", get(predict_retention))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
