//! Shared application state for the web server.

use std::sync::Arc;

use proteogel_artifacts::ArtifactStore;
use proteogel_links::LinkResolver;

use crate::config::ServerConfig;

/// Shared state injected into every Axum handler. The simulators
/// themselves are pure; only link resolution and artifact storage carry
/// state.
pub struct AppState {
    pub links: LinkResolver,
    pub artifacts: ArtifactStore,
}

impl AppState {
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            links: LinkResolver::new()?,
            artifacts: ArtifactStore::open(&config.artifacts_dir).await?,
        })
    }
}

pub type SharedState = Arc<AppState>;
