//! Environment-based server configuration.

use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ARTIFACTS_DIR: &str = "data/artifacts";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub artifacts_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `PROTEOGEL_*` environment variables,
    /// falling back to defaults matching the reference deployment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("PROTEOGEL_HOST").unwrap_or(defaults.host),
            port: env::var("PROTEOGEL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            artifacts_dir: env::var("PROTEOGEL_ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.artifacts_dir),
        }
    }
}
