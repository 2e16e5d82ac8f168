//! proteogel-web — HTTP layer for the electrophoresis simulation service.
//! Exposes:
//!   - 2-D pipeline: FASTA upload, IEF and SDS-PAGE simulation
//!   - 1-D pipeline: per-well protein info
//!   - Artifact storage CRUD
//!   - Peptide retention-time prediction

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
