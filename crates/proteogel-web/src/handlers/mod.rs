//! HTTP handlers for all web routes.

pub mod artifacts;
pub mod electro1d;
pub mod electro2d;
pub mod retention;
pub mod system;
