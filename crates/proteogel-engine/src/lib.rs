//! proteogel-engine — the electrophoresis simulation engine.
//!
//! Two chained stages model a 2-D gel run:
//! 1. Isoelectric focusing (IEF): proteins spread across the pH gradient,
//!    then converge on the x position matching their isoelectric point.
//! 2. SDS-PAGE: the focused bands condense, then migrate down the gel at a
//!    rate set by molecular weight and acrylamide percentage.
//!
//! The simulators are pure, synchronous computations over in-memory lists.
//! Every frame derives from a copy of the caller's record, so concurrent
//! requests share nothing. The model is an animation heuristic calibrated
//! to the front end's canvas, not a transport solver.

pub mod ief;
pub mod position;
pub mod residues;
pub mod sds;

pub use ief::{simulate_ief, IefParams, PhRange};
pub use sds::{simulate_sds, MwBounds, SdsParams, YAxisMode};

pub type Result<T> = proteogel_common::error::Result<T>;
