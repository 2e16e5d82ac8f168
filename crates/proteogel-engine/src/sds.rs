//! SDS-PAGE simulator, chained after IEF.
//!
//! Step 0 condenses every band to the stacking line; steps 1..N ease each
//! protein down toward the y position its molecular weight maps to. The x
//! coordinate is whatever the upstream IEF run left in the record — this
//! stage never recomputes it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use proteogel_common::{Frame, ProteinRecord, SimulationResult};

use crate::position::{
    distance_position, mw_position, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_MW, DEFAULT_MIN_MW,
};

pub const DEFAULT_STEPS: usize = 25;
pub const DEFAULT_ACRYLAMIDE_PERCENTAGE: f64 = 7.5;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Hard ceiling on the migration target. A policy constant, not derived
/// from the canvas height.
pub const TARGET_Y_CEILING: f64 = 600.0;

/// Stacking line where bands condense before separation.
const CONDENSED_Y: f64 = 150.0;
/// Band width of a condensed band; carried forward through migration.
const CONDENSED_BAND_WIDTH: f64 = 3.0;
/// Constant easing rate of the migration, unlike IEF's accelerating one.
const MIGRATION_RATE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxisMode {
    Mw,
    Distance,
}

/// Molecular-weight window used for log-scale normalisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MwBounds {
    /// The fixed `[1 kDa, 1 MDa]` window.
    #[default]
    Fixed,
    /// `[min, max]` over the request batch. Falls back to the fixed window
    /// when the batch has fewer than two distinct masses.
    BatchDynamic,
}

#[derive(Debug, Clone)]
pub struct SdsParams {
    pub y_axis_mode: YAxisMode,
    pub acrylamide_percentage: f64,
    pub canvas_height: f64,
    pub steps: usize,
    pub mw_bounds: MwBounds,
}

impl Default for SdsParams {
    fn default() -> Self {
        Self {
            y_axis_mode: YAxisMode::Mw,
            acrylamide_percentage: DEFAULT_ACRYLAMIDE_PERCENTAGE,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            steps: DEFAULT_STEPS,
            mw_bounds: MwBounds::default(),
        }
    }
}

/// Run the SDS-PAGE stage and return all `steps + 1` frame sets.
///
/// The caller supplies the original protein list, with each record's `x`
/// already finalised by a prior IEF run; that `x` is carried unchanged
/// through every step.
pub fn simulate_sds(proteins: &[ProteinRecord], params: &SdsParams) -> SimulationResult {
    let steps = params.steps.max(1);
    let (min_mw, max_mw) = resolve_mw_bounds(proteins, params.mw_bounds);

    debug!(
        proteins = proteins.len(),
        steps,
        mode = ?params.y_axis_mode,
        "running SDS-PAGE simulation"
    );

    let mut simulation: Vec<Vec<Frame>> = Vec::with_capacity(steps + 1);

    let mut condensed = Vec::with_capacity(proteins.len());
    for protein in proteins {
        let mut data = protein.clone();
        data.y = CONDENSED_Y;
        condensed.push(Frame {
            protein: data,
            band_width: CONDENSED_BAND_WIDTH,
            condensing: Some(true),
        });
    }
    simulation.push(condensed);

    for step in 1..=steps {
        let mut step_frames = Vec::with_capacity(proteins.len());
        for (idx, protein) in proteins.iter().enumerate() {
            let prev = &simulation[step - 1][idx];
            let target_y = match params.y_axis_mode {
                YAxisMode::Mw => mw_position(
                    protein.mw,
                    params.canvas_height,
                    params.acrylamide_percentage,
                    min_mw,
                    max_mw,
                ),
                YAxisMode::Distance => distance_position(
                    protein.mw,
                    params.canvas_height,
                    params.acrylamide_percentage,
                    DEFAULT_MAX_DISTANCE,
                    min_mw,
                    max_mw,
                ),
            };
            let target_y = target_y.min(TARGET_Y_CEILING);

            let mut data = protein.clone();
            data.x = prev.protein.x;
            data.y = prev.protein.y + (target_y - prev.protein.y) * MIGRATION_RATE;
            step_frames.push(Frame {
                protein: data,
                band_width: prev.band_width,
                condensing: Some(false),
            });
        }
        simulation.push(step_frames);
    }

    SimulationResult(simulation)
}

fn resolve_mw_bounds(proteins: &[ProteinRecord], bounds: MwBounds) -> (f64, f64) {
    match bounds {
        MwBounds::Fixed => (DEFAULT_MIN_MW, DEFAULT_MAX_MW),
        MwBounds::BatchDynamic => {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for protein in proteins {
                min = min.min(protein.mw);
                max = max.max(protein.mw);
            }
            if min.is_finite() && max > min {
                (min, max)
            } else {
                (DEFAULT_MIN_MW, DEFAULT_MAX_MW)
            }
        }
    }
}
