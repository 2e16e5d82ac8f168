//! Pure position-mapping functions from scalar properties to canvas
//! coordinates. Out-of-range inputs clamp to the gel bounds rather than
//! erroring; the one exception is a zero-width pH range, which has no
//! defined mapping and is rejected.

use proteogel_common::error::{ProteogelError, Result};

/// Fixed molecular-weight window for log-scale normalisation.
pub const DEFAULT_MIN_MW: f64 = 1_000.0;
pub const DEFAULT_MAX_MW: f64 = 1_000_000.0;

/// Migration distance (gel lengths) of the smallest protein in
/// distance mode.
pub const DEFAULT_MAX_DISTANCE: f64 = 6.0;

/// Linear map of pH onto `[50, canvas_width - 50]`.
pub fn ph_position(ph: f64, canvas_width: f64, min_ph: f64, max_ph: f64) -> Result<f64> {
    if max_ph <= min_ph {
        return Err(ProteogelError::InvalidRange(format!(
            "pH range [{}, {}] has no width",
            min_ph, max_ph
        )));
    }
    let clamped = ph.max(min_ph).min(max_ph);
    Ok(50.0 + ((clamped - min_ph) / (max_ph - min_ph)) * (canvas_width - 100.0))
}

/// Log10-space interpolation of molecular weight onto
/// `[170, canvas_height - 50]`, inverted: heavier proteins migrate less.
/// Higher acrylamide percentage steepens the separation (divisor 15).
pub fn mw_position(
    mw: f64,
    canvas_height: f64,
    acrylamide_percentage: f64,
    min_mw: f64,
    max_mw: f64,
) -> f64 {
    let log_mw = mw.max(min_mw).min(max_mw).log10();
    let acrylamide_factor = 1.0 + (acrylamide_percentage - 7.5) / 15.0;
    170.0
        + ((max_mw.log10() - log_mw) / (max_mw.log10() - min_mw.log10()))
            * (canvas_height - 220.0)
            * acrylamide_factor
}

/// Distance-mode mapping: a normalised log-mass fraction becomes a
/// migration distance proportional to `1 - normalized_mw`, then re-maps
/// onto `[170, canvas_height - 50]`. The acrylamide divisor here is 10,
/// not 15 — the two modes are calibrated independently.
pub fn distance_position(
    mw: f64,
    canvas_height: f64,
    acrylamide_percentage: f64,
    max_distance_traveled: f64,
    min_mw: f64,
    max_mw: f64,
) -> f64 {
    let clamped = mw.max(min_mw).min(max_mw);
    let normalized_mw = (clamped.log10() - min_mw.log10()) / (max_mw.log10() - min_mw.log10());
    let acrylamide_factor = 1.0 + (acrylamide_percentage - 7.5) / 10.0;
    let distance = max_distance_traveled * (1.0 - normalized_mw) * acrylamide_factor;
    170.0 + (distance / (max_distance_traveled * acrylamide_factor)) * (canvas_height - 220.0)
}
