//! The roll model: caliper estimation and length prediction.
//!
//! Two components share one piece of geometry. A roll of material with
//! constant thickness (caliper) sweeps a fixed cross-sectional area per
//! meter of material, so unwound length is linear in diameter *squared*:
//!
//! ```text
//! length_m = slope * diameter_m²  + intercept,    slope = π / (4 * caliper_m)
//! ```
//!
//! - `estimator` derives the caliper from measured (diameter, length) pairs
//!   by fitting that line and inverting the slope.
//! - `predictor` applies the inverse: the annulus area between outer and
//!   core diameter, divided by caliper, is the total length on the roll.

pub mod estimator;
pub mod predictor;

pub use estimator::*;
pub use predictor::*;

/// Millimeters per meter; all public units are mm for diameters/caliper and
/// m for lengths, converted at the model boundary.
pub(crate) const MM_PER_M: f64 = 1000.0;
