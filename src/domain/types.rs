//! Shared domain types.
//!
//! These types are intentionally kept lightweight and (where exported)
//! serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV
//! - reloaded later for length prediction

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One observed point on a roll: outer diameter at some unwound length.
///
/// Units follow the measurement sheet convention: diameters in millimeters,
/// lengths in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub diameter_mm: f64,
    pub length_m: f64,
}

/// The full ordered sequence of measurements read from an external source.
///
/// Order is irrelevant to the fit but preserved for display and exports.
#[derive(Debug, Clone, Default)]
pub struct MeasurementSet {
    measurements: Vec<Measurement>,
}

impl MeasurementSet {
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            measurements: pairs
                .iter()
                .map(|&(diameter_mm, length_m)| Measurement {
                    diameter_mm,
                    length_m,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }
}

/// A measurement with its derived regression columns.
///
/// The physical model is linear in diameter *squared* (in meters), not in raw
/// diameter, so the transform stage computes these once and downstream code
/// (fit, residuals, plots, exports) reads them without re-deriving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedMeasurement {
    pub diameter_mm: f64,
    pub length_m: f64,
    pub diameter_m: f64,
    pub diameter_m_squared: f64,
}

/// Result of fitting `length_m = slope * diameter_m_squared + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Meters of material per square meter of diameter growth.
    pub slope: f64,
    /// Free intercept in meters.
    pub intercept: f64,
    /// Coefficient of determination, in `[0, 1]` for a non-degenerate fit.
    pub r_squared: f64,
}

/// The derived physical constant: material thickness per wrap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaliperResult {
    /// Caliper in millimeters, rounded to 4 decimal places.
    pub caliper_mm: f64,
}

/// Input to length prediction. All fields in millimeters, strictly positive,
/// with `outer_diameter_mm > core_diameter_mm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollGeometry {
    pub outer_diameter_mm: f64,
    pub core_diameter_mm: f64,
    pub caliper_mm: f64,
}

/// Predicted roll length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthResult {
    /// Length in meters, rounded to 1 decimal place.
    pub length_m: f64,
}

/// Summary stats about the measurements actually used for fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub diameter_min_mm: f64,
    pub diameter_max_mm: f64,
    pub length_min_m: f64,
    pub length_max_m: f64,
}

/// A full caliper run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct CaliperConfig {
    pub csv_path: PathBuf,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export_results: Option<PathBuf>,
    pub export_caliper: Option<PathBuf>,
}

/// A saved caliper estimate (JSON), readable back by `roll length`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaliperFile {
    pub tool: String,
    pub caliper_mm: f64,
    pub fit: LinearFit,
    pub stats: DatasetStats,
}
