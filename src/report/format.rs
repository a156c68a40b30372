//! Residual computation and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for golden tests)

use crate::domain::{CaliperResult, LengthResult, LinearFit, RollGeometry, TransformedMeasurement};
use crate::io::ingest::IngestedData;

/// A measurement with its fitted length and residual.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementResidual {
    pub point: TransformedMeasurement,
    pub length_fit_m: f64,
    pub residual_m: f64,
}

/// Evaluate the fitted line at each measurement.
pub fn compute_residuals(points: &[TransformedMeasurement], fit: &LinearFit) -> Vec<MeasurementResidual> {
    points
        .iter()
        .map(|p| {
            let length_fit_m = fit.slope * p.diameter_m_squared + fit.intercept;
            MeasurementResidual {
                point: *p,
                length_fit_m,
                residual_m: p.length_m - length_fit_m,
            }
        })
        .collect()
}

/// Format the full caliper-run summary (dataset stats + fit + caliper).
pub fn format_caliper_summary(
    ingest: &IngestedData,
    fit: &LinearFit,
    caliper: &CaliperResult,
) -> String {
    let mut out = String::new();

    out.push_str("=== roll - Caliper Estimate ===\n");
    out.push_str(&format!(
        "Rows: read={} | used={} | skipped={}\n",
        ingest.rows_read,
        ingest.rows_used,
        ingest.row_errors.len()
    ));
    out.push_str(&format!(
        "Diameter: [{:.1}, {:.1}] mm | Length: [{:.1}, {:.1}] m\n",
        ingest.stats.diameter_min_mm,
        ingest.stats.diameter_max_mm,
        ingest.stats.length_min_m,
        ingest.stats.length_max_m
    ));

    for e in &ingest.row_errors {
        out.push_str(&format!("  (skipped line {}) {}\n", e.line, e.message));
    }

    out.push_str("\nFit (length vs diameter\u{b2}):\n");
    out.push_str(&format!("- slope: {:.6} m/m\u{b2}\n", fit.slope));
    out.push_str(&format!("- intercept: {:.6} m\n", fit.intercept));
    out.push_str(&format!("- R\u{b2}: {:.6}\n", fit.r_squared));

    out.push_str(&format!("\nCaliper: {:.4} mm\n", caliper.caliper_mm));

    out
}

/// Format the length-prediction summary.
pub fn format_length_summary(geometry: &RollGeometry, length: &LengthResult) -> String {
    let mut out = String::new();

    out.push_str("=== roll - Length Prediction ===\n");
    out.push_str(&format!("Outer diameter: {:.1} mm\n", geometry.outer_diameter_mm));
    out.push_str(&format!("Core diameter: {:.1} mm\n", geometry.core_diameter_mm));
    out.push_str(&format!("Caliper: {:.4} mm\n", geometry.caliper_mm));
    out.push_str(&format!("\nLength: {:.1} m\n", length.length_m));

    out
}
