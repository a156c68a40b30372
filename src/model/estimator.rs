//! Caliper estimation from raw roll measurements.
//!
//! The estimate runs in three independently callable pure stages:
//!
//! 1. `transform` — derive `diameter_m` and `diameter_m²` per measurement
//! 2. `fit` — closed-form OLS of length on diameter²
//! 3. `derive_caliper` — invert the fitted slope into a thickness
//!
//! Each stage validates its own inputs before computing; nothing is clamped
//! or defaulted. `estimate_caliper` chains the three for callers that only
//! want the final constant.

use std::f64::consts::PI;

use crate::domain::{CaliperResult, LinearFit, MeasurementSet, TransformedMeasurement};
use crate::error::AppError;
use crate::math::{fit_line, round_to};
use crate::model::MM_PER_M;

/// Stage 1: derive the regression columns for each measurement.
///
/// Fails on an empty set and on any non-positive or non-finite field.
pub fn transform(set: &MeasurementSet) -> Result<Vec<TransformedMeasurement>, AppError> {
    if set.is_empty() {
        return Err(AppError::invalid_input(
            "Measurement set is empty; need at least two points with distinct diameters.",
        ));
    }

    set.iter()
        .map(|m| {
            if !m.diameter_mm.is_finite() || !m.length_m.is_finite() {
                return Err(AppError::invalid_input(format!(
                    "Non-finite measurement: diameter={} mm, length={} m",
                    m.diameter_mm, m.length_m
                )));
            }
            if m.diameter_mm <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Non-positive roll diameter: {} mm",
                    m.diameter_mm
                )));
            }

            let diameter_m = m.diameter_mm / MM_PER_M;
            Ok(TransformedMeasurement {
                diameter_mm: m.diameter_mm,
                length_m: m.length_m,
                diameter_m,
                diameter_m_squared: diameter_m * diameter_m,
            })
        })
        .collect()
}

/// Stage 2: unweighted OLS of `length_m` on `diameter_m²`.
///
/// No smoothing, outlier rejection, or weighting is applied; callers wanting
/// robustness must pre-filter their measurement set.
pub fn fit(points: &[TransformedMeasurement]) -> Result<LinearFit, AppError> {
    let xs: Vec<f64> = points.iter().map(|p| p.diameter_m_squared).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.length_m).collect();

    fit_line(&xs, &ys).ok_or_else(|| {
        AppError::degenerate_fit(
            "All diameter\u{b2} values are identical; cannot fit a line through a zero-variance predictor.",
        )
    })
}

/// Stage 3: invert the fitted slope into a caliper.
///
/// The slope of length vs diameter² is `π / (4 * caliper_m)`, so the caliper
/// in mm is `(π / (4 * slope)) * 1000`, rounded to 4 decimal places.
pub fn derive_caliper(fit: &LinearFit) -> Result<CaliperResult, AppError> {
    if fit.slope <= 0.0 {
        return Err(AppError::invalid_physical(format!(
            "Fitted slope {} is non-positive; length must grow with diameter\u{b2} for a constant-caliper roll.",
            fit.slope
        )));
    }

    let caliper_m = PI / (4.0 * fit.slope);
    Ok(CaliperResult {
        caliper_mm: round_to(caliper_m * MM_PER_M, 4),
    })
}

/// Full estimate: transform, fit, derive.
pub fn estimate_caliper(set: &MeasurementSet) -> Result<CaliperResult, AppError> {
    let points = transform(set)?;
    let line = fit(&points)?;
    derive_caliper(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn tutorial_set() -> MeasurementSet {
        MeasurementSet::from_pairs(&[(40.0, 0.0), (120.0, 20.0)])
    }

    #[test]
    fn transform_derives_meter_columns() {
        let points = transform(&tutorial_set()).unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[0].diameter_m - 0.04).abs() < 1e-12);
        assert!((points[0].diameter_m_squared - 0.0016).abs() < 1e-12);
        assert!((points[1].diameter_m_squared - 0.0144).abs() < 1e-12);
    }

    #[test]
    fn transform_rejects_empty_set() {
        let err = transform(&MeasurementSet::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn transform_rejects_non_positive_diameter() {
        let set = MeasurementSet::from_pairs(&[(100.0, 5.0), (0.0, 10.0)]);
        let err = transform(&set).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn tutorial_fit_matches_hand_calculation() {
        // x = [0.0016, 0.0144], y = [0, 20]:
        // slope = 20 / 0.0128 = 1562.5, intercept = 10 - 1562.5 * 0.008 = -2.5
        let points = transform(&tutorial_set()).unwrap();
        let line = fit(&points).unwrap();

        assert!((line.slope - 1562.5).abs() < 1e-6);
        assert!((line.intercept - -2.5).abs() < 1e-9);
        assert!((line.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tutorial_caliper_rounds_to_four_decimals() {
        let caliper = estimate_caliper(&tutorial_set()).unwrap();
        assert_eq!(caliper.caliper_mm, 0.5027);
    }

    #[test]
    fn identical_diameters_are_degenerate() {
        let set = MeasurementSet::from_pairs(&[(100.0, 1.0), (100.0, 2.0), (100.0, 3.0)]);
        let err = estimate_caliper(&set).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateFit);
    }

    #[test]
    fn shrinking_lengths_are_non_physical() {
        // Length decreasing with diameter gives a negative slope.
        let set = MeasurementSet::from_pairs(&[(40.0, 20.0), (120.0, 0.0)]);
        let err = estimate_caliper(&set).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPhysicalResult);
    }

    #[test]
    fn estimate_is_idempotent() {
        let set = MeasurementSet::from_pairs(&[(40.0, 0.0), (80.0, 9.4), (120.0, 20.0)]);
        let first = estimate_caliper(&set).unwrap();
        let second = estimate_caliper(&set).unwrap();
        assert_eq!(first.caliper_mm, second.caliper_mm);
    }
}
