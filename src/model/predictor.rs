//! Closed-form roll length prediction.

use std::f64::consts::PI;

use crate::domain::{LengthResult, RollGeometry};
use crate::error::AppError;
use crate::math::round_to;
use crate::model::MM_PER_M;

/// Predict total roll length from caliper and diameter geometry.
///
/// The annulus between core and outer diameter, divided by the material
/// cross-section per meter (caliper), gives the total wound length:
///
/// ```text
/// length_m = π * (outer_m² - core_m²) / (4 * caliper_m)
/// ```
///
/// rounded to 1 decimal place. This is the algebraic inverse of the caliper
/// derivation, so an estimator output is always a valid caliper input here.
pub fn predict_length(geometry: &RollGeometry) -> Result<LengthResult, AppError> {
    let RollGeometry {
        outer_diameter_mm,
        core_diameter_mm,
        caliper_mm,
    } = *geometry;

    if !outer_diameter_mm.is_finite() || !core_diameter_mm.is_finite() || !caliper_mm.is_finite() {
        return Err(AppError::invalid_input(
            "Roll geometry must be finite (outer, core, caliper).",
        ));
    }
    if caliper_mm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Non-positive caliper: {caliper_mm} mm"
        )));
    }
    if core_diameter_mm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Non-positive core diameter: {core_diameter_mm} mm"
        )));
    }
    if outer_diameter_mm <= core_diameter_mm {
        return Err(AppError::invalid_input(format!(
            "Outer diameter ({outer_diameter_mm} mm) must exceed core diameter ({core_diameter_mm} mm)."
        )));
    }

    let outer_m = outer_diameter_mm / MM_PER_M;
    let core_m = core_diameter_mm / MM_PER_M;
    let caliper_m = caliper_mm / MM_PER_M;

    let length_m = PI * (outer_m * outer_m - core_m * core_m) / (4.0 * caliper_m);
    Ok(LengthResult {
        length_m: round_to(length_m, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MeasurementSet;
    use crate::error::ErrorKind;
    use crate::model::estimator::estimate_caliper;

    #[test]
    fn predicts_tutorial_roll_length() {
        // Caliper derived from the two tutorial points; predicting at the
        // larger measured diameter should recover its measured length.
        let geometry = RollGeometry {
            outer_diameter_mm: 120.0,
            core_diameter_mm: 40.0,
            caliper_mm: 0.5027,
        };
        let length = predict_length(&geometry).unwrap();
        assert_eq!(length.length_m, 20.0);
    }

    #[test]
    fn rejects_core_at_or_above_outer() {
        let geometry = RollGeometry {
            outer_diameter_mm: 100.0,
            core_diameter_mm: 100.0,
            caliper_mm: 0.5,
        };
        let err = predict_length(&geometry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_non_positive_caliper() {
        let geometry = RollGeometry {
            outer_diameter_mm: 800.0,
            core_diameter_mm: 100.0,
            caliper_mm: 0.0,
        };
        let err = predict_length(&geometry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn prediction_is_idempotent() {
        let geometry = RollGeometry {
            outer_diameter_mm: 813.0,
            core_diameter_mm: 152.0,
            caliper_mm: 0.08,
        };
        let first = predict_length(&geometry).unwrap();
        let second = predict_length(&geometry).unwrap();
        assert_eq!(first.length_m, second.length_m);
    }

    #[test]
    fn estimator_output_round_trips_through_predictor() {
        // Synthesize exact measurements from known constants, estimate the
        // caliper, then predict length at the widest diameter. The result
        // must match the synthesized length within the 0.1 m rounding step.
        let true_caliper_mm = 0.08;
        let core_mm = 152.0;
        let pairs: Vec<(f64, f64)> = [300.0, 450.0, 600.0, 750.0]
            .iter()
            .map(|&d_mm: &f64| {
                let outer_m = d_mm / 1000.0;
                let core_m = core_mm / 1000.0;
                let caliper_m = true_caliper_mm / 1000.0;
                let len = PI * (outer_m * outer_m - core_m * core_m) / (4.0 * caliper_m);
                (d_mm, len)
            })
            .collect();

        let caliper = estimate_caliper(&MeasurementSet::from_pairs(&pairs)).unwrap();
        assert!((caliper.caliper_mm - true_caliper_mm).abs() < 1e-3);

        let geometry = RollGeometry {
            outer_diameter_mm: 750.0,
            core_diameter_mm: core_mm,
            caliper_mm: caliper.caliper_mm,
        };
        let predicted = predict_length(&geometry).unwrap();
        let expected = pairs.last().unwrap().1;
        assert!((predicted.length_m - expected).abs() < 0.2);
    }
}
