//! Synthetic roll measurement generation.
//!
//! Generates (diameter, length) pairs from known physical constants, with
//! optional Gaussian noise on the lengths. Useful for:
//!
//! - producing demo CSVs for `roll caliper` without a winder at hand
//! - round-trip tests (synthesize → estimate → predict)
//!
//! Generation is fully deterministic for a given seed + config.

use std::f64::consts::PI;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::Measurement;
use crate::error::AppError;

/// Configuration for synthetic measurement generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// True material thickness used to synthesize lengths, in mm.
    pub caliper_mm: f64,
    /// Core (empty spool) diameter in mm.
    pub core_diameter_mm: f64,
    /// Largest roll diameter to sample, in mm. Must exceed the core.
    pub max_diameter_mm: f64,
    /// Number of measurements to generate.
    pub count: usize,
    /// Standard deviation of Gaussian length noise, in meters. Zero means
    /// exact lengths.
    pub noise_m: f64,
    /// RNG seed.
    pub seed: u64,
}

/// Generate synthetic measurements, sorted by diameter.
pub fn generate_measurements(config: &SampleConfig) -> Result<Vec<Measurement>, AppError> {
    if config.count == 0 {
        return Err(AppError::invalid_input("Sample count must be > 0."));
    }
    if !(config.caliper_mm.is_finite() && config.caliper_mm > 0.0) {
        return Err(AppError::invalid_input("Sample caliper must be > 0 mm."));
    }
    if !(config.core_diameter_mm.is_finite() && config.core_diameter_mm > 0.0) {
        return Err(AppError::invalid_input("Sample core diameter must be > 0 mm."));
    }
    if !(config.max_diameter_mm.is_finite() && config.max_diameter_mm > config.core_diameter_mm) {
        return Err(AppError::invalid_input(
            "Sample max diameter must exceed the core diameter.",
        ));
    }
    if !(config.noise_m.is_finite() && config.noise_m >= 0.0) {
        return Err(AppError::invalid_input("Sample noise must be >= 0 m."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::invalid_input(format!("Noise distribution error: {e}")))?;

    let mut measurements = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let diameter_mm = rng.gen_range(config.core_diameter_mm..=config.max_diameter_mm);
        let exact = exact_length_m(diameter_mm, config.core_diameter_mm, config.caliper_mm);

        let noise = if config.noise_m > 0.0 {
            normal.sample(&mut rng) * config.noise_m
        } else {
            0.0
        };

        // Lengths cannot be negative, noisy or not.
        let length_m = (exact + noise).max(0.0);
        measurements.push(Measurement {
            diameter_mm,
            length_m,
        });
    }

    measurements.sort_by(|a, b| {
        a.diameter_mm
            .partial_cmp(&b.diameter_mm)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(measurements)
}

/// Unrounded annulus length, used only for synthesis. The published
/// prediction path (`model::predictor`) rounds to 1 decimal.
fn exact_length_m(diameter_mm: f64, core_mm: f64, caliper_mm: f64) -> f64 {
    let d = diameter_mm / 1000.0;
    let c = core_mm / 1000.0;
    let caliper = caliper_mm / 1000.0;
    PI * (d * d - c * c) / (4.0 * caliper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MeasurementSet;
    use crate::model::estimator::estimate_caliper;

    fn base_config() -> SampleConfig {
        SampleConfig {
            caliper_mm: 0.08,
            core_diameter_mm: 152.0,
            max_diameter_mm: 813.0,
            count: 12,
            noise_m: 0.0,
            seed: 42,
        }
    }

    #[test]
    fn same_seed_gives_identical_samples() {
        let a = generate_measurements(&base_config()).unwrap();
        let b = generate_measurements(&base_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn noiseless_samples_recover_the_true_caliper() {
        let measurements = generate_measurements(&base_config()).unwrap();
        let caliper = estimate_caliper(&MeasurementSet::new(measurements)).unwrap();
        assert!((caliper.caliper_mm - 0.08).abs() < 1e-3);
    }

    #[test]
    fn noisy_samples_recover_the_caliper_approximately() {
        let config = SampleConfig {
            noise_m: 5.0,
            count: 200,
            ..base_config()
        };
        let measurements = generate_measurements(&config).unwrap();
        let caliper = estimate_caliper(&MeasurementSet::new(measurements)).unwrap();
        assert!((caliper.caliper_mm - 0.08).abs() < 0.005);
    }

    #[test]
    fn rejects_core_at_or_above_max() {
        let config = SampleConfig {
            max_diameter_mm: 152.0,
            ..base_config()
        };
        assert!(generate_measurements(&config).is_err());
    }

    #[test]
    fn diameters_stay_in_range_and_sorted() {
        let measurements = generate_measurements(&base_config()).unwrap();
        assert!(measurements.windows(2).all(|w| w[0].diameter_mm <= w[1].diameter_mm));
        assert!(measurements
            .iter()
            .all(|m| m.diameter_mm >= 152.0 && m.diameter_mm <= 813.0));
    }
}
