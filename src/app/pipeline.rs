//! Shared "caliper pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV ingest -> transform -> fit -> derive caliper -> residuals
//!
//! The CLI can then focus on presentation (printing, plotting, exports).

use crate::domain::{CaliperConfig, CaliperResult, LinearFit, TransformedMeasurement};
use crate::error::AppError;
use crate::io::ingest::{IngestedData, load_measurements};
use crate::model::estimator;
use crate::report::MeasurementResidual;

/// All computed outputs of a single `roll caliper` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub points: Vec<TransformedMeasurement>,
    pub fit: LinearFit,
    pub caliper: CaliperResult,
    pub residuals: Vec<MeasurementResidual>,
}

/// Execute the full caliper pipeline and return the computed outputs.
pub fn run_caliper(config: &CaliperConfig) -> Result<RunOutput, AppError> {
    // 1) Ingest the measurement CSV.
    let ingest = load_measurements(&config.csv_path)?;

    // 2) Run the three estimator stages explicitly; the fit is kept around
    //    for reporting, plotting, and exports.
    let points = estimator::transform(&ingest.set)?;
    let fit = estimator::fit(&points)?;
    let caliper = estimator::derive_caliper(&fit)?;

    // 3) Compute per-measurement residuals against the fitted line.
    let residuals = crate::report::compute_residuals(&points, &fit);

    Ok(RunOutput {
        ingest,
        points,
        fit,
        caliper,
        residuals,
    })
}
