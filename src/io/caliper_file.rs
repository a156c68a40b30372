//! Read/write caliper JSON files.
//!
//! Caliper JSON is the "portable" representation of an estimate:
//! - the derived caliper constant
//! - the fit it came from (slope, intercept, r²)
//! - dataset stats for provenance
//!
//! `roll length --caliper-file` reads it back, closing the estimator →
//! predictor loop without retyping constants. The schema is defined by
//! `domain::CaliperFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CaliperFile, CaliperResult, LinearFit};
use crate::error::AppError;
use crate::io::ingest::IngestedData;

/// Write a caliper JSON file.
pub fn write_caliper_json(
    path: &Path,
    caliper: &CaliperResult,
    fit: &LinearFit,
    ingest: &IngestedData,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to create caliper JSON '{}': {e}",
            path.display()
        ))
    })?;

    let out = CaliperFile {
        tool: "roll".to_string(),
        caliper_mm: caliper.caliper_mm,
        fit: *fit,
        stats: ingest.stats,
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::invalid_input(format!("Failed to write caliper JSON: {e}")))?;

    Ok(())
}

/// Read a caliper JSON file.
pub fn read_caliper_json(path: &Path) -> Result<CaliperFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to open caliper JSON '{}': {e}",
            path.display()
        ))
    })?;
    let caliper: CaliperFile = serde_json::from_reader(file)
        .map_err(|e| AppError::invalid_input(format!("Invalid caliper JSON: {e}")))?;
    Ok(caliper)
}
