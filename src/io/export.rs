//! Export per-measurement results and sample data to CSV.
//!
//! The results export carries the raw columns plus the derived transform
//! columns and fitted values, so a plotting tool or spreadsheet can render
//! the scatter and the fitted line without re-deriving anything.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Measurement;
use crate::error::AppError;
use crate::report::MeasurementResidual;

/// Write per-measurement results to a CSV file.
pub fn write_results_csv(path: &Path, residuals: &[MeasurementResidual]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(
        file,
        "diameter_mm,length_m,diameter_m,diameter_m_squared,length_fit_m,residual_m"
    )
    .map_err(|e| AppError::invalid_input(format!("Failed to write export CSV header: {e}")))?;

    for r in residuals {
        let p = &r.point;
        writeln!(
            file,
            "{},{},{:.6},{:.8},{:.4},{:.4}",
            p.diameter_mm, p.length_m, p.diameter_m, p.diameter_m_squared, r.length_fit_m, r.residual_m,
        )
        .map_err(|e| AppError::invalid_input(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write measurements using the ingest schema (`diameter`, `length`), so the
/// output of `roll sample` feeds straight back into `roll caliper`.
pub fn write_sample_csv<W: Write>(mut out: W, measurements: &[Measurement]) -> Result<(), AppError> {
    writeln!(out, "diameter,length")
        .map_err(|e| AppError::invalid_input(format!("Failed to write sample CSV header: {e}")))?;

    for m in measurements {
        writeln!(out, "{:.3},{:.4}", m.diameter_mm, m.length_m)
            .map_err(|e| AppError::invalid_input(format!("Failed to write sample CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::read_measurements;

    #[test]
    fn sample_csv_round_trips_through_ingest() {
        let measurements = vec![
            Measurement {
                diameter_mm: 152.0,
                length_m: 0.0,
            },
            Measurement {
                diameter_mm: 813.0,
                length_m: 5430.2,
            },
        ];

        let mut buf = Vec::new();
        write_sample_csv(&mut buf, &measurements).unwrap();

        let data = read_measurements(buf.as_slice()).unwrap();
        assert_eq!(data.rows_used, 2);
        assert_eq!(data.set.measurements()[1].length_m, 5430.2);
    }
}
