//! CSV ingest and normalization.
//!
//! This module turns a measurement-sheet CSV into a clean `MeasurementSet`
//! that is safe to hand to the estimator.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip unparseable rows, but report what happened)
//! - **Separation of concerns**: no fitting logic here, and no physical
//!   validation either — positivity of diameters is the transform stage's
//!   invariant, so non-positive values pass through and fail loudly there.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{DatasetStats, Measurement, MeasurementSet};
use crate::error::AppError;

/// Accepted header spellings for the diameter column (mm).
const DIAMETER_ALIASES: &[&str] = &["diameter", "diameter_mm", "diam"];

/// Accepted header spellings for the length column (m).
const LENGTH_ALIASES: &[&str] = &["length", "length_m"];

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: the measurement set + stats + row errors.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub set: MeasurementSet,
    pub stats: DatasetStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load measurements from a CSV file.
pub fn load_measurements(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    read_measurements(file)
}

/// Load measurements from any reader (testable without touching the disk).
pub fn read_measurements<R: Read>(reader: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::invalid_input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let diameter_idx = resolve_column(&header_map, DIAMETER_ALIASES).ok_or_else(|| {
        AppError::invalid_input(
            "Missing required column: `diameter` (accepted: diameter, diameter_mm, diam)",
        )
    })?;
    let length_idx = resolve_column(&header_map, LENGTH_ALIASES).ok_or_else(|| {
        AppError::invalid_input("Missing required column: `length` (accepted: length, length_m)")
    })?;

    let mut measurements = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, diameter_idx, length_idx) {
            Ok(m) => measurements.push(m),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    let rows_used = measurements.len();
    if rows_used == 0 {
        return Err(AppError::invalid_input(
            "No valid measurement rows found in CSV.",
        ));
    }

    let stats = compute_stats(&measurements);

    Ok(IngestedData {
        set: MeasurementSet::new(measurements),
        stats,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on
    // the first header. If we don't strip it, schema validation will
    // incorrectly report a missing diameter column.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn resolve_column(header_map: &HashMap<String, usize>, aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| header_map.get(*alias).copied())
}

fn parse_row(record: &StringRecord, diameter_idx: usize, length_idx: usize) -> Result<Measurement, String> {
    let diameter_mm = parse_field(record, diameter_idx, "diameter")?;
    let length_m = parse_field(record, length_idx, "length")?;
    Ok(Measurement {
        diameter_mm,
        length_m,
    })
}

fn parse_field(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing `{name}` value."))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("Invalid `{name}` value: '{raw}'"))?;
    if !value.is_finite() {
        return Err(format!("Non-finite `{name}` value: '{raw}'"));
    }
    Ok(value)
}

fn compute_stats(measurements: &[Measurement]) -> DatasetStats {
    let mut stats = DatasetStats {
        n_points: measurements.len(),
        diameter_min_mm: f64::INFINITY,
        diameter_max_mm: f64::NEG_INFINITY,
        length_min_m: f64::INFINITY,
        length_max_m: f64::NEG_INFINITY,
    };
    for m in measurements {
        stats.diameter_min_mm = stats.diameter_min_mm.min(m.diameter_mm);
        stats.diameter_max_mm = stats.diameter_max_mm.max(m.diameter_mm);
        stats.length_min_m = stats.length_min_m.min(m.length_m);
        stats.length_max_m = stats.length_max_m.max(m.length_m);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tutorial_schema() {
        let csv = "diameter,length\n40,0\n120,20\n";
        let data = read_measurements(csv.as_bytes()).unwrap();

        assert_eq!(data.rows_read, 2);
        assert_eq!(data.rows_used, 2);
        assert!(data.row_errors.is_empty());
        assert_eq!(data.set.measurements()[0].diameter_mm, 40.0);
        assert_eq!(data.set.measurements()[1].length_m, 20.0);
        assert_eq!(data.stats.diameter_max_mm, 120.0);
    }

    #[test]
    fn accepts_header_aliases_and_bom() {
        let csv = "\u{feff}Diameter_mm,Length_m\n100,5.5\n";
        let data = read_measurements(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_used, 1);
        assert_eq!(data.set.measurements()[0].length_m, 5.5);
    }

    #[test]
    fn collects_row_errors_without_aborting() {
        let csv = "diameter,length\n40,0\nnot_a_number,1\n120,20\n80,\n";
        let data = read_measurements(csv.as_bytes()).unwrap();

        assert_eq!(data.rows_read, 4);
        assert_eq!(data.rows_used, 2);
        assert_eq!(data.row_errors.len(), 2);
        assert_eq!(data.row_errors[0].line, 3);
        assert_eq!(data.row_errors[1].line, 5);
    }

    #[test]
    fn missing_diameter_column_is_an_error() {
        let csv = "width,length\n40,0\n";
        let err = read_measurements(csv.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidInput);
    }

    #[test]
    fn all_rows_invalid_is_an_error() {
        let csv = "diameter,length\nx,y\n";
        assert!(read_measurements(csv.as_bytes()).is_err());
    }

    #[test]
    fn non_positive_diameters_pass_through_to_the_model() {
        // Physical validation belongs to the transform stage, not ingest.
        let csv = "diameter,length\n-40,0\n120,20\n";
        let data = read_measurements(csv.as_bytes()).unwrap();
        assert_eq!(data.rows_used, 2);
        assert_eq!(data.set.measurements()[0].diameter_mm, -40.0);
    }
}
