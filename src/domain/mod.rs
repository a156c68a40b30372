//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw and transformed measurement points (`Measurement`,
//!   `TransformedMeasurement`)
//! - fit outputs (`LinearFit`, `CaliperResult`)
//! - length-prediction inputs/outputs (`RollGeometry`, `LengthResult`)
//! - run configuration (`CaliperConfig`)

pub mod types;

pub use types::*;
