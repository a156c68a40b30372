//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - result/sample exports (CSV) (`export`)
//! - caliper JSON read/write (`caliper_file`)

pub mod caliper_file;
pub mod export;
pub mod ingest;

pub use caliper_file::*;
pub use export::*;
pub use ingest::*;
