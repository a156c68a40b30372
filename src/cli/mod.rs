//! Command-line parsing for the roll caliper/length tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "roll", version, about = "Roll caliper estimation and length prediction")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate caliper from a measurement CSV, print diagnostics, and
    /// optionally plot/export.
    Caliper(CaliperArgs),
    /// Predict total roll length from caliper and diameter geometry.
    Length(LengthArgs),
    /// Generate a synthetic measurement CSV from known constants.
    Sample(SampleArgs),
}

/// Options for caliper estimation.
#[derive(Debug, Parser, Clone)]
pub struct CaliperArgs {
    /// Measurement CSV with `diameter` (mm) and `length` (m) columns.
    #[arg(long)]
    pub csv: PathBuf,

    /// Render an ASCII plot of length vs diameter² with the fitted line.
    #[arg(long, default_value_t = false)]
    pub plot: bool,

    /// Plot width in characters.
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height in characters.
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export per-measurement results (raw + derived columns) to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the caliper estimate to JSON (readable by `roll length`).
    #[arg(long)]
    pub export_caliper: Option<PathBuf>,
}

/// Options for length prediction.
#[derive(Debug, Parser, Clone)]
pub struct LengthArgs {
    /// Outer roll diameter in mm.
    #[arg(long)]
    pub outer: f64,

    /// Core (empty spool) diameter in mm.
    #[arg(long)]
    pub core: f64,

    /// Caliper in mm.
    #[arg(long, conflicts_with = "caliper_file")]
    pub caliper: Option<f64>,

    /// Read the caliper from a JSON file exported by `roll caliper`.
    #[arg(long)]
    pub caliper_file: Option<PathBuf>,
}

/// Options for synthetic sample generation.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// True caliper in mm used to synthesize lengths.
    #[arg(long)]
    pub caliper: f64,

    /// Core diameter in mm.
    #[arg(long)]
    pub core: f64,

    /// Largest roll diameter to sample, in mm.
    #[arg(long)]
    pub max_diameter: f64,

    /// Number of measurements to generate.
    #[arg(short = 'n', long, default_value_t = 12)]
    pub count: usize,

    /// Gaussian length noise sigma in meters (0 = exact).
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output CSV path (stdout if omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,
}
