//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs caliper estimation / length prediction / sample generation
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{CaliperArgs, Command, LengthArgs, SampleArgs};
use crate::data::SampleConfig;
use crate::domain::{CaliperConfig, RollGeometry};
use crate::error::AppError;
use crate::model::predictor;

pub mod pipeline;

/// Entry point for the `roll` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Caliper(args) => handle_caliper(args),
        Command::Length(args) => handle_length(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_caliper(args: CaliperArgs) -> Result<(), AppError> {
    let config = caliper_config_from_args(&args);
    let run = pipeline::run_caliper(&config)?;

    println!(
        "{}",
        crate::report::format_caliper_summary(&run.ingest, &run.fit, &run.caliper)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.residuals,
            &run.fit,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run.residuals)?;
    }
    if let Some(path) = &config.export_caliper {
        crate::io::caliper_file::write_caliper_json(path, &run.caliper, &run.fit, &run.ingest)?;
    }

    Ok(())
}

fn handle_length(args: LengthArgs) -> Result<(), AppError> {
    let caliper_mm = match (args.caliper, &args.caliper_file) {
        (Some(value), _) => value,
        (None, Some(path)) => crate::io::caliper_file::read_caliper_json(path)?.caliper_mm,
        (None, None) => {
            return Err(AppError::invalid_input(
                "Provide a caliper via --caliper or --caliper-file.",
            ));
        }
    };

    let geometry = RollGeometry {
        outer_diameter_mm: args.outer,
        core_diameter_mm: args.core,
        caliper_mm,
    };
    let length = predictor::predict_length(&geometry)?;

    println!("{}", crate::report::format_length_summary(&geometry, &length));
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = SampleConfig {
        caliper_mm: args.caliper,
        core_diameter_mm: args.core,
        max_diameter_mm: args.max_diameter,
        count: args.count,
        noise_m: args.noise,
        seed: args.seed,
    };
    let measurements = crate::data::generate_measurements(&config)?;

    match &args.out {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| {
                AppError::invalid_input(format!(
                    "Failed to create sample CSV '{}': {e}",
                    path.display()
                ))
            })?;
            crate::io::export::write_sample_csv(file, &measurements)
        }
        None => crate::io::export::write_sample_csv(std::io::stdout().lock(), &measurements),
    }
}

pub fn caliper_config_from_args(args: &CaliperArgs) -> CaliperConfig {
    CaliperConfig {
        csv_path: args.csv.clone(),
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_caliper: args.export_caliper.clone(),
    }
}
