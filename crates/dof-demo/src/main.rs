//! DOF Demo — reference caller for `dof-core`.
//!
//! Reads camera settings from `DOF_*` environment variables, runs one
//! calculation and prints the result as text or JSON.

mod config;
mod logging;
mod report;

use std::process::ExitCode;

use config::{DemoConfig, OutputFormat};
use dof_core::calculate_dof;

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("failed to initialise logging: {e}");
    }

    let config = DemoConfig::default();
    let params = config.parameters();
    tracing::debug!(sensor = %config.sensor, ?params, "calculating depth of field");

    let result = match calculate_dof(&params) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("calculation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match config.output {
        OutputFormat::Text => print!("{}", report::render(&params, &result)),
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("failed to serialize result: {e}");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
