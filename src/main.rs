//! Review carousel CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use review_carousel::logging::init_logging;
use review_carousel::{CarouselConfig, CarouselError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CarouselError> {
    let config = load_config()?;
    init_logging(&config)?;
    cli::carousel_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CarouselError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CarouselConfig, CarouselError> {
    CarouselConfig::load().map_err(|error| CarouselError::Configuration {
        message: error.to_string(),
    })
}
