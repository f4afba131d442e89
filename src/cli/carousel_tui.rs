//! Terminal mode hosting the review carousel.
//!
//! Builds the HTTP gateway from configuration, parks it for
//! `CarouselApp::init()`, and runs the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use review_carousel::telemetry::TracingTelemetrySink;
use review_carousel::tui::{
    CarouselApp, set_fetch_context, set_initial_terminal_size, set_telemetry_sink,
};
use review_carousel::{CarouselConfig, CarouselError, HttpReviewGateway};

/// Runs the carousel until the user quits.
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL or avatar service URL is missing or invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &CarouselConfig) -> Result<(), CarouselError> {
    let endpoint = config.reviews_url()?;
    let avatar_service = config.avatar_service()?;
    let gateway = HttpReviewGateway::for_endpoint(endpoint, config.request_timeout()).map_err(
        |error| CarouselError::Configuration {
            message: error.to_string(),
        },
    )?;

    // Each setter is a no-op when already set; the first context wins.
    let _ = set_fetch_context(Arc::new(gateway), avatar_service);
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    tracing::info!("starting review carousel");
    run_tui().await.map_err(|error| CarouselError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `CarouselApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<CarouselApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
