//! Startup context storage for the carousel TUI.
//!
//! bubbletea-rs constructs the model through the static `Model::init()`, so
//! everything the model needs from the CLI (the review gateway, the avatar
//! service, telemetry) is parked in `OnceLock` values before the program
//! starts.

use std::sync::{Arc, OnceLock};

use crate::api::ReviewGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::DEFAULT_AVATAR_SERVICE;

/// Global storage for the fetch context.
static FETCH_CONTEXT: OnceLock<FetchContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Context required to fetch and present reviews.
struct FetchContext {
    gateway: Arc<dyn ReviewGateway>,
    avatar_service: String,
}

/// Sets the gateway and avatar service used by `CarouselApp::init()`.
///
/// Must be called before starting the bubbletea-rs program. Without it the
/// app shows the empty state.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_fetch_context(gateway: Arc<dyn ReviewGateway>, avatar_service: String) -> bool {
    FETCH_CONTEXT
        .set(FetchContext {
            gateway,
            avatar_service,
        })
        .is_ok()
}

/// Sets the initial terminal dimensions so the first frame uses the real
/// terminal size.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink. Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the configured gateway, if any.
pub(crate) fn get_gateway() -> Option<Arc<dyn ReviewGateway>> {
    FETCH_CONTEXT.get().map(|ctx| Arc::clone(&ctx.gateway))
}

/// Returns the configured avatar service or the built-in default.
pub(crate) fn get_avatar_service() -> String {
    FETCH_CONTEXT.get().map_or_else(
        || DEFAULT_AVATAR_SERVICE.to_owned(),
        |ctx| ctx.avatar_service.clone(),
    )
}

/// Returns the initial terminal size, if recorded.
pub(crate) fn get_initial_terminal_size() -> Option<(u16, u16)> {
    INITIAL_TERMINAL_SIZE.get().copied()
}

/// Returns the configured telemetry sink or a shared no-op sink.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}
