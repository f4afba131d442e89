//! Lifecycle and window handlers for the carousel TUI.
//!
//! Covers fetch completion, refetching as a fresh mount, teardown and
//! terminal resizes.

use bubbletea_rs::Cmd;
use tokio_util::sync::CancellationToken;

use super::CarouselApp;
use crate::carousel::LoadOutcome;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::MountId;

impl CarouselApp {
    /// Applies a fetch result if it belongs to the live mount.
    ///
    /// Results from an earlier mount, results arriving after teardown and
    /// repeated results for the same mount are discarded.
    pub(super) fn handle_fetch_finished(
        &mut self,
        mount: MountId,
        outcome: &LoadOutcome,
        latency_ms: u64,
    ) -> Option<Cmd> {
        if self.torn_down || mount != self.mount {
            tracing::debug!(
                "discarding review fetch result from mount {} (current {})",
                mount.0,
                self.mount.0
            );
            return None;
        }

        if self.store.apply(outcome.clone())
            && let Some(event) = telemetry_for(outcome, latency_ms)
        {
            self.telemetry.record(event);
        }
        None
    }

    /// Starts a fresh mount: cancels the old fetch, clears the store and
    /// fetches again.
    pub(super) fn handle_refetch(&mut self) -> Option<Cmd> {
        if self.torn_down {
            return None;
        }
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.mount = self.mount.next();
        self.store.reset();
        Some(self.fetch_command())
    }

    /// Tears the app down and quits the program.
    pub(super) fn handle_quit(&mut self) -> Option<Cmd> {
        self.teardown();
        Some(bubbletea_rs::quit())
    }

    /// Cancels any in-flight fetch and refuses further results.
    pub(crate) fn teardown(&mut self) {
        self.cancel.cancel();
        self.torn_down = true;
    }

    pub(super) fn handle_resize(&mut self, width: u16) -> Option<Cmd> {
        self.carousel.set_width(usize::from(width));
        None
    }
}

pub(super) fn telemetry_for(outcome: &LoadOutcome, latency_ms: u64) -> Option<TelemetryEvent> {
    match outcome {
        LoadOutcome::Loaded(reviews) => Some(TelemetryEvent::ReviewsLoaded {
            review_count: reviews.len(),
            latency_ms,
        }),
        LoadOutcome::Unavailable(error) => Some(TelemetryEvent::ReviewsUnavailable {
            reason: error.to_string(),
        }),
        LoadOutcome::Cancelled => None,
    }
}
