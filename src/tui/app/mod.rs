//! Main TUI application model implementing the MVU pattern.
//!
//! [`CarouselApp`] owns one review store per mount. The mount-time fetch runs
//! as a bubbletea-rs command; its result message carries the mount id so a
//! result that outlives its mount is dropped instead of applied.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::{Cmd, Model};
use tokio_util::sync::CancellationToken;

use crate::api::{FetchError, Review, ReviewGateway};
use crate::carousel::{LoadOutcome, ReviewStore};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::{CarouselComponent, CarouselViewContext};
use super::input::{is_interrupt, map_key_to_message};
use super::messages::{AppMsg, MountId};

mod lifecycle_handlers;
mod navigation;
mod rendering;

/// Main application model for the review carousel.
pub struct CarouselApp {
    /// Reviews, rotation and fetch state for the current mount.
    store: ReviewStore,
    /// Source of reviews; `None` renders the empty state.
    gateway: Option<Arc<dyn ReviewGateway>>,
    /// Initials-avatar service for reviewers without an image.
    avatar_service: String,
    /// Current mount. Fetch results from other mounts are discarded.
    mount: MountId,
    /// Cancels the in-flight fetch of the current mount.
    cancel: CancellationToken,
    /// Set once the app has been torn down.
    torn_down: bool,
    /// Records one event per applied fetch outcome.
    telemetry: Arc<dyn TelemetrySink>,
    /// Whether help overlay is visible.
    show_help: bool,
    /// Card layout component.
    carousel: CarouselComponent,
}

impl fmt::Debug for CarouselApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselApp")
            .field("store", &self.store)
            .field("has_gateway", &self.gateway.is_some())
            .field("mount", &self.mount)
            .field("torn_down", &self.torn_down)
            .field("width", &self.carousel.width())
            .field("show_help", &self.show_help)
            .finish_non_exhaustive()
    }
}

impl CarouselApp {
    /// Creates an application whose reviews are not yet loaded.
    #[must_use]
    pub fn new(gateway: Option<Arc<dyn ReviewGateway>>, avatar_service: String) -> Self {
        Self {
            store: ReviewStore::new(),
            gateway,
            avatar_service,
            mount: MountId(0),
            cancel: CancellationToken::new(),
            torn_down: false,
            telemetry: Arc::new(NoopTelemetrySink),
            show_help: false,
            carousel: CarouselComponent::new(),
        }
    }

    /// Creates an application already holding `reviews`, with no gateway.
    #[must_use]
    pub fn with_reviews(reviews: Vec<Review>, avatar_service: String) -> Self {
        let mut app = Self::new(None, avatar_service);
        app.store.replace(reviews);
        app
    }

    /// Replaces the telemetry sink, which defaults to a no-op sink.
    #[must_use]
    pub fn with_telemetry_sink(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns the review store.
    #[must_use]
    pub const fn store(&self) -> &ReviewStore {
        &self.store
    }

    /// Returns the current mount id.
    #[must_use]
    pub const fn mount(&self) -> MountId {
        self.mount
    }

    /// Whether the app has been torn down.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the help overlay is showing.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function; it returns any resulting command.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Next => self.handle_next(),
            AppMsg::Previous => self.handle_previous(),
            AppMsg::RefetchRequested => self.handle_refetch(),
            AppMsg::FetchFinished {
                mount,
                outcome,
                latency_ms,
            } => self.handle_fetch_finished(*mount, outcome, *latency_ms),
            AppMsg::Quit => self.handle_quit(),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, .. } => self.handle_resize(*width),
        }
    }

    /// Builds the command that fetches reviews for the current mount.
    ///
    /// The command races the fetch against this mount's cancellation token
    /// and always reports back with a [`AppMsg::FetchFinished`].
    #[must_use]
    pub fn fetch_command(&self) -> Cmd {
        let gateway = self.gateway.clone();
        let cancel = self.cancel.clone();
        let mount = self.mount;

        Box::pin(async move {
            let start = Instant::now();
            let outcome = match gateway {
                Some(source) => ReviewStore::load(source.as_ref(), &cancel).await,
                None => {
                    tracing::warn!("error fetching reviews: {}", FetchError::Unconfigured);
                    LoadOutcome::Unavailable(FetchError::Unconfigured)
                }
            };
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            Some(Box::new(AppMsg::FetchFinished {
                mount,
                outcome,
                latency_ms,
            }) as Box<dyn Any + Send>)
        })
    }
}

impl Drop for CarouselApp {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl Model for CarouselApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(
            super::storage::get_gateway(),
            super::storage::get_avatar_service(),
        )
        .with_telemetry_sink(super::storage::get_telemetry_sink());
        if let Some((width, _)) = super::storage::get_initial_terminal_size() {
            model.handle_resize(width);
        }

        let cmd = model.fetch_command();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help && !is_interrupt(key_msg) {
                self.show_help = false;
                return None;
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            return self.handle_resize(size_msg.width);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return Self::render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');

        let ctx = CarouselViewContext {
            store: &self.store,
            avatar_service: &self.avatar_service,
        };
        output.push_str(&self.carousel.view(&ctx));

        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}
