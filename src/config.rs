//! Application configuration loaded from CLI, environment, and files.
//!
//! Configuration values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! From lowest to highest:
//!
//! 1. **Defaults** – built-in application defaults
//! 2. **Configuration file** – `.review-carousel.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEW_CAROUSEL_API_BASE_URL` and friends
//! 4. **Command-line arguments** – `--api-base-url`/`-a` and friends
//!
//! # Configuration File
//!
//! ```toml
//! api_base_url = "https://backend.example.com"
//! reviews_path = "/api/v1/course/getReviews"
//! avatar_service_url = "https://api.dicebear.com/5.x/initials/svg"
//! request_timeout_secs = 10
//! log_file = "review-carousel.log"
//! log_level = "debug"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CarouselError;
use crate::tui::components::DEFAULT_AVATAR_SERVICE;

/// Endpoint path used when `reviews_path` is not configured.
pub const DEFAULT_REVIEWS_PATH: &str = "/api/v1/course/getReviews";

/// Tracing filter used when `log_level` is not configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use review_carousel::CarouselConfig;
///
/// let config = CarouselConfig::load().expect("failed to load configuration");
/// let endpoint = config.reviews_url().expect("API base URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEW_CAROUSEL",
    discovery(
        dotfile_name = ".review-carousel.toml",
        config_file_name = "review-carousel.toml",
        app_name = "review-carousel"
    )
)]
pub struct CarouselConfig {
    /// Base URL of the backend serving reviews.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base-url <URL>` or `-a <URL>`
    /// - Environment: `REVIEW_CAROUSEL_API_BASE_URL`
    /// - Config file: `api_base_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base_url: Option<String>,

    /// Path of the reviews endpoint relative to `api_base_url`.
    ///
    /// Defaults to [`DEFAULT_REVIEWS_PATH`].
    pub reviews_path: Option<String>,

    /// Initials-avatar service used for reviewers without an image.
    ///
    /// Defaults to [`DEFAULT_AVATAR_SERVICE`].
    pub avatar_service_url: Option<String>,

    /// Optional request timeout in seconds. No timeout is applied when unset.
    pub request_timeout_secs: Option<u64>,

    /// File receiving diagnostic logs. Logging is disabled when unset, as
    /// the terminal belongs to the UI.
    pub log_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `review_carousel=trace`.
    ///
    /// Defaults to [`DEFAULT_LOG_LEVEL`].
    pub log_level: Option<String>,
}

impl CarouselConfig {
    /// Returns the full reviews endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Configuration`] when `api_base_url` is
    /// missing or the combined URL is invalid.
    pub fn reviews_url(&self) -> Result<Url, CarouselError> {
        let base = self
            .api_base_url
            .as_deref()
            .ok_or_else(|| CarouselError::Configuration {
                message: "API base URL is required (use --api-base-url or -a)".to_owned(),
            })?;
        let path = self.reviews_path.as_deref().unwrap_or(DEFAULT_REVIEWS_PATH);
        let joined = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Url::parse(&joined).map_err(|error| CarouselError::Configuration {
            message: format!("reviews URL '{joined}' is invalid: {error}"),
        })
    }

    /// Returns the avatar service URL after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Configuration`] when the configured value is
    /// not an absolute URL.
    pub fn avatar_service(&self) -> Result<String, CarouselError> {
        let service = self
            .avatar_service_url
            .as_deref()
            .unwrap_or(DEFAULT_AVATAR_SERVICE);
        Url::parse(service)
            .map(|_| service.to_owned())
            .map_err(|error| CarouselError::Configuration {
                message: format!("avatar service URL '{service}' is invalid: {error}"),
            })
    }

    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use ortho_config::MergeComposer;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    /// Applies a configuration layer to the composer based on the layer type.
    fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
        match layer_type {
            "defaults" => composer.push_defaults(value),
            "file" => composer.push_file(value, None),
            "environment" => composer.push_environment(value),
            "cli" => composer.push_cli(value),
            _ => panic!("unknown layer type: {layer_type}"),
        }
    }

    #[rstest]
    #[case::file_overrides_defaults(
        vec![("defaults", json!({"api_base_url": "http://default"})), ("file", json!({"api_base_url": "http://file"}))],
        "http://file",
        "file should override default"
    )]
    #[case::environment_overrides_file(
        vec![("file", json!({"api_base_url": "http://file"})), ("environment", json!({"api_base_url": "http://env"}))],
        "http://env",
        "environment should override file"
    )]
    #[case::cli_overrides_environment(
        vec![("environment", json!({"api_base_url": "http://env"})), ("cli", json!({"api_base_url": "http://cli"}))],
        "http://cli",
        "CLI should override environment"
    )]
    fn test_layer_precedence(
        #[case] layers: Vec<(&str, Value)>,
        #[case] expected: &str,
        #[case] message: &str,
    ) {
        let mut composer = MergeComposer::new();
        for (layer_type, value) in layers {
            apply_layer(&mut composer, layer_type, value);
        }

        let config =
            CarouselConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.api_base_url.as_deref(), Some(expected), "{message}");
    }

    #[rstest]
    fn partial_overrides_preserve_lower_values() {
        let mut composer = MergeComposer::new();
        composer.push_file(
            json!({"api_base_url": "http://file", "log_level": "debug"}),
            None,
        );
        composer.push_cli(json!({"api_base_url": "http://cli"}));

        let config =
            CarouselConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.api_base_url.as_deref(), Some("http://cli"));
        assert_eq!(config.log_filter(), "debug", "file log level should survive");
    }

    #[rstest]
    #[case::default_path("https://backend.example", None, "https://backend.example/api/v1/course/getReviews")]
    #[case::trailing_slash("https://backend.example/", Some("reviews"), "https://backend.example/reviews")]
    #[case::nested_base("http://localhost:4000/api/v1", Some("/course/getReviews"), "http://localhost:4000/api/v1/course/getReviews")]
    fn reviews_url_joins_base_and_path(
        #[case] base: &str,
        #[case] path: Option<&str>,
        #[case] expected: &str,
    ) {
        let config = CarouselConfig {
            api_base_url: Some(base.to_owned()),
            reviews_path: path.map(ToOwned::to_owned),
            ..Default::default()
        };

        let url = config.reviews_url().expect("URL should be valid");

        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn reviews_url_requires_base() {
        let result = CarouselConfig::default().reviews_url();
        assert!(
            matches!(result, Err(CarouselError::Configuration { .. })),
            "expected Configuration error, got {result:?}"
        );
    }

    #[rstest]
    fn reviews_url_rejects_relative_base() {
        let config = CarouselConfig {
            api_base_url: Some("backend.example".to_owned()),
            ..Default::default()
        };
        assert!(config.reviews_url().is_err());
    }

    #[rstest]
    fn avatar_service_defaults_to_initials_service() {
        let service = CarouselConfig::default()
            .avatar_service()
            .expect("default should be valid");
        assert_eq!(service, DEFAULT_AVATAR_SERVICE);
    }

    #[rstest]
    fn avatar_service_rejects_invalid_url() {
        let config = CarouselConfig {
            avatar_service_url: Some("not a url".to_owned()),
            ..Default::default()
        };
        assert!(config.avatar_service().is_err());
    }

    #[rstest]
    fn timeout_is_absent_by_default() {
        assert_eq!(CarouselConfig::default().request_timeout(), None);

        let config = CarouselConfig {
            request_timeout_secs: Some(7),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(7)));
    }

    #[rstest]
    fn log_filter_defaults_to_info() {
        assert_eq!(CarouselConfig::default().log_filter(), DEFAULT_LOG_LEVEL);
    }
}
