//! Application configuration.
//!
//! Every setting has a default matching the production deployment, so an
//! empty JSON object is a valid configuration. The browser shell may supply
//! overrides as a JSON document; see [`AppConfig::from_json`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::meteor::MeteorConfig;
use crate::progress::LoadingConfig;
use crate::selection::SelectionConfig;

/// Default base URL of the processing backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:7000";

/// Default path of the video processing endpoint.
pub const DEFAULT_PROCESS_VIDEOS_PATH: &str = "/api/v1/process_videos";

/// Backend endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend.
    pub base_url: String,
    /// Path of the endpoint that processes the selected videos.
    pub process_videos_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            process_videos_path: DEFAULT_PROCESS_VIDEOS_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the video processing endpoint.
    ///
    /// Tolerates a trailing slash on the base and a missing leading slash on
    /// the path.
    #[must_use]
    pub fn process_videos_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.process_videos_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend endpoint settings.
    pub api: ApiConfig,
    /// Loading page timing.
    pub loading: LoadingConfig,
    /// Meteor shower tunables.
    pub meteors: MeteorConfig,
    /// Preview selection limits.
    pub selection: SelectionConfig,
}

impl AppConfig {
    /// Parse a configuration document, filling unspecified fields with defaults.
    ///
    /// The parsed configuration is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;

        info!("Loaded config overrides");
        debug!("Process videos endpoint: {}", config.api.process_videos_url());

        Ok(config)
    }

    /// Full URL of the video processing endpoint.
    #[must_use]
    pub fn process_videos_url(&self) -> String {
        self.api.process_videos_url()
    }

    /// Check that the settings describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Configuration(
                "API base URL must not be empty".to_string(),
            ));
        }

        let loading = &self.loading;
        if loading.tick_interval_ms == 0 {
            return Err(Error::Configuration(
                "Progress tick interval must be greater than zero".to_string(),
            ));
        }
        if loading.ramp_ticks == 0 {
            return Err(Error::Configuration(
                "Progress ramp must last at least one tick".to_string(),
            ));
        }
        if !(loading.hold_percent > 0.0 && loading.hold_percent <= 100.0) {
            return Err(Error::Configuration(format!(
                "Hold percentage must be in (0, 100], got {}",
                loading.hold_percent
            )));
        }

        let meteors = &self.meteors;
        if meteors.spawn_window_ms <= 0.0 {
            return Err(Error::Configuration(
                "Meteor spawn window must be positive".to_string(),
            ));
        }
        if meteors.min_length > meteors.max_length {
            return Err(Error::Configuration(format!(
                "Meteor length range is inverted: {} > {}",
                meteors.min_length, meteors.max_length
            )));
        }
        if meteors.min_speed > meteors.max_speed || meteors.min_speed <= 0.0 {
            return Err(Error::Configuration(format!(
                "Meteor speed range must be positive and ordered: {}..{}",
                meteors.min_speed, meteors.max_speed
            )));
        }

        if self.selection.max_selected == 0 {
            return Err(Error::Configuration(
                "At least one video must be selectable".to_string(),
            ));
        }

        Ok(())
    }
}
