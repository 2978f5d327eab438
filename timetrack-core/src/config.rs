//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{TimetrackError, TimetrackResult};

static DEFAULT_SERVER_URL: &str = "http://localhost:3001";
static DEFAULT_PLACEHOLDER_TITLE: &str = "No title";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TICK_MILLIS: u64 = 1000;

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_placeholder_title() -> String {
    DEFAULT_PLACEHOLDER_TITLE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_tick_millis() -> u64 {
    DEFAULT_TICK_MILLIS
}

/// Configuration at ~/.config/timetrack/config.toml, overridable with
/// `TIMETRACK_*` environment variables (e.g. `TIMETRACK_SERVER_URL`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the events service; requests go to `{server_url}/events`.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Redraw period while recording.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    /// Title given to events created from a recording.
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server_url: default_server_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            tick_millis: DEFAULT_TICK_MILLIS,
            placeholder_title: default_placeholder_title(),
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> TimetrackResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetrackError::Config("Could not determine config directory".into()))?
            .join("timetrack");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template there
    /// first if nothing exists yet.
    pub fn load() -> TimetrackResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) layered under the environment.
    pub fn load_from(path: &Path) -> TimetrackResult<Self> {
        let config: ClientConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("TIMETRACK").try_parsing(true))
            .build()
            .map_err(|e| TimetrackError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimetrackError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would time out every request or spin the redraw
    /// loop.
    pub fn validate(&self) -> TimetrackResult<()> {
        if self.request_timeout_secs == 0 {
            return Err(TimetrackError::Config(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        if self.tick_millis == 0 {
            return Err(TimetrackError::Config("tick_millis must be at least 1".into()));
        }
        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TimetrackResult<()> {
        let contents = format!(
            "\
# timetrack configuration

# Events service:
# server_url = \"{DEFAULT_SERVER_URL}\"
# request_timeout_secs = {DEFAULT_REQUEST_TIMEOUT_SECS}

# Redraw period of the recorder, in milliseconds:
# tick_millis = {DEFAULT_TICK_MILLIS}

# Title of events saved from a recording:
# placeholder_title = \"{DEFAULT_PLACEHOLDER_TITLE}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetrackError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TimetrackError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}
