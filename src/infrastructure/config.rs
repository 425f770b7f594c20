use std::{path::PathBuf, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::{keybindings, styles};
use crate::utils::{self, paths::API_URL_ENV};

const CONFIG: &str = include_str!("../../.config/config.json5");

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Backend connection settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout; scenario analysis can take a while
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// The embedded default configuration
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads the optional user config file and merges it over the defaults.
    /// `HEDGEUI_API_URL` overrides `api.base_url`.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);

        if let Ok(url) = std::env::var(API_URL_ENV.as_str()) {
            cfg = cfg.with_api_url(Some(url));
        }

        Ok(cfg)
    }

    /// Fills every view's keybindings and styles the user left out
    pub fn merge_defaults(&mut self, defaults: &Config) {
        for (view, bindings) in defaults.keybindings.iter() {
            let user_bindings = self.keybindings.entry(*view).or_default();
            for (keyseq, action) in bindings {
                user_bindings.entry(keyseq.clone()).or_insert(*action);
            }
        }
        for (view, styles) in defaults.styles.iter() {
            let user_styles = self.styles.entry(*view).or_default();
            for (style_key, style) in styles {
                user_styles
                    .entry(style_key.clone())
                    .or_insert_with(|| *style);
            }
        }
    }

    /// Overrides the backend URL unless `url` is blank
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Per-request timeout; `timeout_secs: 0` disables it
    pub fn api_timeout(&self) -> Option<Duration> {
        match self.api.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
