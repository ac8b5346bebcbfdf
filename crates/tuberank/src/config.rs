//! Application configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config PATH`, else `tuberank.toml` in the user config dir)
//! 3. `TUBERANK_*` environment variables, nested with `__`
//!    (`TUBERANK_GEMINI__API_KEY`, `TUBERANK_UI__TICK_MS`)
//!
//! When no key is configured, `GEMINI_API_KEY` and then `API_KEY` are used.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tuberank_error::ConfigError;
use tuberank_models::GeminiConfig;
use tuberank_tui::{DEFAULT_CAPTION_INTERVAL, TuiOptions};

/// File name looked up in the user config directory.
pub const CONFIG_FILE_NAME: &str = "tuberank.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "TUBERANK";

const API_KEY_FALLBACKS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    tick_ms: u64,
    /// Progress caption interval in milliseconds
    caption_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            caption_interval_ms: DEFAULT_CAPTION_INTERVAL.as_millis() as u64,
        }
    }
}

impl UiConfig {
    /// Event loop options derived from this configuration.
    pub fn tui_options(&self) -> TuiOptions {
        TuiOptions {
            tick: Duration::from_millis(self.tick_ms.max(1)),
            caption_interval: Duration::from_millis(self.caption_interval_ms),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct AppConfig {
    /// Gemini client settings
    gemini: GeminiConfig,
    /// Terminal UI settings
    ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the file, the environment and key fallbacks.
    ///
    /// An explicit `path` must exist. The default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or does not match the
    /// expected shape.
    #[tracing::instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    tracing::debug!(path = %default_path.display(), "Checking default config file");
                    builder = builder.add_source(File::from(default_path).required(false));
                }
            }
        }
        builder = builder.add_source(env_source());

        let config = Self::from_builder(builder)?
            .with_api_key_fallback(|name| std::env::var(name).ok());

        tracing::info!(
            model = %config.gemini.model(),
            has_api_key = config.gemini.has_api_key(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Build from an assembled set of sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the sources fail to load or deserialize.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))
    }

    /// Fill a missing API key from the fallback variables, in order.
    pub fn with_api_key_fallback(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for name in API_KEY_FALLBACKS {
            if self.gemini.has_api_key() {
                break;
            }
            self.gemini = self.gemini.or_api_key(lookup(name));
        }
        self
    }
}

/// Environment source for `TUBERANK_*` overrides.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Default config file location, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tuberank").join(CONFIG_FILE_NAME))
}

/// Log file used while the terminal UI owns the screen.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tuberank")
        .join("tuberank.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::collections::HashMap;
    use tuberank_models::DEFAULT_MODEL;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config = AppConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(config.gemini().model(), DEFAULT_MODEL);
        assert_eq!(config.gemini().api_key(), &None);
        assert_eq!(*config.ui().caption_interval_ms(), 1800);
    }

    #[test]
    fn file_values_override_defaults() {
        let toml = r#"
            [gemini]
            model = "gemini-2.0-flash"
            api_key = "from-file"

            [ui]
            tick_ms = 50
        "#;
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let config = AppConfig::from_builder(builder).unwrap();

        assert_eq!(config.gemini().model(), "gemini-2.0-flash");
        assert_eq!(config.gemini().api_key().as_deref(), Some("from-file"));
        assert_eq!(*config.ui().tick_ms(), 50);
        assert_eq!(*config.ui().caption_interval_ms(), 1800);
    }

    #[test]
    fn environment_overrides_file() {
        let toml = "[gemini]\nmodel = \"from-file\"\n";
        let builder = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(env(&[
                ("TUBERANK_GEMINI__MODEL", "from-env"),
                ("TUBERANK_UI__CAPTION_INTERVAL_MS", "900"),
            ]));
        let config = AppConfig::from_builder(builder).unwrap();

        assert_eq!(config.gemini().model(), "from-env");
        assert_eq!(*config.ui().caption_interval_ms(), 900);
    }

    #[test]
    fn api_key_fallbacks_apply_in_order() {
        let lookup = |name: &str| match name {
            "GEMINI_API_KEY" => Some("gemini".to_string()),
            "API_KEY" => Some("generic".to_string()),
            _ => None,
        };
        let config = AppConfig::default().with_api_key_fallback(lookup);
        assert_eq!(config.gemini().api_key().as_deref(), Some("gemini"));

        let only_generic = |name: &str| (name == "API_KEY").then(|| "generic".to_string());
        let config = AppConfig::default().with_api_key_fallback(only_generic);
        assert_eq!(config.gemini().api_key().as_deref(), Some("generic"));
    }

    #[test]
    fn configured_key_wins_over_fallbacks() {
        let builder = Config::builder().add_source(env(&[("TUBERANK_GEMINI__API_KEY", "explicit")]));
        let config = AppConfig::from_builder(builder)
            .unwrap()
            .with_api_key_fallback(|_| Some("fallback".to_string()));
        assert_eq!(config.gemini().api_key().as_deref(), Some("explicit"));
    }

    #[test]
    fn blank_fallback_is_ignored() {
        let config = AppConfig::default().with_api_key_fallback(|name| match name {
            "GEMINI_API_KEY" => Some("  ".to_string()),
            _ => Some("generic".to_string()),
        });
        assert_eq!(config.gemini().api_key().as_deref(), Some("generic"));
    }

    #[test]
    fn blank_configured_key_falls_back() {
        let builder = Config::builder().add_source(File::from_str(
            "[gemini]\napi_key = \"\"\n",
            FileFormat::Toml,
        ));
        let config = AppConfig::from_builder(builder)
            .unwrap()
            .with_api_key_fallback(|name| (name == "GEMINI_API_KEY").then(|| "real".to_string()));
        assert_eq!(config.gemini().api_key().as_deref(), Some("real"));
    }

    #[test]
    fn blank_configured_key_without_fallback_is_missing() {
        let builder = Config::builder().add_source(env(&[("TUBERANK_GEMINI__API_KEY", "")]));
        let config = AppConfig::from_builder(builder)
            .unwrap()
            .with_api_key_fallback(|_| None);
        assert!(!config.gemini().has_api_key());
        assert_eq!(config.gemini().api_key(), &None);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/tuberank.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn ui_options_convert_to_durations() {
        let options = UiConfig::default().tui_options();
        assert_eq!(options.tick, Duration::from_millis(100));
        assert_eq!(options.caption_interval, Duration::from_millis(1800));
    }
}
