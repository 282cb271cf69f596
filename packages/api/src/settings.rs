use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[allow(unused)]
pub struct ApiSettings {
    /// Origin of the backend. Empty means "same origin as the page".
    pub base_url: String,
    #[serde(default)]
    pub login_timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn login_timeout(&self) -> Option<Duration> {
        self.login_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[allow(unused)]
pub struct StorageSettings {
    pub token_key: String,
    pub color_mode_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            token_key: store::TOKEN_KEY.into(),
            color_mode_key: store::COLOR_MODE_KEY.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[allow(unused)]
pub struct Settings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api.base_url", "")?
            .set_default("storage.token_key", store::TOKEN_KEY)?
            .set_default("storage.color_mode_key", store::COLOR_MODE_KEY)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("ENHANCE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Settings from the environment, or the defaults when they don't parse.
    pub fn load() -> Self {
        Self::new().unwrap_or_else(|e| {
            tracing::warn!("Invalid configuration, using defaults: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "");
        assert_eq!(settings.api.login_timeout(), None);
        assert_eq!(settings.storage.token_key, "token");
        assert_eq!(settings.storage.color_mode_key, "color-mode");
    }

    #[test]
    fn test_settings_from_environment() {
        set_var("ENHANCE_API__BASE_URL", "http://localhost:5000");
        set_var("ENHANCE_API__LOGIN_TIMEOUT_SECS", "20");
        set_var("ENHANCE_STORAGE__COLOR_MODE_KEY", "leadgen-color-mode");
        let settings = Settings::new().unwrap_or_default();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.api.base_url, "http://localhost:5000");
        assert_eq!(settings.api.login_timeout(), Some(Duration::from_secs(20)));
        assert_eq!(settings.storage.token_key, "token");
        assert_eq!(settings.storage.color_mode_key, "leadgen-color-mode");
    }
}
