//! Configuration management for chirp-ui
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CHIRP_UI_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/chirp-ui/{service}/config.toml` (user config, XDG)
//! 4. `/etc/chirp-ui/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [ui]
//! class_prefix = "chirpui"
//!
//! [table]
//! page_size = 5
//!
//! [templates]
//! template_dir = "./templates"
//! hot_reload = true
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use chirp_ui::config::ChirpUiConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ChirpUiConfig::load_for_service("component-showcase")?;
//! let page_size = config.table.page_size;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Data, Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ChirpUiError;
use crate::filters::CLASS_PREFIX;
use crate::table::DEFAULT_PAGE_SIZE;

/// Prefix of environment variables read by the loaders
pub const ENV_PREFIX: &str = "CHIRP_UI_";

/// Class naming settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Prefix for every generated block class
    pub class_prefix: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            class_prefix: CLASS_PREFIX.to_string(),
        }
    }
}

/// Data table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Rows per page
    pub page_size: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Template environment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory whose templates override the embedded ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,

    /// Reload templates before every render (development)
    pub hot_reload: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            template_dir: None,
            hot_reload: cfg!(debug_assertions),
        }
    }
}

/// Complete chirp-ui configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChirpUiConfig {
    /// Class naming settings
    #[serde(default)]
    pub ui: UiSettings,

    /// Data table settings
    #[serde(default)]
    pub table: TableSettings,

    /// Template environment settings
    #[serde(default)]
    pub templates: TemplateSettings,
}

impl ChirpUiConfig {
    /// Load configuration for a specific service
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be parsed
    /// - Configuration values fail type conversion
    pub fn load_for_service(service_name: &str) -> Result<Self, ChirpUiError> {
        Ok(layered(service_name, &Self::default())?.extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values fail type
    /// conversion.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ChirpUiError> {
        Ok(from_file(path.as_ref(), &Self::default())?.extract()?)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// ```rust
    /// use chirp_ui::config::ChirpUiConfig;
    ///
    /// let path = ChirpUiConfig::recommended_path("my-app");
    /// // Returns: ~/.config/chirp-ui/my-app/config.toml
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        recommended_path(service_name)
    }
}

/// Build the layered figment for `service_name` on top of `defaults`
///
/// Applications embedding chirp-ui settings in a larger config struct use this
/// to get the same search path and environment overrides.
///
/// # Errors
///
/// Returns an error if `defaults` cannot be serialized to TOML.
pub fn layered<T: Serialize>(service_name: &str, defaults: &T) -> Result<Figment, ChirpUiError> {
    // 5. Defaults (lowest priority)
    let mut figment = Figment::new().merge(defaults_provider(defaults)?);

    // 4. System config
    let system_config = PathBuf::from("/etc/chirp-ui")
        .join(service_name)
        .join("config.toml");
    if system_config.exists() {
        figment = figment.merge(Toml::file(&system_config));
    }

    // 3. User config
    let user_config = recommended_path(service_name);
    if user_config.exists() {
        figment = figment.merge(Toml::file(&user_config));
    }

    // 2. Local config
    let local_config = PathBuf::from("./config.toml");
    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // 1. Environment
    Ok(figment.merge(env_provider()))
}

/// Build a figment from `defaults`, one explicit file, and the environment
///
/// # Errors
///
/// Returns an error if `defaults` cannot be serialized to TOML.
pub fn from_file<T: Serialize>(path: &Path, defaults: &T) -> Result<Figment, ChirpUiError> {
    Ok(Figment::new()
        .merge(defaults_provider(defaults)?)
        .merge(Toml::file(path))
        .merge(env_provider()))
}

fn defaults_provider<T: Serialize>(defaults: &T) -> Result<Data<Toml>, ChirpUiError> {
    let defaults = toml::to_string(defaults).map_err(|e| figment::Error::from(e.to_string()))?;
    Ok(Toml::string(&defaults))
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
}

fn recommended_path(service_name: &str) -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from("./config.toml"),
        |config_dir| {
            config_dir
                .join("chirp-ui")
                .join(service_name)
                .join("config.toml")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = ChirpUiConfig::default();
        assert_eq!(config.ui.class_prefix, "chirpui");
        assert_eq!(config.table.page_size, 5);
        assert!(config.templates.template_dir.is_none());
    }

    #[test]
    fn test_recommended_path() {
        let path = ChirpUiConfig::recommended_path("test-app");
        let path = path.to_string_lossy();
        assert!(path.contains("test-app"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        Jail::expect_with(|_jail| {
            let config = ChirpUiConfig::load_from("/nonexistent/path/config.toml")
                .map_err(|e| e.to_string())?;
            assert_eq!(config, ChirpUiConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[ui]
class_prefix = "acme"

[table]
page_size = 10

[templates]
template_dir = "./overrides"
hot_reload = false
"#,
            )?;

            let config = ChirpUiConfig::load_from("custom.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.ui.class_prefix, "acme");
            assert_eq!(config.table.page_size, 10);
            assert_eq!(config.templates.template_dir, Some(PathBuf::from("./overrides")));
            assert!(!config.templates.hot_reload);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[table]\npage_size = 10\n")?;
            jail.set_env("CHIRP_UI_TABLE__PAGE_SIZE", "25");

            let config =
                ChirpUiConfig::load_for_service("nonexistent-service-123").map_err(|e| e.to_string())?;
            assert_eq!(config.table.page_size, 25);
            assert_eq!(config.ui.class_prefix, "chirpui");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[table\npage_size = 10\n")?;

            let err = ChirpUiConfig::load_from("broken.toml").unwrap_err();
            assert!(matches!(err, ChirpUiError::Config(_)));
            assert!(err.to_string().starts_with("Configuration error"));
            Ok(())
        });
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[table]\npage_size = \"many\"\n")?;

            let err = ChirpUiConfig::load_for_service("nonexistent-service-123").unwrap_err();
            assert!(matches!(err, ChirpUiError::Config(_)));
            Ok(())
        });
    }
}
