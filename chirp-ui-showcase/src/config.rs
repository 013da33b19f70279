//! Showcase configuration
//!
//! The showcase adds a `[server]` table to the chirp-ui settings and reads
//! them through the same layered search path (`component-showcase` service):
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [table]
//! page_size = 10
//! ```
//!
//! Environment overrides use the `CHIRP_UI_` prefix, e.g.
//! `CHIRP_UI_SERVER__PORT=9000`.

use chirp_ui::config::{self, ChirpUiConfig, TableSettings, TemplateSettings, UiSettings};
use chirp_ui::error::ChirpUiError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service name used for the config search path
pub const SERVICE_NAME: &str = "component-showcase";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerSettings {
    /// `host:port` string suitable for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete showcase configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShowcaseConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,

    /// Class naming
    #[serde(default)]
    pub ui: UiSettings,

    /// Data table
    #[serde(default)]
    pub table: TableSettings,

    /// Template environment
    #[serde(default)]
    pub templates: TemplateSettings,
}

impl ShowcaseConfig {
    /// Load configuration from `path`, or from the layered search path when
    /// no path is given
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ChirpUiError> {
        let defaults = Self::default();
        let figment = match path {
            Some(path) => config::from_file(path, &defaults)?,
            None => config::layered(SERVICE_NAME, &defaults)?,
        };
        Ok(figment.extract()?)
    }

    /// The chirp-ui part of the configuration
    #[must_use]
    pub fn chirp_ui(&self) -> ChirpUiConfig {
        ChirpUiConfig {
            ui: self.ui.clone(),
            table: self.table.clone(),
            templates: self.templates.clone(),
        }
    }
}
