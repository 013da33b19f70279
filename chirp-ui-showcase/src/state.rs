//! Shared application state

use axum::response::Html;
use chirp_ui::table::RecordStore;
use chirp_ui::template::TemplateSet;
use minijinja::Value;
use std::sync::Arc;

use crate::config::ShowcaseConfig;
use crate::error::ShowcaseError;
use crate::roster::roster_store;
use crate::templates::TEMPLATES;

/// State shared by every handler
///
/// Cloning is cheap: the config and store sit behind `Arc`, and
/// [`TemplateSet`] shares its environment.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ShowcaseConfig>,
    templates: TemplateSet,
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// State backed by the demo team roster
    ///
    /// # Errors
    ///
    /// Returns an error if the templates fail to load.
    pub fn new(config: ShowcaseConfig) -> Result<Self, ShowcaseError> {
        Self::with_store(config, Arc::new(roster_store()))
    }

    /// State backed by a custom record store
    ///
    /// # Errors
    ///
    /// Returns an error if the templates fail to load.
    pub fn with_store(
        config: ShowcaseConfig,
        store: Arc<dyn RecordStore>,
    ) -> Result<Self, ShowcaseError> {
        let templates = TemplateSet::from_config(TEMPLATES, &config.chirp_ui())?;
        Ok(Self {
            config: Arc::new(config),
            templates,
            store,
        })
    }

    /// Loaded configuration
    #[must_use]
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Record store behind the data table
    #[must_use]
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Rows per table page
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.config.table.page_size
    }

    /// Render a template to an HTML response body
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or fails to render.
    pub fn render(&self, name: &str, ctx: Value) -> Result<Html<String>, ShowcaseError> {
        Ok(Html(self.templates.render(name, ctx)?))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}
