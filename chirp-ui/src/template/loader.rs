//! Reloadable template set with on-disk overrides

use minijinja::{Environment, ErrorKind, Value};
use parking_lot::RwLock;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::register_filters_with_prefix;
use crate::config::ChirpUiConfig;
use crate::error::ChirpUiError;
use crate::filters::CLASS_PREFIX;

/// Templates compiled into a binary, as `(name, source)` pairs
pub type EmbeddedTemplates = &'static [(&'static str, &'static str)];

/// Thread-safe template environment with the chirp-ui filters registered
///
/// Every template comes from the embedded set, unless the override directory
/// holds a file with the same name. With hot reload enabled, templates are
/// re-read before each render so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    env: Arc<RwLock<Environment<'static>>>,
    embedded: EmbeddedTemplates,
    override_dir: Option<PathBuf>,
    class_prefix: String,
    hot_reload: bool,
}

impl TemplateSet {
    /// Load the embedded templates with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new(embedded: EmbeddedTemplates) -> Result<Self, ChirpUiError> {
        Self::build(embedded, None, CLASS_PREFIX.to_string(), false)
    }

    /// Load templates using the `[ui]` and `[templates]` configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an override file cannot be read or a template
    /// fails to compile.
    pub fn from_config(
        embedded: EmbeddedTemplates,
        config: &ChirpUiConfig,
    ) -> Result<Self, ChirpUiError> {
        Self::build(
            embedded,
            config.templates.template_dir.clone(),
            config.ui.class_prefix.clone(),
            config.templates.hot_reload,
        )
    }

    fn build(
        embedded: EmbeddedTemplates,
        override_dir: Option<PathBuf>,
        class_prefix: String,
        hot_reload: bool,
    ) -> Result<Self, ChirpUiError> {
        let env = Self::create_environment(embedded, override_dir.as_deref(), &class_prefix)?;
        Ok(Self {
            env: Arc::new(RwLock::new(env)),
            embedded,
            override_dir,
            class_prefix,
            hot_reload,
        })
    }

    fn create_environment(
        embedded: EmbeddedTemplates,
        override_dir: Option<&Path>,
        class_prefix: &str,
    ) -> Result<Environment<'static>, ChirpUiError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters_with_prefix(&mut env, class_prefix);

        for &(name, source) in embedded {
            let content = Self::load_template_content(name, source, override_dir)?;
            env.add_template_owned(name.to_string(), content.into_owned())?;
        }

        Ok(env)
    }

    fn load_template_content(
        name: &str,
        embedded_source: &'static str,
        override_dir: Option<&Path>,
    ) -> Result<Cow<'static, str>, ChirpUiError> {
        if let Some(dir) = override_dir {
            let path = dir.join(name);
            if path.exists() {
                return std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| ChirpUiError::Io {
                        name: name.to_string(),
                        source,
                    });
            }
        }
        Ok(Cow::Borrowed(embedded_source))
    }

    /// Render a template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown, a hot reload fails, or
    /// rendering fails.
    pub fn render(&self, name: &str, ctx: Value) -> Result<String, ChirpUiError> {
        if self.hot_reload {
            self.reload()?;
        }

        let env = self.env.read();
        let template = env.get_template(name).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                ChirpUiError::TemplateNotFound(name.to_string())
            } else {
                err.into()
            }
        })?;
        Ok(template.render(ctx)?)
    }

    /// Reload every template and atomically swap the environment
    ///
    /// # Errors
    ///
    /// Returns an error if templates cannot be read or compiled; the previous
    /// environment stays in place.
    pub fn reload(&self) -> Result<(), ChirpUiError> {
        let env = Self::create_environment(
            self.embedded,
            self.override_dir.as_deref(),
            &self.class_prefix,
        )?;
        *self.env.write() = env;

        tracing::debug!(templates = self.embedded.len(), "templates reloaded");
        Ok(())
    }

    /// Whether `name` is served from the override directory
    #[must_use]
    pub fn is_customized(&self, name: &str) -> bool {
        self.override_dir
            .as_ref()
            .is_some_and(|dir| dir.join(name).exists())
    }

    /// Names of all templates in the set
    pub fn template_names(&self) -> impl Iterator<Item = &'static str> {
        self.embedded.iter().map(|(name, _)| *name)
    }
}
