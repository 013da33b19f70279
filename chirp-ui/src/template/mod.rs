//! minijinja integration
//!
//! chirp-ui components rely on two filters being present in the template
//! environment:
//!
//! ```jinja
//! <div class="{{ 'alert' | bem(variant=variant, cls=cls) }}">
//! {% for message in errors | field_errors('email') %}
//!   <p class="{{ 'field' | bem(modifier='error') }}">{{ message }}</p>
//! {% endfor %}
//! ```
//!
//! Call [`register_filters`] on an existing environment, or use
//! [`TemplateSet`] which registers them itself.
//!
//! # Examples
//!
//! ```rust
//! use chirp_ui::template::register_filters;
//! use minijinja::{context, Environment};
//!
//! let mut env = Environment::new();
//! register_filters(&mut env);
//!
//! let html = env
//!     .render_str("{{ 'alert' | bem(variant='success') }}", context! {})
//!     .unwrap();
//! assert_eq!(html, "chirpui-alert chirpui-alert--success");
//! ```

mod loader;

pub use loader::{EmbeddedTemplates, TemplateSet};

use crate::filters::{field_errors_from_value, Bem, CLASS_PREFIX};
use minijinja::value::{Kwargs, Value};
use minijinja::{Environment, Error};

/// Register `bem` and `field_errors` using the default class prefix
pub fn register_filters(env: &mut Environment<'_>) {
    register_filters_with_prefix(env, CLASS_PREFIX);
}

/// Register `bem` and `field_errors` with a custom class prefix
///
/// `bem` takes the block as its input and `variant`, `modifier` and `cls` as
/// keyword arguments. Missing, `none` and empty values are skipped.
/// `field_errors` accepts any value as the error map and returns an empty
/// list for anything that is not a map.
pub fn register_filters_with_prefix(env: &mut Environment<'_>, prefix: impl Into<String>) {
    let prefix = prefix.into();
    env.add_filter("bem", move |block: String, kwargs: Kwargs| -> Result<String, Error> {
        let variant = class_token(kwargs.get("variant")?);
        let modifier = class_token(kwargs.get("modifier")?);
        let cls = class_token(kwargs.get("cls")?);
        kwargs.assert_all_used()?;

        Ok(Bem::with_prefix(&prefix, &block)
            .variant(&variant)
            .modifier(&modifier)
            .class(&cls)
            .build())
    });
    env.add_filter("field_errors", |errors: Value, field_name: String| {
        field_errors_from_value(&errors, &field_name)
    });
}

/// Create an environment with the chirp-ui filters registered
#[must_use]
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    register_filters(&mut env);
    env
}

fn class_token(value: Option<Value>) -> String {
    match value {
        Some(value) if value.is_true() => value
            .as_str()
            .map_or_else(|| value.to_string(), str::to_owned),
        _ => String::new(),
    }
}
