//! chirp-ui: headless, htmx-native component helpers
//!
//! chirp-ui components are server-rendered templates styled through
//! BEM-structured `chirpui-*` classes. This crate carries the logic those
//! templates depend on:
//!
//! - [`filters::bem`] builds class strings such as
//!   `chirpui-alert chirpui-alert--success`
//! - [`filters::field_errors`] extracts a field's validation messages,
//!   tolerating absent or malformed error maps
//! - [`table`] filters, sorts, paginates and exports data-table rows
//! - [`template`] registers both filters on a `minijinja` environment
//!
//! # Quick Start
//!
//! ```rust
//! use chirp_ui::prelude::*;
//! use minijinja::context;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut env = minijinja::Environment::new();
//! register_filters(&mut env);
//!
//! let mut errors = FieldErrorMap::new();
//! errors.add("email", "Enter a valid email address");
//!
//! let html = env.render_str(
//!     "<input class=\"{{ 'input' | bem(modifier='error') }}\">\
//!      {% for e in errors | field_errors('email') %}<p>{{ e }}</p>{% endfor %}",
//!     context! { errors => errors },
//! )?;
//! assert!(html.contains("chirpui-input chirpui-input--error"));
//! assert!(html.contains("<p>Enter a valid email address</p>"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod observability;
pub mod table;
pub mod template;

pub mod prelude {
    //! Convenience re-exports for common types and functions
    //!
    //! ```rust
    //! use chirp_ui::prelude::*;
    //! ```

    pub use crate::config::ChirpUiConfig;
    pub use crate::error::ChirpUiError;
    pub use crate::filters::{bem, field_errors, Bem, ErrorsInput};
    pub use crate::forms::FieldErrorMap;
    pub use crate::table::{
        InMemoryRecordStore, Record, RecordStore, SortColumn, SortDirection, TableParams,
        TableQueryResult, TableQuerySpec,
    };
    pub use crate::template::{register_filters, TemplateSet};

    pub use minijinja;
}
