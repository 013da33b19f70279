//! Template filters used by chirp-ui components
//!
//! - [`bem`] builds `chirpui-*` class strings from a block name plus optional
//!   variant, modifier and extra class.
//! - [`field_errors`] pulls one field's messages out of a validation error map.
//!
//! Both are plain functions; [`crate::template::register_filters`] exposes them
//! to a `minijinja` environment under the same names.

mod bem;
mod field_errors;

pub use bem::{bem, Bem, CLASS_PREFIX};
pub use field_errors::{field_errors, field_errors_from_value, ErrorsInput};
