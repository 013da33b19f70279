//! Form validation support
//!
//! Handlers collect validation failures into a [`FieldErrorMap`] and pass it to
//! the template context as `errors`; the form fragments render them inline via
//! the `field_errors` filter.

mod error;

pub use error::FieldErrorMap;
