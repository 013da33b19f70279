//! Field-keyed validation error messages
//!
//! Validation failures are data: handlers collect messages per field into a
//! [`FieldErrorMap`] and hand it to the template, where the `field_errors`
//! filter renders each field's messages inline.

use serde::Serialize;
use std::collections::BTreeMap;

/// Validation error messages keyed by field name
///
/// Fields keep their messages in insertion order. Serializes as a plain
/// object of arrays, e.g. `{"email": ["Email is required"]}`.
///
/// # Examples
///
/// ```rust
/// use chirp_ui::forms::FieldErrorMap;
///
/// let mut errors = FieldErrorMap::new();
/// errors.add("email", "is required");
/// errors.add("email", "must be a valid email address");
/// errors.add("password", "must be at least 8 characters");
///
/// assert!(errors.has_errors());
/// assert_eq!(errors.for_field("email").len(), 2);
/// assert!(errors.for_field("name").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrorMap {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrorMap {
    /// Create a new empty error map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Check if any field has errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }

    /// Check if a specific field has errors
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        !self.for_field(field).is_empty()
    }

    /// Messages recorded for `field`, empty when the field is unknown
    #[must_use]
    pub fn for_field(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Names of all fields that have at least one message
    #[must_use]
    pub fn fields_with_errors(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, _)| field.as_str())
            .collect()
    }

    /// Total number of messages across all fields
    #[must_use]
    pub fn count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Remove all messages
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Append every message from `other`
    pub fn merge(&mut self, other: &Self) {
        for (field, messages) in &other.errors {
            self.errors
                .entry(field.clone())
                .or_default()
                .extend(messages.iter().cloned());
        }
    }

    /// Iterate over fields and their messages
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl<K, V, M> FromIterator<(K, V)> for FieldErrorMap
where
    K: Into<String>,
    V: IntoIterator<Item = M>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, messages) in iter {
            let field = field.into();
            let entry = map.errors.entry(field).or_default();
            entry.extend(messages.into_iter().map(Into::into));
        }
        map
    }
}

/// Convert from validator crate's `ValidationErrors`
///
/// Uses each error's message, falling back to its code when no message was
/// configured on the validation rule.
impl From<validator::ValidationErrors> for FieldErrorMap {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                result.add(field.to_string(), message);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_empty() {
        let errors = FieldErrorMap::new();
        assert!(!errors.has_errors());
        assert_eq!(errors.count(), 0);
        assert!(errors.for_field("email").is_empty());
    }

    #[test]
    fn test_add_keeps_message_order() {
        let mut errors = FieldErrorMap::new();
        errors.add("email", "is required");
        errors.add("email", "is invalid");

        assert!(errors.has_field_error("email"));
        assert!(!errors.has_field_error("password"));
        assert_eq!(errors.for_field("email"), ["is required", "is invalid"]);
        assert_eq!(errors.count(), 2);
    }

    #[test]
    fn test_merge() {
        let mut first = FieldErrorMap::new();
        first.add("email", "is required");

        let mut second = FieldErrorMap::new();
        second.add("password", "too short");
        second.add("email", "is invalid");

        first.merge(&second);

        assert_eq!(first.for_field("email").len(), 2);
        assert_eq!(first.for_field("password").len(), 1);
        assert_eq!(first.count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut errors = FieldErrorMap::new();
        errors.add("email", "is required");
        errors.clear();
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_empty_message_list_is_not_an_error() {
        let errors: FieldErrorMap = [("email", Vec::<String>::new())].into_iter().collect();
        assert!(!errors.has_errors());
        assert!(errors.fields_with_errors().is_empty());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let errors: FieldErrorMap = [("email", ["Invalid"])].into_iter().collect();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"email": ["Invalid"]}));
    }

    #[test]
    fn test_from_validator_errors() {
        let mut source = validator::ValidationErrors::new();
        let mut with_message = validator::ValidationError::new("length");
        with_message.message = Some("Name is required".into());
        source.add("name", with_message);
        source.add("email", validator::ValidationError::new("email"));

        let errors = FieldErrorMap::from(source);
        assert_eq!(errors.for_field("name"), ["Name is required"]);
        assert_eq!(errors.for_field("email"), ["email"]);
    }
}
