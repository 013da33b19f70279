//! Per-field error extraction
//!
//! Templates receive validation errors from handlers that may or may not have
//! produced any. [`ErrorsInput`] makes the "no errors at all" state explicit,
//! and the conversions from untyped values (`serde_json::Value`, template
//! values) fold anything malformed into that state instead of failing.
//!
//! A field entry is accepted when it is a sequence; every item is turned into
//! a string. Any other entry (a bare string, a number, a nested object) counts
//! as no errors for that field.

use crate::forms::FieldErrorMap;
use minijinja::value::{Value, ValueKind};

/// Errors handed to a template: either nothing, or a field map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorsInput {
    /// No validation ran, or it produced nothing
    #[default]
    Absent,
    /// Messages keyed by field name
    Fields(FieldErrorMap),
}

impl ErrorsInput {
    /// Messages for `field_name`, empty when absent or unknown
    #[must_use]
    pub fn for_field(&self, field_name: &str) -> &[String] {
        match self {
            Self::Absent => &[],
            Self::Fields(map) => map.for_field(field_name),
        }
    }

    /// Convert a template value using the defensive policy
    ///
    /// Undefined, none and non-map values become [`ErrorsInput::Absent`].
    #[must_use]
    pub fn from_template_value(value: &Value) -> Self {
        if value.kind() != ValueKind::Map {
            return Self::Absent;
        }
        let Ok(keys) = value.try_iter() else {
            return Self::Absent;
        };

        let map = keys
            .filter_map(|key| {
                let field = key.as_str()?.to_owned();
                let entry = value.get_item(&key).ok()?;
                Some((field, template_messages(&entry)?))
            })
            .collect();
        Self::Fields(map)
    }
}

impl From<FieldErrorMap> for ErrorsInput {
    fn from(map: FieldErrorMap) -> Self {
        Self::Fields(map)
    }
}

impl From<Option<FieldErrorMap>> for ErrorsInput {
    fn from(map: Option<FieldErrorMap>) -> Self {
        map.map_or(Self::Absent, Self::Fields)
    }
}

impl From<&serde_json::Value> for ErrorsInput {
    fn from(value: &serde_json::Value) -> Self {
        let serde_json::Value::Object(object) = value else {
            return Self::Absent;
        };

        let map = object
            .iter()
            .filter_map(|(field, entry)| {
                let serde_json::Value::Array(items) = entry else {
                    return None;
                };
                let messages: Vec<String> = items.iter().map(json_message).collect();
                Some((field.clone(), messages))
            })
            .collect();
        Self::Fields(map)
    }
}

/// Extract the messages recorded for `field_name`
///
/// Never fails: absent input or an unknown field yields an empty list.
///
/// # Examples
///
/// ```rust
/// use chirp_ui::filters::{field_errors, ErrorsInput};
/// use chirp_ui::forms::FieldErrorMap;
///
/// assert!(field_errors(&ErrorsInput::Absent, "email").is_empty());
///
/// let mut errors = FieldErrorMap::new();
/// errors.add("email", "Invalid");
/// assert_eq!(field_errors(&errors.into(), "email"), vec!["Invalid"]);
/// ```
#[must_use]
pub fn field_errors(errors: &ErrorsInput, field_name: &str) -> Vec<String> {
    errors.for_field(field_name).to_vec()
}

/// Template-facing variant of [`field_errors`] accepting any value
#[must_use]
pub fn field_errors_from_value(errors: &Value, field_name: &str) -> Vec<String> {
    if errors.kind() != ValueKind::Map {
        return Vec::new();
    }
    errors
        .get_item(&Value::from(field_name))
        .ok()
        .and_then(|entry| template_messages(&entry))
        .unwrap_or_default()
}

fn template_messages(entry: &Value) -> Option<Vec<String>> {
    match entry.kind() {
        ValueKind::Seq | ValueKind::Iterable => {
            let items = entry.try_iter().ok()?;
            Some(
                items
                    .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_owned))
                    .collect(),
            )
        }
        _ => None,
    }
}

fn json_message(item: &serde_json::Value) -> String {
    match item {
        serde_json::Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(entries: Vec<(&str, Vec<&str>)>) -> FieldErrorMap {
        entries.into_iter().collect()
    }

    #[test]
    fn test_absent_returns_empty() {
        assert!(field_errors(&ErrorsInput::Absent, "email").is_empty());
        assert!(field_errors(&ErrorsInput::from(None::<FieldErrorMap>), "email").is_empty());
    }

    #[test]
    fn test_empty_map_returns_empty() {
        let errors = ErrorsInput::from(FieldErrorMap::new());
        assert!(field_errors(&errors, "any").is_empty());
    }

    #[test]
    fn test_missing_field_returns_empty() {
        let errors = ErrorsInput::from(map(vec![("other", vec!["err"])]));
        assert!(field_errors(&errors, "email").is_empty());
    }

    #[test]
    fn test_present_field_returns_messages() {
        let errors = ErrorsInput::from(map(vec![
            ("email", vec!["Invalid email"]),
            ("x", vec!["A", "B"]),
        ]));
        assert_eq!(field_errors(&errors, "email"), vec!["Invalid email"]);
        assert_eq!(field_errors(&errors, "x"), vec!["A", "B"]);
    }

    #[test]
    fn test_json_non_object_is_absent() {
        for value in [json!(null), json!("not a dict"), json!([]), json!(42), json!(true)] {
            let errors = ErrorsInput::from(&value);
            assert_eq!(errors, ErrorsInput::Absent, "input: {value}");
            assert!(field_errors(&errors, "email").is_empty());
        }
    }

    #[test]
    fn test_json_object_with_lists() {
        let value = json!({"email": ["Invalid"], "age": [18, "too young"]});
        let errors = ErrorsInput::from(&value);
        assert_eq!(field_errors(&errors, "email"), vec!["Invalid"]);
        assert_eq!(field_errors(&errors, "age"), vec!["18", "too young"]);
    }

    #[test]
    fn test_json_non_list_entry_is_ignored() {
        let value = json!({"email": "Invalid", "name": {"nested": ["x"]}, "ok": ["fine"]});
        let errors = ErrorsInput::from(&value);
        assert!(field_errors(&errors, "email").is_empty());
        assert!(field_errors(&errors, "name").is_empty());
        assert_eq!(field_errors(&errors, "ok"), vec!["fine"]);
    }

    #[test]
    fn test_template_value_defensive() {
        assert!(field_errors_from_value(&Value::UNDEFINED, "email").is_empty());
        assert!(field_errors_from_value(&Value::from(()), "email").is_empty());
        assert!(field_errors_from_value(&Value::from("not a dict"), "email").is_empty());
        assert!(field_errors_from_value(&Value::from(42), "email").is_empty());
        assert!(field_errors_from_value(&Value::from(vec!["a"]), "email").is_empty());
    }

    #[test]
    fn test_template_value_map() {
        let value = Value::from_serialize(json!({"email": ["Invalid"], "name": "bare"}));
        assert_eq!(field_errors_from_value(&value, "email"), vec!["Invalid"]);
        assert!(field_errors_from_value(&value, "name").is_empty());
        assert!(field_errors_from_value(&value, "missing").is_empty());
    }

    #[test]
    fn test_template_value_into_errors_input() {
        let value = Value::from_serialize(json!({"email": ["Invalid", "Taken"]}));
        let errors = ErrorsInput::from_template_value(&value);
        assert_eq!(errors.for_field("email"), ["Invalid", "Taken"]);

        let errors = ErrorsInput::from_template_value(&Value::from("oops"));
        assert_eq!(errors, ErrorsInput::Absent);
    }
}
