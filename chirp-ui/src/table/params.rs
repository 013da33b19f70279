//! Mapping from HTTP query parameters to a [`TableQuerySpec`]

use super::query::TableQuerySpec;
use super::record::{SortColumn, SortDirection};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw table query parameters as they arrive on the URL
///
/// `?q=&role=&sort=name&dir=asc&page=1&density=comfortable&selected=a&selected=b`
///
/// Every field is optional. `page` is kept as text so that a malformed value
/// falls back to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    /// Free-text search
    pub q: Option<String>,
    /// Exact role filter
    pub role: Option<String>,
    /// Sort column name
    pub sort: Option<String>,
    /// Sort direction, `asc` or `desc`
    pub dir: Option<String>,
    /// Requested page
    pub page: Option<String>,
    /// Row density passed through to the table markup
    pub density: Option<String>,
    /// Selected row emails, repeated
    pub selected: Vec<String>,
}

impl TableParams {
    /// Normalized free-text search: trimmed and lower-cased
    #[must_use]
    pub fn search(&self) -> String {
        self.q.as_deref().unwrap_or_default().trim().to_lowercase()
    }

    /// Normalized role filter: trimmed
    #[must_use]
    pub fn role_filter(&self) -> String {
        self.role.as_deref().unwrap_or_default().trim().to_string()
    }

    /// Requested page, 1 when missing or not a number
    #[must_use]
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }

    /// Row density, `comfortable` by default
    #[must_use]
    pub fn density(&self) -> &str {
        self.density
            .as_deref()
            .filter(|density| !density.is_empty())
            .unwrap_or("comfortable")
    }

    /// Selected emails as a set
    #[must_use]
    pub fn selected_set(&self) -> HashSet<String> {
        self.selected
            .iter()
            .filter(|email| !email.is_empty())
            .cloned()
            .collect()
    }

    /// Build the query spec for a given page size
    #[must_use]
    pub fn to_spec(&self, page_size: usize) -> TableQuerySpec {
        TableQuerySpec::new()
            .search(self.search())
            .role(self.role_filter())
            .sort(
                SortColumn::from_param(self.sort.as_deref().unwrap_or("name")),
                SortDirection::from_param(self.dir.as_deref().unwrap_or("asc")),
            )
            .page(self.page_number())
            .page_size(page_size)
    }
}
