//! Filter, sort and paginate records

use super::record::{Record, SortColumn, SortDirection};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Rows shown per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One table query
///
/// `q` matches case-insensitively against name, email and role; `role` must
/// match exactly. Empty strings disable their filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableQuerySpec {
    /// Free-text search
    pub q: String,
    /// Exact role filter
    pub role: String,
    /// Column to sort by
    pub sort_col: SortColumn,
    /// Sort direction
    pub sort_dir: SortDirection,
    /// Requested 1-based page; out-of-range values are clamped
    pub page: i64,
    /// Rows per page
    pub page_size: usize,
}

impl Default for TableQuerySpec {
    fn default() -> Self {
        Self {
            q: String::new(),
            role: String::new(),
            sort_col: SortColumn::Name,
            sort_dir: SortDirection::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableQuerySpec {
    /// Create a spec for the first page sorted by name
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search
    #[must_use]
    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    /// Set the exact role filter
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the sort column and direction
    #[must_use]
    pub const fn sort(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_col = column;
        self.sort_dir = direction;
        self
    }

    /// Set the requested page
    #[must_use]
    pub const fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// A page of matching records plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableQueryResult {
    /// Records on the current page
    pub rows: Vec<Record>,
    /// Current page, always within `1..=total_pages`
    pub page: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
    /// Number of records matching the filters
    pub total_rows: usize,
    /// 1-based index of the first row shown, 0 when nothing matched
    pub start_row: usize,
    /// 1-based index of the last row shown, 0 when nothing matched
    pub end_row: usize,
}

impl TableQueryResult {
    /// Whether the query matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Apply the text and role filters, then sort
///
/// The sort is stable: rows with equal keys keep their original relative
/// order in both directions.
#[must_use]
pub fn filter_and_sort(records: &[Record], spec: &TableQuerySpec) -> Vec<Record> {
    let needle = spec.q.to_lowercase();
    let mut matched: Vec<Record> = records
        .iter()
        .filter(|record| needle.is_empty() || record.matches_text(&needle))
        .filter(|record| spec.role.is_empty() || record.role == spec.role)
        .cloned()
        .collect();

    let column = spec.sort_col;
    match spec.sort_dir {
        SortDirection::Asc => {
            matched.sort_by_cached_key(|record| record.column(column).to_lowercase());
        }
        SortDirection::Desc => {
            matched.sort_by_cached_key(|record| Reverse(record.column(column).to_lowercase()));
        }
    }
    matched
}

/// Run a table query: filter, sort, then cut out the requested page
///
/// Never fails. Pages below 1 are treated as 1 and pages past the end show
/// the last page; with no matches the result has one empty page.
///
/// # Examples
///
/// ```rust
/// use chirp_ui::table::{query, Record, TableQuerySpec};
///
/// let records = vec![
///     Record::new("Bob", "bob@example.com", "User", "warning", "1d ago", "◆"),
///     Record::new("Alice", "alice@example.com", "Admin", "success", "2h ago", "◇"),
/// ];
///
/// let result = query(&records, &TableQuerySpec::new().search("ALICE"));
/// assert_eq!(result.total_rows, 1);
/// assert_eq!(result.rows[0].name, "Alice");
/// assert_eq!((result.start_row, result.end_row), (1, 1));
/// ```
#[must_use]
pub fn query(records: &[Record], spec: &TableQuerySpec) -> TableQueryResult {
    let matched = filter_and_sort(records, spec);
    let page_size = spec.page_size.max(1);

    let total_rows = matched.len();
    let total_pages = total_rows.div_ceil(page_size).max(1);
    let requested = usize::try_from(spec.page.max(1)).unwrap_or(usize::MAX);
    let page = requested.min(total_pages);

    let offset = (page - 1) * page_size;
    let rows: Vec<Record> = matched.into_iter().skip(offset).take(page_size).collect();
    let start_row = if total_rows == 0 { 0 } else { offset + 1 };
    let end_row = offset + rows.len();

    tracing::trace!(
        q = %spec.q,
        role = %spec.role,
        sort = %spec.sort_col,
        dir = %spec.sort_dir,
        total_rows,
        page,
        total_pages,
        "table query"
    );

    TableQueryResult {
        rows,
        page,
        total_pages,
        total_rows,
        start_row,
        end_row,
    }
}

/// Filtered and sorted records for export, without pagination
///
/// When `selected` holds any emails, only those records are kept; an empty
/// selection exports every match.
#[must_use]
pub fn export<S: std::hash::BuildHasher>(
    records: &[Record],
    spec: &TableQuerySpec,
    selected: &HashSet<String, S>,
) -> Vec<Record> {
    let mut matched = filter_and_sort(records, spec);
    if !selected.is_empty() {
        matched.retain(|record| selected.contains(&record.email));
    }

    tracing::trace!(rows = matched.len(), selected = selected.len(), "table export");
    matched
}
