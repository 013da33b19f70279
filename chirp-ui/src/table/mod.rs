//! Data table queries: search, role filter, sort, pagination and export
//!
//! The data-table component is driven by query parameters. [`TableParams`]
//! parses them, [`TableParams::to_spec`] normalizes them into a
//! [`TableQuerySpec`], and [`query`] runs it over a record set:
//!
//! 1. keep records whose name, email or role contains `q` (case-insensitive)
//! 2. keep records whose role equals `role` exactly
//! 3. stable sort on the lower-cased sort column
//! 4. clamp the page into range and slice it out
//!
//! [`export`] runs steps 1-3 and optionally restricts the rows to a bulk
//! selection; [`to_csv`] renders the result for download.
//!
//! # Example
//!
//! ```rust
//! use chirp_ui::table::{InMemoryRecordStore, Record, RecordStore, TableQuerySpec};
//!
//! let store = InMemoryRecordStore::new(vec![
//!     Record::new("Alice", "alice@example.com", "Admin", "success", "2h ago", "◇"),
//!     Record::new("Bob", "bob@example.com", "User", "warning", "1d ago", "◆"),
//! ]);
//!
//! let result = store.query(&TableQuerySpec::new().role("Admin"));
//! assert_eq!(result.total_rows, 1);
//! assert_eq!(result.page, 1);
//! ```

mod csv;
mod params;
mod query;
mod record;
mod store;

pub use csv::{content_disposition, to_csv, CSV_CONTENT_TYPE, CSV_HEADER, EXPORT_FILENAME};
pub use params::TableParams;
pub use query::{
    export, filter_and_sort, query, TableQueryResult, TableQuerySpec, DEFAULT_PAGE_SIZE,
};
pub use record::{Record, SortColumn, SortDirection};
pub use store::{InMemoryRecordStore, RecordStore};
