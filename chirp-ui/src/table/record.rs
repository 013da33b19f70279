//! Table rows and the columns they can be sorted by

use serde::{Deserialize, Serialize};

/// One row of the data table
///
/// `email` identifies a row for bulk selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name
    pub name: String,
    /// Email address (identity key)
    pub email: String,
    /// Role, e.g. `Admin`, `User`, `Guest`
    pub role: String,
    /// Status badge variant, e.g. `success`, `warning`, `default`
    pub status: String,
    /// Human-readable last activity, e.g. `2h ago`
    pub last_active: String,
    /// Avatar glyph
    pub avatar: String,
}

impl Record {
    /// Create a record from its six display fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
        last_active: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
            last_active: last_active.into(),
            avatar: avatar.into(),
        }
    }

    /// Value of `column` for this record
    #[must_use]
    pub fn column(&self, column: SortColumn) -> &str {
        match column {
            SortColumn::Name => &self.name,
            SortColumn::Email => &self.email,
            SortColumn::Role => &self.role,
            SortColumn::Status => &self.status,
            SortColumn::LastActive => &self.last_active,
        }
    }

    /// Whether a lower-cased needle occurs in the name, email or role
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.role]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Name column (default)
    #[default]
    Name,
    /// Email column
    Email,
    /// Role column
    Role,
    /// Status column
    Status,
    /// Last-active column
    LastActive,
}

impl SortColumn {
    /// Parse a `sort` query value; unknown names fall back to [`SortColumn::Name`]
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "email" => Self::Email,
            "role" => Self::Role,
            "status" => Self::Status,
            "last_active" => Self::LastActive,
            _ => Self::Name,
        }
    }

    /// Query parameter value for this column
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
            Self::LastActive => "last_active",
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// Parse a `dir` query value; anything but `desc` is ascending
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Query parameter value for this direction
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite direction, used for header toggle links
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
