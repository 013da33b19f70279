//! CSV rendering for table exports

use super::record::Record;

/// Header row of every export
pub const CSV_HEADER: [&str; 5] = ["Name", "Email", "Role", "Status", "Last active"];

/// Download filename for exports
pub const EXPORT_FILENAME: &str = "team-roster.csv";

/// `Content-Type` of exports
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// `Content-Disposition` value that makes browsers download the export
#[must_use]
pub fn content_disposition() -> String {
    format!("attachment; filename=\"{EXPORT_FILENAME}\"")
}

/// Render records as CSV with a header row
///
/// Lines end with `\r\n`. Fields containing a comma, a double quote or a line
/// break are quoted, with inner quotes doubled. The avatar column is not
/// exported.
///
/// # Examples
///
/// ```rust
/// use chirp_ui::table::{to_csv, Record};
///
/// let rows = [Record::new("Alice", "alice@example.com", "Admin", "success", "2h ago", "◇")];
/// assert_eq!(
///     to_csv(&rows),
///     "Name,Email,Role,Status,Last active\r\nAlice,alice@example.com,Admin,success,2h ago\r\n"
/// );
/// ```
#[must_use]
pub fn to_csv(records: &[Record]) -> String {
    let mut out = String::new();
    write_row(&mut out, CSV_HEADER);
    for record in records {
        write_row(
            &mut out,
            [
                record.name.as_str(),
                record.email.as_str(),
                record.role.as_str(),
                record.status.as_str(),
                record.last_active.as_str(),
            ],
        );
    }
    out
}

fn write_row(out: &mut String, fields: [&str; 5]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\r', '\n']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_for_no_rows() {
        assert_eq!(to_csv(&[]), "Name,Email,Role,Status,Last active\r\n");
    }

    #[test]
    fn test_quotes_special_fields() {
        let rows = [Record::new(
            "Doe, Jane",
            "jane@example.com",
            "The \"Boss\"",
            "success",
            "line\nbreak",
            "○",
        )];
        let csv = to_csv(&rows);
        let line = csv.split("\r\n").nth(1).unwrap();
        assert_eq!(
            line,
            "\"Doe, Jane\",jane@example.com,\"The \"\"Boss\"\"\",success,\"line\nbreak\""
        );
    }

    #[test]
    fn test_content_disposition() {
        assert_eq!(
            content_disposition(),
            "attachment; filename=\"team-roster.csv\""
        );
    }
}
