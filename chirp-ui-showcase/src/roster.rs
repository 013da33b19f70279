//! Team roster shown on the data page

use chirp_ui::table::{InMemoryRecordStore, Record};

const ROSTER: [(&str, &str, &str, &str, &str, &str); 15] = [
    ("Alice", "alice@example.com", "Admin", "success", "2h ago", "◇"),
    ("Bob", "bob@example.com", "User", "warning", "1d ago", "◆"),
    ("Carol", "carol@example.com", "User", "success", "5m ago", "○"),
    ("Dave", "dave@example.com", "Admin", "default", "3d ago", "△"),
    ("Eve", "eve@example.com", "User", "success", "1h ago", "□"),
    ("Frank", "frank@example.com", "Guest", "default", "1w ago", "▷"),
    ("Grace", "grace@example.com", "Admin", "success", "30m ago", "◇"),
    ("Henry", "henry@example.com", "User", "warning", "2d ago", "◆"),
    ("Ivy", "ivy@example.com", "User", "success", "4h ago", "○"),
    ("Jack", "jack@example.com", "Guest", "default", "5d ago", "△"),
    ("Kate", "kate@example.com", "Admin", "success", "15m ago", "□"),
    ("Leo", "leo@example.com", "User", "success", "1h ago", "▷"),
    ("Mia", "mia@example.com", "User", "warning", "6h ago", "◇"),
    ("Noah", "noah@example.com", "Guest", "default", "2w ago", "◆"),
    ("Oscar", "oscar@example.com", "Admin", "success", "45m ago", "○"),
];

/// Roles offered by the role filter
pub const ROLES: [&str; 3] = ["Admin", "User", "Guest"];

/// The fifteen demo records
#[must_use]
pub fn team_roster() -> Vec<Record> {
    ROSTER
        .iter()
        .map(|&(name, email, role, status, last_active, avatar)| {
            Record::new(name, email, role, status, last_active, avatar)
        })
        .collect()
}

/// Store backed by [`team_roster`]
#[must_use]
pub fn roster_store() -> InMemoryRecordStore {
    InMemoryRecordStore::new(team_roster())
}
