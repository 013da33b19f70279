//! Integration tests for table queries over the team roster fixture

use chirp_ui::table::{
    export, query, to_csv, InMemoryRecordStore, Record, RecordStore, SortColumn, SortDirection,
    TableParams, TableQuerySpec,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// Team roster: name, email, role, status, last active, avatar
fn roster() -> Vec<Record> {
    [
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
    ]
    .into_iter()
    .map(|(name, email, role, status, last_active, avatar)| {
        Record::new(name, email, role, status, last_active, avatar)
    })
    .collect()
}

fn names(rows: &[Record]) -> Vec<&str> {
    rows.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn first_page_sorted_by_name() {
    let result = query(&roster(), &TableQuerySpec::new());
    assert_eq!(names(&result.rows), ["Alice", "Bob", "Carol", "Dave", "Eve"]);
    assert_eq!(result.total_rows, 15);
    assert_eq!(result.total_pages, 3);
    assert_eq!((result.start_row, result.end_row), (1, 5));
}

#[test]
fn search_alice_returns_single_row() {
    let spec = TableQuerySpec::new()
        .search("alice")
        .sort(SortColumn::Name, SortDirection::Asc)
        .page(1);
    let result = query(&roster(), &spec);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].name, "Alice");
    assert_eq!(result.total_pages, 1);
}

#[test]
fn search_matches_role_and_email_substrings() {
    let result = query(&roster(), &TableQuerySpec::new().search("guest").page_size(20));
    assert_eq!(names(&result.rows), ["Frank", "Jack", "Noah"]);

    let result = query(&roster(), &TableQuerySpec::new().search("@EXAMPLE").page_size(20));
    assert_eq!(result.total_rows, 15);
}

#[test]
fn admin_role_filter_pages_by_five() {
    let spec = TableQuerySpec::new().role("Admin").page_size(5);
    let result = query(&roster(), &spec);
    assert_eq!(result.total_rows, 5);
    assert_eq!(names(&result.rows), ["Alice", "Dave", "Grace", "Kate", "Oscar"]);
    assert!(result.rows.iter().all(|record| record.role == "Admin"));
}

#[test]
fn role_filter_is_case_sensitive() {
    let result = query(&roster(), &TableQuerySpec::new().role("admin"));
    assert_eq!(result.total_rows, 0);
}

#[test]
fn page_beyond_range_clamps_to_last_page() {
    let last = query(&roster(), &TableQuerySpec::new().page(3));
    let clamped = query(&roster(), &TableQuerySpec::new().page(999));
    assert_eq!(clamped.page, 3);
    assert_eq!(clamped.rows, last.rows);
    assert_eq!((clamped.start_row, clamped.end_row), (11, 15));
}

#[test]
fn no_matches_yields_single_empty_page() {
    let result = query(&roster(), &TableQuerySpec::new().search("nonexistentxyz"));
    assert!(result.rows.is_empty());
    assert_eq!(result.total_rows, 0);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.page, 1);
    assert_eq!((result.start_row, result.end_row), (0, 0));
}

#[test]
fn descending_name_sort() {
    let spec = TableQuerySpec::new().sort(SortColumn::Name, SortDirection::Desc);
    let result = query(&roster(), &spec);
    assert_eq!(names(&result.rows), ["Oscar", "Noah", "Mia", "Leo", "Kate"]);
}

#[test]
fn last_active_ties_keep_roster_order() {
    let spec = TableQuerySpec::new()
        .sort(SortColumn::LastActive, SortDirection::Asc)
        .page_size(15);
    let result = query(&roster(), &spec);
    let eve = result.rows.iter().position(|r| r.name == "Eve").unwrap();
    let leo = result.rows.iter().position(|r| r.name == "Leo").unwrap();
    assert_eq!(leo, eve + 1);

    let spec = spec.sort(SortColumn::LastActive, SortDirection::Desc);
    let result = query(&roster(), &spec);
    let eve = result.rows.iter().position(|r| r.name == "Eve").unwrap();
    let leo = result.rows.iter().position(|r| r.name == "Leo").unwrap();
    assert_eq!(leo, eve + 1);
}

#[test]
fn query_params_map_to_spec() {
    let params = TableParams {
        q: Some(" ALICE ".into()),
        role: Some(String::new()),
        ..TableParams::default()
    };
    let result = query(&roster(), &params.to_spec(5));
    assert_eq!(names(&result.rows), ["Alice"]);
}

#[test]
fn export_ignores_pagination_and_honors_selection() {
    let all = export(&roster(), &TableQuerySpec::new().page(2), &HashSet::new());
    assert_eq!(all.len(), 15);

    let selected: HashSet<String> = ["kate@example.com", "bob@example.com"]
        .into_iter()
        .map(String::from)
        .collect();
    let picked = export(&roster(), &TableQuerySpec::new(), &selected);
    assert_eq!(names(&picked), ["Bob", "Kate"]);

    let csv = to_csv(&picked);
    assert_eq!(
        csv,
        "Name,Email,Role,Status,Last active\r\n\
         Bob,bob@example.com,User,warning,1d ago\r\n\
         Kate,kate@example.com,Admin,success,15m ago\r\n"
    );
}

#[test]
fn store_backed_query_matches_free_function() {
    let store = InMemoryRecordStore::new(roster());
    let spec = TableQuerySpec::new().search("a").page(2);
    assert_eq!(store.query(&spec), query(&roster(), &spec));
}

fn arb_spec() -> impl Strategy<Value = TableQuerySpec> {
    (
        prop_oneof![Just(String::new()), "[a-z]{1,3}", Just("nonexistentxyz".to_string())],
        prop_oneof![
            Just(String::new()),
            Just("Admin".to_string()),
            Just("User".to_string()),
            Just("Guest".to_string()),
            Just("Nobody".to_string()),
        ],
        prop_oneof![
            Just(SortColumn::Name),
            Just(SortColumn::Email),
            Just(SortColumn::Role),
            Just(SortColumn::Status),
            Just(SortColumn::LastActive),
        ],
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)],
        -5i64..1000,
        0usize..20,
    )
        .prop_map(|(q, role, column, direction, page, page_size)| {
            TableQuerySpec::new()
                .search(q)
                .role(role)
                .sort(column, direction)
                .page(page)
                .page_size(page_size)
        })
}

proptest! {
    #[test]
    fn page_always_within_bounds(spec in arb_spec()) {
        let result = query(&roster(), &spec);
        prop_assert!(result.total_pages >= 1);
        prop_assert!(result.page >= 1);
        prop_assert!(result.page <= result.total_pages);
        prop_assert!(result.rows.len() <= spec.page_size.max(1));
        if result.total_rows == 0 {
            prop_assert_eq!(result.start_row, 0);
            prop_assert_eq!(result.end_row, 0);
        } else {
            prop_assert!(result.start_row >= 1);
            prop_assert_eq!(result.end_row - result.start_row + 1, result.rows.len());
            prop_assert!(result.end_row <= result.total_rows);
        }
    }

    #[test]
    fn query_is_idempotent(spec in arb_spec()) {
        let records = roster();
        prop_assert_eq!(query(&records, &spec), query(&records, &spec));
    }

    #[test]
    fn pages_partition_the_matches(spec in arb_spec()) {
        let records = roster();
        let first = query(&records, &spec.clone().page(1));
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let page = i64::try_from(page).unwrap();
            seen.extend(query(&records, &spec.clone().page(page)).rows);
        }
        prop_assert_eq!(seen.len(), first.total_rows);
        prop_assert_eq!(seen, export(&records, &spec, &HashSet::new()));
    }
}
