//! Data table page, table fragment, bulk bar and CSV export

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use axum_extra::extract::Query;
use chirp_ui::table::{content_disposition, to_csv, TableParams, CSV_CONTENT_TYPE};
use minijinja::context;

use crate::error::ShowcaseError;
use crate::roster::ROLES;
use crate::state::AppState;

/// Sortable columns, as `(param, heading)`
const COLUMNS: [(&str, &str); 5] = [
    ("name", "Name"),
    ("email", "Email"),
    ("role", "Role"),
    ("status", "Status"),
    ("last_active", "Last active"),
];

pub async fn page(State(state): State<AppState>) -> Result<Html<String>, ShowcaseError> {
    state.render("data.html", context! { roles => ROLES })
}

pub async fn table(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> Result<Html<String>, ShowcaseError> {
    let spec = params.to_spec(state.page_size());
    let result = state.store().query(&spec);

    state.render(
        "_table.html",
        context! {
            result => result,
            columns => COLUMNS,
            q => spec.q,
            role => spec.role,
            sort_col => spec.sort_col.as_str(),
            sort_dir => spec.sort_dir.as_str(),
            next_dir => spec.sort_dir.toggled().as_str(),
            density => params.density(),
        },
    )
}

pub async fn bulk_bar(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> Result<Html<String>, ShowcaseError> {
    let mut selected: Vec<String> = params.selected_set().into_iter().collect();
    selected.sort();

    state.render(
        "_bulk_bar.html",
        context! { count => selected.len(), selected => selected },
    )
}

pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<TableParams>,
) -> impl IntoResponse {
    let spec = params.to_spec(state.page_size());
    let rows = state.store().export(&spec, &params.selected_set());
    tracing::info!(rows = rows.len(), "exporting team roster");

    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition()),
        ],
        to_csv(&rows),
    )
}
