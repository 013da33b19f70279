//! Index, toast, tabs and health

use axum::{
    extract::{Path, State},
    response::Html,
};
use minijinja::context;

use crate::error::ShowcaseError;
use crate::state::AppState;

/// Tabs on the UI page, as `(name, label)`
pub const TABS: [(&str, &str); 3] = [
    ("overview", "Overview"),
    ("activity", "Activity"),
    ("settings", "Settings"),
];

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ShowcaseError> {
    state.render("index.html", context! {})
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn toast(State(state): State<AppState>) -> Result<Html<String>, ShowcaseError> {
    state.render(
        "_toast.html",
        context! { message => "Hello from the server!", variant => "info" },
    )
}

pub async fn ui(State(state): State<AppState>) -> Result<Html<String>, ShowcaseError> {
    let (active_tab, label) = TABS[0];
    state.render(
        "ui.html",
        context! { tabs => TABS, active_tab => active_tab, label => label },
    )
}

pub async fn ui_tab(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, ShowcaseError> {
    let (active_tab, label) = TABS
        .iter()
        .find(|(tab, _)| *tab == name)
        .ok_or_else(|| ShowcaseError::NotFound(format!("tab '{name}'")))?;

    state.render(
        "_tab.html",
        context! { active_tab => active_tab, label => label },
    )
}
