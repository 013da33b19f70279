//! Showcase route table
//!
//! Full pages render through `base.html`; routes answering htmx requests
//! return bare fragments.

mod calendar;
mod data;
mod forms;
mod pages;

pub use forms::ContactForm;

use axum::{
    routing::{get, post},
    Router,
};
use axum_htmx::AutoVaryLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the showcase router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(pages::health))
        .route("/toast", post(pages::toast))
        .route("/ui", get(pages::ui))
        .route("/ui/tab/{name}", get(pages::ui_tab))
        .route("/data", get(data::page))
        .route("/data/table", get(data::table))
        .route("/data/bulk-bar", get(data::bulk_bar))
        .route("/data/export", get(data::export))
        .route("/forms", get(forms::page))
        .route("/forms/demo", post(forms::submit))
        .route("/calendar", get(calendar::current_month))
        .route("/calendar/{year}/{month}", get(calendar::month))
        .layer(AutoVaryLayer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
