use axum::{
    extract::{Path, State},
    response::Html,
};
use chrono::Local;
use minijinja::context;

use crate::calendar::MonthView;
use crate::error::ShowcaseError;
use crate::state::AppState;

pub async fn current_month(State(state): State<AppState>) -> Result<Html<String>, ShowcaseError> {
    let today = Local::now().date_naive();
    let view = MonthView::containing(today)
        .ok_or_else(|| ShowcaseError::NotFound(format!("month of {today}")))?;
    render(&state, &view)
}

pub async fn month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Html<String>, ShowcaseError> {
    let view = MonthView::new(year, month)
        .ok_or_else(|| ShowcaseError::NotFound(format!("month {year}/{month}")))?;
    render(&state, &view)
}

fn render(state: &AppState, view: &MonthView) -> Result<Html<String>, ShowcaseError> {
    state.render(
        "calendar.html",
        context! {
            weekdays => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            weeks => &view.weeks,
            month_label => &view.month_label,
            prev_url => &view.prev_url,
            next_url => &view.next_url,
        },
    )
}
