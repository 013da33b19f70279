//! Form validation demo

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_htmx::{HxRequest, HxReswap, HxRetarget, SwapOption};
use chirp_ui::forms::FieldErrorMap;
use minijinja::context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::error::ShowcaseError;
use crate::state::AppState;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid")
});

/// Contact form submitted by the demo
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    /// Display name
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Email address
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

impl ContactForm {
    /// Copy of the form with surrounding whitespace removed
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    /// Validate the form, collecting every message per field
    ///
    /// The email format is only checked once an email is present.
    #[must_use]
    pub fn errors(&self) -> FieldErrorMap {
        let mut errors = self
            .validate()
            .map_or_else(FieldErrorMap::from, |()| FieldErrorMap::new());
        if !self.email.is_empty() && !EMAIL_PATTERN.is_match(&self.email) {
            errors.add("email", "Enter a valid email address");
        }
        errors
    }
}

pub async fn page(State(state): State<AppState>) -> Result<Html<String>, ShowcaseError> {
    state.render(
        "forms.html",
        context! { errors => FieldErrorMap::new(), name => "", email => "" },
    )
}

pub async fn submit(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<ContactForm>,
) -> Result<Response, ShowcaseError> {
    let form = form.trimmed();
    let errors = form.errors();

    if errors.has_errors() {
        tracing::debug!(fields = ?errors.fields_with_errors(), "form rejected");
        let body = state.render(
            "_form_demo.html",
            context! { errors => errors, name => form.name, email => form.email },
        )?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
    }

    tracing::info!(name = %form.name, "form accepted");
    if !is_htmx {
        return Ok(Redirect::to("/").into_response());
    }

    let toast = state.render(
        "_toast.html",
        context! { message => "Saved!", variant => "success" },
    )?;
    Ok((
        HxRetarget::from("#toast-container"),
        HxReswap(SwapOption::BeforeEnd),
        toast,
    )
        .into_response())
}
