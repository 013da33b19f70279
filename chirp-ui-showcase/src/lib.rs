//! chirp-ui component showcase
//!
//! A small axum application exercising the chirp-ui helpers: BEM classes,
//! form validation errors through `field_errors`, and an htmx-driven data
//! table with search, role filter, sorting, pagination and CSV export.
//!
//! ```rust,no_run
//! use chirp_ui_showcase::{router, AppState, ShowcaseConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ShowcaseConfig::load(None)?;
//! let address = config.server.bind_address();
//! let app = router(AppState::new(config)?);
//!
//! let listener = tokio::net::TcpListener::bind(address).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod roster;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::ShowcaseConfig;
pub use error::ShowcaseError;
pub use routes::router;
pub use state::AppState;
