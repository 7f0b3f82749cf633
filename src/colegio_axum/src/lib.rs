//! Axum routes for the account service.
//!
//! Each route parses its input into domain types, calls one or two
//! `AccountService` operations and maps the outcome to a JSON response.
//!
//! # Usage
//!
//! ```ignore
//! use colegio_axum::{AppState, routes};
//!
//! let app = Router::new()
//!     .route("/accounts", post(routes::register))
//!     .with_state(AppState::new(account_service, "https://colegio.example"));
//! ```

pub mod error;
pub mod extractors;
pub mod models;
pub mod routes;
pub mod state;

// Re-export for convenience
pub use error::ApiError;
pub use extractors::Authenticated;
pub use state::AppState;
