//! Parley API crate - axum HTTP server and route handlers.
//!
//! Serves the index confirmation, the chat page, response retrieval from the
//! conversational engine, and a health report.

pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
