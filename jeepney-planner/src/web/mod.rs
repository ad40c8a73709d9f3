//! Web layer for the jeepney journey planner.
//!
//! Provides a JSON API for planning journeys and listing routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
