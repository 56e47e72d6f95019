//! Web front end for the station views.
//!
//! Serves the client routes `/`, `/agregar` and `/editar/:id` as
//! server-rendered pages. Every request builds fresh view models, so no
//! state survives between requests except what the backend stores.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::DeleteConfirmation;
pub use routes::{AppError, create_router};
pub use state::AppState;
