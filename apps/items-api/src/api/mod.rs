//! Items API routes

pub mod items;

use axum::Router;

/// Assemble all API routes
pub fn routes() -> Router {
    Router::new().nest("/items", items::router())
}
