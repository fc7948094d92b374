//! Items domain wiring

use axum::Router;
use domain_items::{InMemoryItemRepository, ItemService, handlers};

/// Create the items router over the seeded in-memory catalog
pub fn router() -> Router {
    let repository = InMemoryItemRepository::with_seed_catalog();
    let service = ItemService::new(repository);
    handlers::router(service)
}
