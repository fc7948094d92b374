//! Items Domain
//!
//! Read-only catalog queries: free-text search, category and price
//! filtering, sorting, and pagination over a fixed in-memory
//! collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoint, validated query extraction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Orchestrates filter → sort → paginate
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, query params, result page
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{
//!     handlers,
//!     memory::InMemoryItemRepository,
//!     service::ItemService,
//! };
//!
//! // Create a repository and service
//! let repository = InMemoryItemRepository::with_seed_catalog();
//! let service = ItemService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::{InMemoryItemRepository, seed_catalog};
pub use models::{Item, ItemPage, ListItemsQuery, MAX_LIMIT, SortField, SortOrder};
pub use repository::ItemRepository;
pub use service::ItemService;
