use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for read-only access to the item collection.
///
/// The pipeline needs the full collection; filtering, sorting, and
/// pagination all happen in memory on a fresh copy. Implementations
/// must never expose a handle through which callers could mutate the
/// backing collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Return a fresh copy of every item in the collection.
    async fn list_all(&self) -> ItemResult<Vec<Item>>;
}
