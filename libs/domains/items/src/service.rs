//! Item Service - the query orchestrator.

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{ItemPage, ListItemsQuery};
use crate::query::{filter_items, paginate, sort_items};
use crate::repository::ItemRepository;

/// Service composing the query pipeline over an item repository.
///
/// `list_items` is a pure function of the collection and the query:
/// identical inputs yield identical pages, and nothing is cached or
/// carried between calls. The service is cheaply cloneable and safe to
/// share across request handlers.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List items: filter, then sort, then paginate, in that order.
    #[instrument(skip(self))]
    pub async fn list_items(&self, query: ListItemsQuery) -> ItemResult<ItemPage> {
        let all_items = self.repository.list_all().await?;

        let filtered = filter_items(&all_items, &query);
        let sorted = sort_items(filtered, query.sort_by, query.sort_order);
        let (items, total_items, total_pages) = paginate(sorted, query.page, query.limit);

        Ok(ItemPage {
            page: query.page,
            limit: query.limit,
            total_items,
            total_pages,
            items,
        })
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
