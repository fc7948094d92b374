//! In-memory item collection.
//!
//! Stands in for a future persistent store. The collection is built
//! once at startup and shared read-only across requests; `list_all`
//! hands out copies, so no caller can reorder or mutate the backing
//! data.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use uuid::{Uuid, uuid};

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// Read-only repository over a fixed in-memory collection.
#[derive(Clone)]
pub struct InMemoryItemRepository {
    items: Arc<[Item]>,
}

impl InMemoryItemRepository {
    /// Wrap an arbitrary collection, e.g. for tests.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// The standard catalog the service ships with.
    pub fn with_seed_catalog() -> Self {
        Self::new(seed_catalog())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.to_vec())
    }
}

fn seed_item(id: Uuid, name: &str, category: &str, price: f64, created_at: DateTime<Utc>) -> Item {
    Item {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        created_at,
    }
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Seed dates are literal and valid; this cannot be ambiguous in UTC.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// The fixed catalog. IDs are literals so serialized responses are
/// byte-stable across runs.
pub fn seed_catalog() -> Vec<Item> {
    vec![
        seed_item(
            uuid!("a1e8f3c2-5b76-4e1d-9c04-2f6a8d917b3e"),
            "External SSD 2TB",
            "storage",
            1500.0,
            midnight(2023, 1, 1),
        ),
        seed_item(
            uuid!("b2d94a71-8c3f-4b2a-8d15-3e7b9c028c4f"),
            "HD Webcam",
            "peripherals",
            95.0,
            midnight(2023, 1, 25),
        ),
        seed_item(
            uuid!("c3fa05e0-9d28-4f3b-9e26-4f8cad139d50"),
            "4K Monitor",
            "displays",
            1800.0,
            midnight(2023, 2, 14),
        ),
        seed_item(
            uuid!("d40b16ff-ae19-4a4c-af37-509dbe24ae61"),
            "Mechanical Keyboard",
            "peripherals",
            120.0,
            midnight(2023, 3, 10),
        ),
        seed_item(
            uuid!("e51c27ee-bf0a-4b5d-b048-61aecf35bf72"),
            "USB Flash Drive",
            "storage",
            35.0,
            midnight(2023, 4, 2),
        ),
        seed_item(
            uuid!("f62d38dd-c0fb-4c6e-8159-72bfd046c083"),
            "NAS Enclosure",
            "storage",
            2400.0,
            midnight(2023, 5, 20),
        ),
        seed_item(
            uuid!("0734a9cc-d1ec-4d7f-926a-83c0e157d194"),
            "Noise Cancelling Headphones",
            "audio",
            1200.0,
            midnight(2023, 6, 18),
        ),
        seed_item(
            uuid!("1845babb-e2dd-4e80-a37b-94d1f268e2a5"),
            "Laptop Stand",
            "accessories",
            45.0,
            midnight(2023, 7, 7),
        ),
        seed_item(
            uuid!("2956cbaa-f3ce-4f91-b48c-a5e20379f3b6"),
            "Gaming Mouse",
            "peripherals",
            120.0,
            midnight(2023, 8, 30),
        ),
        seed_item(
            uuid!("3a67dc99-04bf-4aa2-858d-b6f3148a04c7"),
            "Studio Microphone",
            "audio",
            1999.0,
            midnight(2023, 9, 12),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_catalog_has_ten_items() {
        let repository = InMemoryItemRepository::with_seed_catalog();
        assert_eq!(repository.len(), 10);
        let items = repository.list_all().await.unwrap();
        assert_eq!(items.len(), 10);
    }

    #[tokio::test]
    async fn test_seed_catalog_contains_reference_storage_item() {
        let items = seed_catalog();
        let ssd = items
            .iter()
            .find(|i| i.price == 1500.0 && i.category == "storage")
            .expect("1500-priced storage item");
        assert_eq!(ssd.created_at, midnight(2023, 1, 1));
    }

    #[tokio::test]
    async fn test_seed_ids_are_unique() {
        let items = seed_catalog();
        let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[tokio::test]
    async fn test_list_all_returns_independent_copies() {
        let repository = InMemoryItemRepository::with_seed_catalog();
        let mut first = repository.list_all().await.unwrap();
        first.reverse();
        let second = repository.list_all().await.unwrap();
        assert_ne!(first, second);
        assert_eq!(second, seed_catalog());
    }
}
