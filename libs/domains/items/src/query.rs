//! The list-items query pipeline: filter, sort, paginate.
//!
//! Every function here is pure and allocation-fresh. The backing
//! collection is shared read-only across requests, so filtering always
//! clones matching items into a new vector and sorting only ever
//! reorders that fresh vector. Nothing in this module can observe or
//! cause mutation of the source slice.

use crate::models::{Item, ListItemsQuery, SortField, SortOrder};

/// Apply the query's filter predicates, conjunctively, over `items`.
///
/// Each predicate participates only if its parameter is present:
/// - `q`: case-insensitive substring match on the item name
/// - `category`: case-insensitive exact match
/// - `min_price` / `max_price`: inclusive bounds
///
/// With no predicates this is a defensive copy of the full collection.
pub fn filter_items(items: &[Item], query: &ListItemsQuery) -> Vec<Item> {
    let needle = query.q.as_deref().map(str::to_lowercase);
    let category = query.category.as_deref().map(str::to_lowercase);

    items
        .iter()
        .filter(|item| {
            needle
                .as_deref()
                .is_none_or(|n| item.name.to_lowercase().contains(n))
        })
        .filter(|item| {
            category
                .as_deref()
                .is_none_or(|c| item.category.to_lowercase() == c)
        })
        .filter(|item| query.min_price.is_none_or(|min| item.price >= min))
        .filter(|item| query.max_price.is_none_or(|max| item.price <= max))
        .cloned()
        .collect()
}

/// Reorder `items` by the requested field and direction.
///
/// Absent `sort_by` preserves the incoming order. The sort is stable:
/// items comparing equal keep their relative order from the filtered
/// sequence, with no secondary key.
pub fn sort_items(mut items: Vec<Item>, sort_by: Option<SortField>, order: SortOrder) -> Vec<Item> {
    let Some(field) = sort_by else {
        return items;
    };

    match (field, order) {
        (SortField::Price, SortOrder::Asc) => {
            items.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        (SortField::Price, SortOrder::Desc) => {
            items.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
        (SortField::CreatedAt, SortOrder::Asc) => {
            items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }
        (SortField::CreatedAt, SortOrder::Desc) => {
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }

    items
}

/// Slice one page out of `items` and compute pagination totals.
///
/// `page` is 1-based; `limit` is at least 1 (both guaranteed by
/// validation). A page past the end of the data is not an error: it
/// yields an empty page with correct totals.
pub fn paginate(items: Vec<Item>, page: u64, limit: u64) -> (Vec<Item>, u64, u64) {
    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit) as usize;
    let page_items = if start >= items.len() {
        Vec::new()
    } else {
        let end = items.len().min(start + limit as usize);
        items[start..end].to_vec()
    };

    (page_items, total_items, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn item(name: &str, category: &str, price: f64, day: u32) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            created_at: Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item("External SSD", "storage", 1500.0, 1),
            item("Keyboard", "peripherals", 120.0, 5),
            item("NAS Enclosure", "storage", 2400.0, 9),
            item("Mouse", "peripherals", 120.0, 3),
            item("Flash Drive", "storage", 35.0, 7),
        ]
    }

    #[test]
    fn test_no_filters_returns_full_copy() {
        let items = catalog();
        let filtered = filter_items(&items, &ListItemsQuery::default());
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = catalog();
        let query = ListItemsQuery {
            q: Some("ssd".to_string()),
            ..Default::default()
        };
        let filtered = filter_items(&items, &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "External SSD");
    }

    #[test]
    fn test_category_is_exact_not_substring() {
        let items = catalog();
        let query = ListItemsQuery {
            category: Some("STORAGE".to_string()),
            ..Default::default()
        };
        let filtered = filter_items(&items, &query);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|i| i.category == "storage"));

        let query = ListItemsQuery {
            category: Some("stor".to_string()),
            ..Default::default()
        };
        assert!(filter_items(&items, &query).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let items = catalog();
        let query = ListItemsQuery {
            min_price: Some(120.0),
            max_price: Some(1500.0),
            ..Default::default()
        };
        let filtered = filter_items(&items, &query);
        assert!(filtered.iter().all(|i| i.price >= 120.0 && i.price <= 1500.0));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let items = catalog();
        let query = ListItemsQuery {
            category: Some("storage".to_string()),
            max_price: Some(100.0),
            ..Default::default()
        };
        let filtered = filter_items(&items, &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Flash Drive");
    }

    #[test]
    fn test_stricter_price_bound_never_grows_result() {
        let items = catalog();
        let loose = ListItemsQuery {
            min_price: Some(100.0),
            ..Default::default()
        };
        let strict = ListItemsQuery {
            min_price: Some(1000.0),
            ..Default::default()
        };
        assert!(filter_items(&items, &strict).len() <= filter_items(&items, &loose).len());
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let items = catalog();
        let before = items.clone();
        let query = ListItemsQuery {
            q: Some("key".to_string()),
            ..Default::default()
        };
        let _ = filter_items(&items, &query);
        assert_eq!(items, before);
    }

    #[test]
    fn test_sort_absent_preserves_order() {
        let items = catalog();
        let sorted = sort_items(items.clone(), None, SortOrder::Desc);
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_sort_price_asc_is_non_decreasing() {
        let sorted = sort_items(catalog(), Some(SortField::Price), SortOrder::Asc);
        assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_sort_price_desc_is_non_increasing() {
        let sorted = sort_items(catalog(), Some(SortField::Price), SortOrder::Desc);
        assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_sort_created_at_desc_is_latest_first() {
        let sorted = sort_items(catalog(), Some(SortField::CreatedAt), SortOrder::Desc);
        assert!(sorted.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(sorted[0].name, "NAS Enclosure");
    }

    #[test]
    fn test_sort_is_stable_on_equal_prices() {
        // Keyboard precedes Mouse in the catalog and both cost 120.0
        let sorted = sort_items(catalog(), Some(SortField::Price), SortOrder::Asc);
        let keyboard = sorted.iter().position(|i| i.name == "Keyboard").unwrap();
        let mouse = sorted.iter().position(|i| i.name == "Mouse").unwrap();
        assert!(keyboard < mouse);
    }

    #[test]
    fn test_paginate_first_page() {
        let (page, total_items, total_pages) = paginate(catalog(), 1, 2);
        assert_eq!(page.len(), 2);
        assert_eq!(total_items, 5);
        assert_eq!(total_pages, 3);
    }

    #[test]
    fn test_paginate_last_page_is_partial() {
        let (page, _, _) = paginate(catalog(), 3, 2);
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_paginate_page_beyond_data_is_empty_not_error() {
        let (page, total_items, total_pages) = paginate(catalog(), 999, 10);
        assert!(page.is_empty());
        assert_eq!(total_items, 5);
        assert_eq!(total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_collection_has_zero_pages() {
        let (page, total_items, total_pages) = paginate(Vec::new(), 1, 10);
        assert!(page.is_empty());
        assert_eq!(total_items, 0);
        assert_eq!(total_pages, 0);
    }

    #[test]
    fn test_paginate_total_pages_rounds_up() {
        let (_, _, total_pages) = paginate(catalog(), 1, 3);
        assert_eq!(total_pages, 2);
    }

    #[test]
    fn test_pages_partition_the_collection() {
        let items = sort_items(catalog(), Some(SortField::Price), SortOrder::Asc);
        let limit = 2;
        let (_, total_items, total_pages) = paginate(items.clone(), 1, limit);

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            let (page_items, _, _) = paginate(items.clone(), page, limit);
            assert!(page_items.len() as u64 <= limit);
            rebuilt.extend(page_items);
        }

        assert_eq!(rebuilt.len() as u64, total_items);
        assert_eq!(rebuilt, items);
    }
}
