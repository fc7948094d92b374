use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Largest page size a client may request.
pub const MAX_LIMIT: u64 = 50;

/// Default page number when the client omits `page`.
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when the client omits `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// Sortable item fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    /// Numeric order on `price`
    Price,
    /// Chronological order on `created_at`
    CreatedAt,
}

/// Sort direction
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Item entity - a single catalog entry.
///
/// Items are immutable for the lifetime of the process; the pipeline
/// only ever clones them out of the shared collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier
    pub id: Uuid,
    /// Item name, target of case-insensitive substring search
    pub name: String,
    /// Category, matched case-insensitively but exactly
    pub category: String,
    /// Non-negative price
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated query parameters for listing items.
///
/// Produced exclusively by the `ValidatedQuery` extractor; handlers and
/// the pipeline assume every constraint here already holds and perform
/// no re-validation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_price_bounds))]
pub struct ListItemsQuery {
    /// Search term matched against item names
    pub q: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[validate(range(min = 0.0, message = "minPrice must be a non-negative number"))]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[validate(range(min = 0.0, message = "maxPrice must be a non-negative number"))]
    pub max_price: Option<f64>,
    /// Field to sort by; absent means the filtered order is kept
    pub sort_by: Option<SortField>,
    /// Sort direction, ascending unless stated otherwise
    #[serde(default)]
    pub sort_order: SortOrder,
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: u64,
    /// Page size, capped at [`MAX_LIMIT`]
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: u64,
}

impl Default for ListItemsQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            min_price: None,
            max_price: None,
            sort_by: None,
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

// The error code doubles as the wire parameter name in the 400 body.
fn validate_price_bounds(query: &ListItemsQuery) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if min > max {
            let mut err = ValidationError::new("minPrice");
            err.message = Some("minPrice must be less than or equal to maxPrice".into());
            return Err(err);
        }
    }
    Ok(())
}

/// One page of the filtered-and-sorted result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPage {
    /// Requested page number, echoed back
    pub page: u64,
    /// Requested page size, echoed back
    pub limit: u64,
    /// Count of items surviving filtering, before pagination
    pub total_items: u64,
    /// `ceil(total_items / limit)`, 0 when nothing matched
    pub total_pages: u64,
    /// The page's items, at most `limit` of them
    pub items: Vec<Item>,
}
