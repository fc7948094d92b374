use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedQuery,
    errors::responses::{BadRequestQueryResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Item, ItemPage, ListItemsQuery};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items),
    components(
        schemas(Item, ItemPage, ListItemsQuery),
        responses(BadRequestQueryResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Read-only item catalog queries")
    )
)]
pub struct ApiDoc;

/// Create the items router
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items))
        .with_state(shared_service)
}

/// List items with optional search, filters, sorting, and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "One page of matching items", body = ItemPage),
        (status = 400, response = BadRequestQueryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedQuery(query): ValidatedQuery<ListItemsQuery>,
) -> ItemResult<Json<ItemPage>> {
    let page = service.list_items(query).await?;
    Ok(Json(page))
}
