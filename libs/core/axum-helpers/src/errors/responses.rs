//! Reusable OpenAPI response types for consistent API documentation.

use super::{InvalidQueryResponse, ServerErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "message": "Server Error",
        "error": "data source unavailable"
    })
)]
pub struct InternalServerErrorResponse(pub ServerErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid query parameters",
    content_type = "application/json",
    example = json!({
        "error": "Invalid query parameters",
        "details": [{
            "path": "minPrice",
            "message": "minPrice must be a non-negative number"
        }]
    })
)]
pub struct BadRequestQueryResponse(pub InvalidQueryResponse);
