pub mod handlers;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// One violated constraint in a request's query parameters.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParamViolation {
    /// Wire name of the offending parameter (e.g. "minPrice")
    pub path: String,
    /// Human-readable description of the violation
    pub message: String,
}

/// Body of every 400 response to a malformed query:
///
/// ```json
/// {
///   "error": "Invalid query parameters",
///   "details": [{ "path": "minPrice", "message": "..." }]
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct InvalidQueryResponse {
    pub error: String,
    pub details: Vec<ParamViolation>,
}

/// Body of every 500 response:
///
/// ```json
/// { "message": "Server Error", "error": "..." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerErrorResponse {
    pub message: String,
    pub error: String,
}

/// Generic error body used by fallback handlers (404, 405).
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Requests either fail validation before any handler logic runs
/// (`InvalidQuery`) or fail unexpectedly inside the pipeline
/// (`InternalServerError`). There is no partial-success mode.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid query parameters")]
    InvalidQuery(Vec<ParamViolation>),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<ParamViolation> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(|err| {
                    // Struct-level rules report under "__all__" and name the
                    // offending wire parameter in their error code.
                    let path = if field.as_ref() == "__all__" {
                        err.code.to_string()
                    } else {
                        wire_param_name(field.as_ref())
                    };
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path));
                    ParamViolation { path, message }
                })
            })
            .collect();

        // HashMap iteration order is arbitrary; keep violations deterministic.
        details.sort_by(|a, b| a.path.cmp(&b.path).then(a.message.cmp(&b.message)));

        AppError::InvalidQuery(details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidQuery(details) => {
                tracing::info!(violations = details.len(), "Invalid query parameters");
                let body = Json(InvalidQueryResponse {
                    error: "Invalid query parameters".to_string(),
                    details,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                let body = Json(ErrorResponse {
                    error: "NotFound".to_string(),
                    message: msg,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                let body = Json(ServerErrorResponse {
                    message: "Server Error".to_string(),
                    error: msg,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Translate a Rust field name to its lowerCamelCase wire name.
///
/// Query structs rename snake_case fields to camelCase via serde, but
/// `validator` reports violations under the Rust name. Responses must
/// use the name the client actually sent.
pub(crate) fn wire_param_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_wire_param_name_snake_to_camel() {
        assert_eq!(wire_param_name("min_price"), "minPrice");
        assert_eq!(wire_param_name("sort_by"), "sortBy");
        assert_eq!(wire_param_name("q"), "q");
        assert_eq!(wire_param_name("limit"), "limit");
    }

    #[test]
    fn test_validation_errors_become_violations() {
        let mut errors = ValidationErrors::new();
        let mut range = ValidationError::new("range");
        range.message = Some("minPrice must be a non-negative number".into());
        errors.add("min_price".into(), range);

        let err = AppError::from(errors);
        match err {
            AppError::InvalidQuery(details) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].path, "minPrice");
                assert_eq!(details[0].message, "minPrice must be a non-negative number");
            }
            other => panic!("expected InvalidQuery, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_error_uses_code_as_path() {
        let mut errors = ValidationErrors::new();
        let mut bounds = ValidationError::new("minPrice");
        bounds.message = Some("minPrice must be less than or equal to maxPrice".into());
        errors.add("__all__".into(), bounds);

        match AppError::from(errors) {
            AppError::InvalidQuery(details) => {
                assert_eq!(details[0].path, "minPrice");
            }
            other => panic!("expected InvalidQuery, got {:?}", other),
        }
    }

    #[test]
    fn test_violations_are_sorted_by_path() {
        let mut errors = ValidationErrors::new();
        let mut page = ValidationError::new("range");
        page.message = Some("page must be a positive integer".into());
        errors.add("page".into(), page);
        let mut limit = ValidationError::new("range");
        limit.message = Some("limit must be between 1 and 50".into());
        errors.add("limit".into(), limit);

        match AppError::from(errors) {
            AppError::InvalidQuery(details) => {
                let paths: Vec<_> = details.iter().map(|d| d.path.as_str()).collect();
                assert_eq!(paths, vec!["limit", "page"]);
            }
            other => panic!("expected InvalidQuery, got {:?}", other),
        }
    }
}
