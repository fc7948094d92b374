//! Query-string extractor with automatic validation using the validator crate.

use crate::errors::{AppError, ParamViolation};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Deserializes the request's query string into `T` and then runs the
/// `validator` crate's `Validate` rules over it. Any failure, at either
/// stage, rejects the request with the standard 400 invalid-query body
/// before the handler runs, so handlers only ever see well-formed input.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct ListQuery {
///     #[validate(range(min = 1))]
///     page: u64,
/// }
///
/// async fn list(ValidatedQuery(query): ValidatedQuery<ListQuery>) -> String {
///     format!("page {}", query.page)
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                // Type-level failures (bad enum value, non-numeric number)
                // never reach the validator; report them in the same shape.
                AppError::InvalidQuery(vec![ParamViolation {
                    path: "query".to_string(),
                    message: e.body_text(),
                }])
                .into_response()
            })?;

        query
            .validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(query))
    }
}
