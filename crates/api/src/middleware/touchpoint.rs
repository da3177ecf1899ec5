//! Touchpoint extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

/// Header carrying the calling touchpoint's identifier.
///
/// Header names are case-insensitive; clients typically send `TouchpointId`.
pub const TOUCHPOINT_HEADER: &str = "touchpointid";

/// Identifier of the channel or system that originated the request, taken
/// from the [`TOUCHPOINT_HEADER`] header.
///
/// A missing or blank header rejects the request with `400 Bad Request`:
///
/// ```ignore
/// async fn my_handler(Touchpoint(touchpoint): Touchpoint) -> AppResult<Json<()>> {
///     tracing::info!(%touchpoint, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Touchpoint(pub String);

impl<S> FromRequestParts<S> for Touchpoint
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(TOUCHPOINT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| Touchpoint(v.to_string()))
            .ok_or_else(|| {
                tracing::info!("Unable to locate touchpoint id in request header");
                AppError::BadRequest("Unable to locate 'TouchpointId' in request header".into())
            })
    }
}
