//! Route definitions for customer-scoped interactions.

use axum::routing::get;
use axum::Router;

use crate::handlers::interaction;
use crate::state::AppState;

/// Routes mounted at `/Customers`.
///
/// ```text
/// GET    /{customer_id}/Interactions/{interaction_id}    get_by_id
/// PATCH  /{customer_id}/Interactions/{interaction_id}    patch
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{customer_id}/Interactions/{interaction_id}",
        get(interaction::get_by_id).patch(interaction::patch),
    )
}
