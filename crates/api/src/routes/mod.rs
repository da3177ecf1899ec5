pub mod health;
pub mod interaction;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /Customers/{customer_id}/Interactions/{interaction_id}    get, patch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/Customers", interaction::router())
}
