//! Handlers for the `/Interactions` resource.
//!
//! Interactions are nested under customers:
//! `/Customers/{customer_id}/Interactions/{interaction_id}`
//!
//! Every step short-circuits; the patch is the only write and always runs last.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use interaction_core::error::CoreError;
use interaction_core::types::DbId;
use interaction_core::validation::validate_resource;
use interaction_db::models::interaction::{Interaction, InteractionPatch};

use crate::error::{AppError, AppResult};
use crate::middleware::touchpoint::Touchpoint;
use crate::state::AppState;

/// GET /api/Customers/{customer_id}/Interactions/{interaction_id}
pub async fn get_by_id(
    Touchpoint(touchpoint): Touchpoint,
    State(state): State<AppState>,
    Path((customer_id, interaction_id)): Path<(String, String)>,
) -> AppResult<Json<Interaction>> {
    let customer_id = parse_id(&customer_id)?;
    let interaction_id = parse_id(&interaction_id)?;
    tracing::debug!(%touchpoint, %customer_id, %interaction_id, "Fetching interaction");

    ensure_customer_exists(&state, customer_id).await?;
    let interaction = find_interaction(&state, customer_id, interaction_id).await?;
    Ok(Json(interaction))
}

/// PATCH /api/Customers/{customer_id}/Interactions/{interaction_id}
///
/// The body is read as raw bytes so that any deserialization failure maps to
/// `422` instead of the extractor's own rejection.
pub async fn patch(
    Touchpoint(touchpoint): Touchpoint,
    State(state): State<AppState>,
    Path((customer_id, interaction_id)): Path<(String, String)>,
    body: Bytes,
) -> AppResult<Json<Interaction>> {
    let customer_id = parse_id(&customer_id)?;
    let interaction_id = parse_id(&interaction_id)?;

    let patch = parse_patch(&body)?.with_request_defaults(&touchpoint, Utc::now());

    let failures = validate_resource(&patch);
    if !failures.is_empty() {
        tracing::info!(count = failures.len(), "Interaction patch failed validation");
        return Err(CoreError::Validation(failures).into());
    }

    ensure_customer_exists(&state, customer_id).await?;
    if state.customers.is_read_only(customer_id).await? {
        tracing::info!(%customer_id, "Customer is read only");
        return Err(CoreError::Forbidden(format!("Customer {customer_id} is read only")).into());
    }

    let existing = find_interaction(&state, customer_id, interaction_id).await?;

    let updated = state
        .patcher
        .apply(existing, &patch)
        .await?
        .ok_or_else(|| {
            tracing::info!(%interaction_id, "Interaction patch was not persisted");
            AppError::BadRequest(format!("Failed to update interaction {interaction_id}"))
        })?;

    tracing::info!(%touchpoint, %customer_id, %interaction_id, "Interaction updated");
    Ok(Json(updated))
}

/// Only a JSON object is a patch. Arrays would otherwise deserialize
/// positionally into the struct fields.
fn parse_patch(body: &[u8]) -> AppResult<InteractionPatch> {
    let unprocessable = |e: serde_json::Error| {
        tracing::info!(error = %e, "Unable to deserialize interaction patch");
        AppError::UnprocessableEntity(format!("Unable to parse request body: {e}"))
    };

    let fields: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(body).map_err(unprocessable)?;
    serde_json::from_value(serde_json::Value::Object(fields)).map_err(unprocessable)
}

fn parse_id(raw: &str) -> AppResult<DbId> {
    DbId::parse_str(raw).map_err(|_| {
        tracing::info!(id = raw, "Unable to parse identifier");
        AppError::BadRequest(format!("Unable to parse '{raw}' to a UUID"))
    })
}

async fn ensure_customer_exists(state: &AppState, customer_id: DbId) -> AppResult<()> {
    if state.customers.exists(customer_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: customer_id,
        }))
    }
}

async fn find_interaction(
    state: &AppState,
    customer_id: DbId,
    interaction_id: DbId,
) -> AppResult<Interaction> {
    state
        .lookup
        .find_for_customer(customer_id, interaction_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id: interaction_id,
        }))
}
