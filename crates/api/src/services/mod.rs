//! Collaborators of the interaction workflow.
//!
//! Handlers only see these traits through [`AppState`](crate::state::AppState).
//! "Not there" is an `Ok` value (`false` / `None`); the error channel is kept
//! for store faults.

pub mod postgres;

use async_trait::async_trait;
use interaction_core::types::DbId;
use interaction_db::models::interaction::{Interaction, InteractionPatch};

use crate::error::AppResult;

pub use postgres::{PgCustomerResources, PgInteractionStore};

/// Answers questions about the parent customer of an interaction.
#[async_trait]
pub trait CustomerResources: Send + Sync {
    /// Whether the customer exists at all.
    async fn exists(&self, customer_id: DbId) -> AppResult<bool>;

    /// Whether the customer may no longer be modified.
    async fn is_read_only(&self, customer_id: DbId) -> AppResult<bool>;
}

/// Fetches an interaction scoped to its owning customer.
#[async_trait]
pub trait InteractionLookup: Send + Sync {
    async fn find_for_customer(
        &self,
        customer_id: DbId,
        interaction_id: DbId,
    ) -> AppResult<Option<Interaction>>;
}

/// Merges a patch onto an interaction and persists it.
#[async_trait]
pub trait InteractionPatcher: Send + Sync {
    /// Returns the stored interaction, or `None` if nothing was persisted.
    async fn apply(
        &self,
        existing: Interaction,
        patch: &InteractionPatch,
    ) -> AppResult<Option<Interaction>>;
}
