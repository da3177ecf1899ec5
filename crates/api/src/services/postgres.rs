//! Postgres-backed collaborators delegating to `interaction_db` repositories.

use async_trait::async_trait;
use interaction_core::types::DbId;
use interaction_db::models::interaction::{Interaction, InteractionPatch};
use interaction_db::repositories::{CustomerRepo, InteractionRepo};
use interaction_db::DbPool;

use super::{CustomerResources, InteractionLookup, InteractionPatcher};
use crate::error::AppResult;

pub struct PgCustomerResources {
    pool: DbPool,
}

impl PgCustomerResources {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerResources for PgCustomerResources {
    async fn exists(&self, customer_id: DbId) -> AppResult<bool> {
        Ok(CustomerRepo::exists(&self.pool, customer_id).await?)
    }

    async fn is_read_only(&self, customer_id: DbId) -> AppResult<bool> {
        Ok(CustomerRepo::is_read_only(&self.pool, customer_id).await?)
    }
}

/// Serves both lookups and patches from the `interactions` table.
pub struct PgInteractionStore {
    pool: DbPool,
}

impl PgInteractionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionLookup for PgInteractionStore {
    async fn find_for_customer(
        &self,
        customer_id: DbId,
        interaction_id: DbId,
    ) -> AppResult<Option<Interaction>> {
        Ok(InteractionRepo::find_for_customer(&self.pool, customer_id, interaction_id).await?)
    }
}

#[async_trait]
impl InteractionPatcher for PgInteractionStore {
    async fn apply(
        &self,
        existing: Interaction,
        patch: &InteractionPatch,
    ) -> AppResult<Option<Interaction>> {
        let merged = existing.patched(patch);
        let stored = InteractionRepo::replace(&self.pool, &merged).await?;
        if stored.is_none() {
            tracing::warn!(interaction_id = %merged.id, "Replace matched no interaction row");
        }
        Ok(stored)
    }
}
