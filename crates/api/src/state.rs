use std::sync::Arc;

use interaction_db::DbPool;

use crate::config::ServerConfig;
use crate::services::{
    CustomerResources, InteractionLookup, InteractionPatcher, PgCustomerResources,
    PgInteractionStore,
};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every field is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Existence and read-only checks for customers.
    pub customers: Arc<dyn CustomerResources>,
    /// Customer-scoped interaction lookup.
    pub lookup: Arc<dyn InteractionLookup>,
    /// Merge-and-persist for interaction patches.
    pub patcher: Arc<dyn InteractionPatcher>,
}

impl AppState {
    /// Wire every collaborator to the given Postgres pool.
    pub fn with_pool(pool: DbPool, config: ServerConfig) -> Self {
        let interactions = Arc::new(PgInteractionStore::new(pool.clone()));
        Self {
            config: Arc::new(config),
            customers: Arc::new(PgCustomerResources::new(pool)),
            lookup: interactions.clone(),
            patcher: interactions,
        }
    }
}
