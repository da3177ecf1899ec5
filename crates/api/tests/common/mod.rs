#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use interaction_api::config::ServerConfig;
use interaction_api::error::AppResult;
use interaction_api::router::build_app_router;
use interaction_api::services::{CustomerResources, InteractionLookup, InteractionPatcher};
use interaction_api::state::AppState;
use interaction_core::types::DbId;
use interaction_db::models::interaction::{Channel, Interaction, InteractionPatch, InteractionType};
use tower::ServiceExt;

pub const VALID_CUSTOMER_ID: &str = "7E467BDB-213F-407A-B86A-1954053D3C24";
pub const VALID_INTERACTION_ID: &str = "1e1a555c-9633-4e12-ab28-09ed60d51cb3";
pub const INVALID_ID: &str = "1111111-2222-3333-4444-555555555555";
pub const TOUCHPOINT: &str = "0000000001";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// The interaction stored under the valid customer/interaction id pair.
pub fn stored_interaction() -> Interaction {
    Interaction {
        id: DbId::parse_str(VALID_INTERACTION_ID).unwrap(),
        customer_id: DbId::parse_str(VALID_CUSTOMER_ID).unwrap(),
        touchpoint_id: Some(TOUCHPOINT.to_string()),
        adviser_details_id: None,
        date_and_time_of_interaction: None,
        channel: Some(Channel::Telephone),
        interaction_type: Some(InteractionType::Enquiry),
        last_modified_date: None,
        last_modified_touchpoint_id: None,
    }
}

/// In-memory stand-in for every collaborator, recording how often each one
/// was called.
pub struct MockStore {
    pub customer_exists: bool,
    pub customer_read_only: bool,
    pub interaction: Option<Interaction>,
    pub persist_succeeds: bool,
    pub exists_calls: AtomicUsize,
    pub read_only_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
    pub patch_calls: AtomicUsize,
    pub last_patch: Mutex<Option<InteractionPatch>>,
}

impl MockStore {
    /// Customer exists and is writable, interaction is present, persisting works.
    pub fn happy_path() -> Self {
        Self {
            customer_exists: true,
            customer_read_only: false,
            interaction: Some(stored_interaction()),
            persist_succeeds: true,
            exists_calls: AtomicUsize::new(0),
            read_only_calls: AtomicUsize::new(0),
            lookup_calls: AtomicUsize::new(0),
            patch_calls: AtomicUsize::new(0),
            last_patch: Mutex::new(None),
        }
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn read_only_calls(&self) -> usize {
        self.read_only_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn patch_calls(&self) -> usize {
        self.patch_calls.load(Ordering::SeqCst)
    }

    pub fn last_patch(&self) -> Option<InteractionPatch> {
        self.last_patch.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomerResources for MockStore {
    async fn exists(&self, _customer_id: DbId) -> AppResult<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.customer_exists)
    }

    async fn is_read_only(&self, _customer_id: DbId) -> AppResult<bool> {
        self.read_only_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.customer_read_only)
    }
}

#[async_trait]
impl InteractionLookup for MockStore {
    async fn find_for_customer(
        &self,
        customer_id: DbId,
        interaction_id: DbId,
    ) -> AppResult<Option<Interaction>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .interaction
            .clone()
            .filter(|i| i.customer_id == customer_id && i.id == interaction_id))
    }
}

#[async_trait]
impl InteractionPatcher for MockStore {
    async fn apply(
        &self,
        existing: Interaction,
        patch: &InteractionPatch,
    ) -> AppResult<Option<Interaction>> {
        self.patch_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_patch.lock().unwrap() = Some(patch.clone());
        Ok(self.persist_succeeds.then(|| existing.patched(patch)))
    }
}

/// Build the full application router over the given mock collaborators.
pub fn build_test_app(store: Arc<MockStore>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        customers: store.clone(),
        lookup: store.clone(),
        patcher: store,
    };
    build_app_router(state, &config)
}

pub fn interaction_uri(customer_id: &str, interaction_id: &str) -> String {
    format!("/api/Customers/{customer_id}/Interactions/{interaction_id}")
}

/// Send a request with an optional touchpoint header and raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    touchpoint: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(tp) = touchpoint {
        builder = builder.header("TouchpointId", tp);
    }
    let request = builder.body(body.into()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    touchpoint: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, touchpoint, body.to_string()).await
}

pub async fn get(app: Router, uri: &str, touchpoint: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, touchpoint, Body::empty()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
