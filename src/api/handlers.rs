//! API Handlers
//!
//! HTTP request handlers for inspecting and administering the caches.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{CacheError, Result};
use crate::models::{
    GetItemsResponse, HealthResponse, MessageResponse, SetItemsRequest, StatsResponse,
};
use crate::registry::{CacheKind, CacheRegistry, SharedCache};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Per-kind collection caches
    pub caches: CacheRegistry,
}

impl AppState {
    /// Creates a new AppState around an existing registry.
    pub fn new(caches: CacheRegistry) -> Self {
        Self { caches }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if a configured TTL is below one minute.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(CacheRegistry::from_config(config)?))
    }
}

type ItemPath = Path<(String, String, String)>;

// == Generic cache operations ==

async fn lookup<T: Serialize>(
    cache: &SharedCache<T>,
    kind: CacheKind,
    company: String,
    customer: String,
) -> Result<Response> {
    let items = cache
        .write()
        .await
        .get(&company, &customer)?
        .ok_or_else(|| {
            CacheError::NotFound(format!("no {} cached for {}/{}", kind, company, customer))
        })?;

    let body = GetItemsResponse {
        kind,
        company,
        customer,
        items: &items[..],
    };
    Ok(Json(body).into_response())
}

async fn store<T: DeserializeOwned>(
    cache: &SharedCache<T>,
    kind: CacheKind,
    company: &str,
    customer: &str,
    body: Value,
) -> Result<MessageResponse> {
    let req: SetItemsRequest<T> = serde_json::from_value(body)
        .map_err(|e| CacheError::InvalidArgument(format!("invalid {} body: {}", kind, e)))?;

    let count = req.items.len();
    cache.write().await.set(company, customer, req.items)?;

    Ok(MessageResponse::stored(kind, company, customer, count))
}

async fn invalidate<T>(
    cache: &SharedCache<T>,
    kind: CacheKind,
    company: &str,
    customer: &str,
) -> Result<MessageResponse> {
    if cache.write().await.remove(company, customer)? {
        Ok(MessageResponse::removed(kind, company, customer))
    } else {
        Err(CacheError::NotFound(format!(
            "no {} cached for {}/{}",
            kind, company, customer
        )))
    }
}

// == Handlers ==

/// Handler for GET /caches/:kind/:company/:customer
///
/// Returns the live collection, or 404 when absent or expired.
pub async fn get_items_handler(
    State(state): State<AppState>,
    Path((kind, company, customer)): ItemPath,
) -> Result<Response> {
    let kind: CacheKind = kind.parse()?;
    let caches = &state.caches;

    match kind {
        CacheKind::Documents => lookup(&caches.documents, kind, company, customer).await,
        CacheKind::Folders => lookup(&caches.folders, kind, company, customer).await,
        CacheKind::Quotes => lookup(&caches.quotes, kind, company, customer).await,
        CacheKind::Orders => lookup(&caches.orders, kind, company, customer).await,
        CacheKind::RecentlyPurchased => {
            lookup(&caches.recently_purchased, kind, company, customer).await
        }
    }
}

/// Handler for PUT /caches/:kind/:company/:customer
///
/// Replaces the customer's collection with `items` from the body.
///
/// The kind is resolved before the body, so an unknown kind is a 404 even
/// when the body is also bad. Body extraction failures (malformed JSON,
/// missing content type) come back as a 400 with the usual JSON error.
pub async fn set_items_handler(
    State(state): State<AppState>,
    Path((kind, company, customer)): ItemPath,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let kind: CacheKind = kind.parse()?;
    let Json(body) = body.map_err(|e| CacheError::InvalidArgument(e.body_text()))?;
    let caches = &state.caches;
    let (company, customer) = (company.as_str(), customer.as_str());

    let response = match kind {
        CacheKind::Documents => store(&caches.documents, kind, company, customer, body).await,
        CacheKind::Folders => store(&caches.folders, kind, company, customer, body).await,
        CacheKind::Quotes => store(&caches.quotes, kind, company, customer, body).await,
        CacheKind::Orders => store(&caches.orders, kind, company, customer, body).await,
        CacheKind::RecentlyPurchased => {
            store(&caches.recently_purchased, kind, company, customer, body).await
        }
    }?;

    Ok(Json(response))
}

/// Handler for DELETE /caches/:kind/:company/:customer
pub async fn remove_items_handler(
    State(state): State<AppState>,
    Path((kind, company, customer)): ItemPath,
) -> Result<Json<MessageResponse>> {
    let kind: CacheKind = kind.parse()?;
    let caches = &state.caches;
    let (company, customer) = (company.as_str(), customer.as_str());

    let response = match kind {
        CacheKind::Documents => invalidate(&caches.documents, kind, company, customer).await,
        CacheKind::Folders => invalidate(&caches.folders, kind, company, customer).await,
        CacheKind::Quotes => invalidate(&caches.quotes, kind, company, customer).await,
        CacheKind::Orders => invalidate(&caches.orders, kind, company, customer).await,
        CacheKind::RecentlyPurchased => {
            invalidate(&caches.recently_purchased, kind, company, customer).await
        }
    }?;

    Ok(Json(response))
}

/// Handler for DELETE /caches/:kind
///
/// Forced refresh of one entity kind.
pub async fn clear_kind_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<MessageResponse>> {
    let kind: CacheKind = kind.parse()?;
    state.caches.clear(kind).await;
    Ok(Json(MessageResponse::cleared(&[kind])))
}

/// Handler for DELETE /caches
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.caches.clear_all().await;
    Json(MessageResponse::cleared(&CacheKind::ALL))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        caches: state.caches.stats().await,
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
