//! API Module
//!
//! HTTP handlers and routing for the cache admin REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Per-kind cache statistics
//! - `GET /caches/:kind/:company/:customer` - Read a cached collection
//! - `PUT /caches/:kind/:company/:customer` - Store a collection
//! - `DELETE /caches/:kind/:company/:customer` - Invalidate one collection
//! - `DELETE /caches/:kind` - Clear one cache
//! - `DELETE /caches` - Clear every cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
