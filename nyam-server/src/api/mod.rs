//! API routing
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`categories`] / [`products`] / [`clients`] / [`reservations`] /
//!   [`orders`] - insert endpoints, one per table
//! - [`products`] also serves the product list for the order form
//! - [`reports`] - the fixed menu of eight read queries
//! - [`random`] - demo-data pre-fill payloads for the forms

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod categories;
pub mod clients;
pub mod health;
pub mod orders;
pub mod products;
pub mod random;
pub mod reports;
pub mod reservations;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Insert API, one endpoint per table
        .merge(categories::router())
        .merge(clients::router())
        .merge(products::router())
        .merge(reservations::router())
        .merge(orders::router())
        // Canned read queries
        .merge(reports::router())
        // Demo-data pre-fill
        .merge(random::router())
        // Health API - public route
        .merge(health::router())
        // Server-rendered pages and the forms bundle
        .merge(crate::web::router())
}

/// Build a fully configured application with all middleware and state.
///
/// Used by both the HTTP server and the in-process integration tests.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Gzip compress responses
        .layer(CompressionLayer::new())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Generate a unique ID per request and echo it back
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state.clone())
}
