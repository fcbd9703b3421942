//! Routing module for the e-commerce application

pub mod health;
pub mod request_id;

use crate::shop::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use request_id::UuidRequestId;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let request_id = req
            .headers()
            .get(request_id::HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        tracing::debug!(%method, %uri, %request_id, "Request received");
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, %request_id, status = %res.status(), "Request failed");
        }
        res
    });

    // Middleware: CORS (Permissive, any origin may call the API)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::products::routes())
        .merge(crate::cart::routes())
        .merge(crate::orders::routes())
        .merge(health::routes())
        .layer(log_layer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
        .layer(cors_layer)
        .with_state(state)
}
