use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use estate_advisor::assistant::assistant_router;
use estate_advisor::construction::construction_router;
use estate_advisor::listings::{
    listing_router, FavoritesStore, ListingService, PropertyRepository,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_advisor_routes<P, F>(service: Arc<ListingService<P, F>>) -> axum::Router
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    listing_router(service)
        .merge(construction_router())
        .merge(assistant_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
