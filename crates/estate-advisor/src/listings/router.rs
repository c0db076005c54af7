use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{PropertyFilter, PropertyId, UserId};
use super::repository::{FavoritesStore, PropertyRepository, RepositoryError};
use super::service::{ListingService, ListingServiceError};
use crate::recommendations::ScoredProperty;

/// Router builder exposing listing search, favorites, and recommendation endpoints.
pub fn listing_router<P, F>(service: Arc<ListingService<P, F>>) -> Router
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    Router::new()
        .route("/api/v1/properties", get(search_handler::<P, F>))
        .route(
            "/api/v1/properties/:property_id",
            get(property_handler::<P, F>),
        )
        .route(
            "/api/v1/users/:user_id/favorites",
            get(favorites_handler::<P, F>).post(add_favorite_handler::<P, F>),
        )
        .route(
            "/api/v1/users/:user_id/favorites/:property_id",
            get(check_favorite_handler::<P, F>).delete(remove_favorite_handler::<P, F>),
        )
        .route(
            "/api/v1/users/:user_id/recommendations",
            get(recommendations_handler::<P, F>),
        )
        .with_state(service)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub property_id: PropertyId,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsView {
    pub user_id: UserId,
    pub recommendations: Vec<ScoredProperty>,
}

pub(crate) async fn search_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Query(filter): Query<PropertyFilter>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    match service.search(&filter) {
        Ok(properties) => (StatusCode::OK, axum::Json(properties)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn property_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Path(property_id): Path<String>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    match service.get(&PropertyId(property_id)) {
        Ok(property) => (StatusCode::OK, axum::Json(property)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn favorites_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    match service.favorites(&UserId(user_id)) {
        Ok(properties) => (StatusCode::OK, axum::Json(properties)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_favorite_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<FavoriteRequest>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    match service.add_favorite(&UserId(user_id), &request.property_id) {
        Ok(property) => (StatusCode::CREATED, axum::Json(property)).into_response(),
        Err(ListingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "property already in favorites" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn check_favorite_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Path((user_id, property_id)): Path<(String, String)>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    match service.is_favorite(&UserId(user_id), &PropertyId(property_id)) {
        Ok(is_favorite) => {
            (StatusCode::OK, axum::Json(json!({ "is_favorite": is_favorite }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn remove_favorite_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Path((user_id, property_id)): Path<(String, String)>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    match service.remove_favorite(&UserId(user_id), &PropertyId(property_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<P, F>(
    State(service): State<Arc<ListingService<P, F>>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: PropertyRepository + 'static,
    F: FavoritesStore + 'static,
{
    let user_id = UserId(user_id);
    match service.recommendations(&user_id) {
        Ok(recommendations) => {
            let view = RecommendationsView {
                user_id,
                recommendations,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: ListingServiceError) -> Response {
    let status = match &error {
        ListingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ListingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ListingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
