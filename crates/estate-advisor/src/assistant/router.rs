use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::PropertyAssistant;

#[derive(Debug, Deserialize)]
pub struct AssistantQuery {
    pub query: String,
}

pub fn assistant_router() -> Router {
    Router::new()
        .route("/api/v1/assistant/reply", post(reply_handler))
        .route("/api/v1/assistant/suggestions", get(suggestions_handler))
}

pub(crate) async fn reply_handler(Json(payload): Json<AssistantQuery>) -> Response {
    if payload.query.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "query must not be empty" })),
        )
            .into_response();
    }

    let reply = PropertyAssistant::reply(&payload.query);
    debug!(topic = reply.topic.label(), subtopic = ?reply.subtopic, "assistant replied");
    (StatusCode::OK, Json(reply)).into_response()
}

pub(crate) async fn suggestions_handler() -> Response {
    (StatusCode::OK, Json(PropertyAssistant::suggestions())).into_response()
}
