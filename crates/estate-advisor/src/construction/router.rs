use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::{info, warn};

use super::catalog::CatalogView;
use super::estimator::{CostEstimator, EstimateOutcome, EstimateRequest};

/// Router builder exposing the grade catalogs and the cost estimator.
pub fn construction_router() -> Router {
    Router::new()
        .route("/api/v1/construction/catalog", get(catalog_handler))
        .route("/api/v1/construction/estimate", post(estimate_handler))
}

pub(crate) async fn catalog_handler() -> Response {
    let estimator = CostEstimator::standard();
    let view = CatalogView {
        materials: estimator.materials(),
        labor: estimator.labor(),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn estimate_handler(
    payload: Result<axum::Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "construction estimate payload rejected");
            let outcome = EstimateOutcome::failure(rejection.body_text());
            return (rejection.status(), axum::Json(outcome)).into_response();
        }
    };

    let result = CostEstimator::standard().estimate_request(&request);
    let status = match &result {
        Ok(estimate) => {
            info!(
                area = request.area,
                material = %request.material_grade,
                labor = %request.labor_grade,
                total = estimate.breakdown.total_cost,
                "construction estimate computed"
            );
            StatusCode::OK
        }
        Err(error) => {
            warn!(
                %error,
                material = %request.material_grade,
                labor = %request.labor_grade,
                "construction estimate rejected"
            );
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    (status, axum::Json(EstimateOutcome::from(result))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_estimate(payload: Value) -> (StatusCode, Value) {
        let response = construction_router()
            .oneshot(
                Request::post("/api/v1/construction/estimate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn estimate_route_returns_breakdown() {
        let (status, body) = post_estimate(json!({
            "area": 1000,
            "material_grade": "standard",
            "labor_grade": "basic",
            "duration_days": 90
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["breakdown"]["total_cost"], 4_400_000.0);
        assert_eq!(body["crew_size"], 3.0);
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn estimate_route_flags_invalid_selection() {
        let (status, body) = post_estimate(json!({
            "area": 1000,
            "material_grade": "diamond",
            "labor_grade": "basic",
            "duration_days": 90
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body.get("breakdown").is_none());
    }

    #[tokio::test]
    async fn estimate_route_rejects_zero_duration() {
        let (status, body) = post_estimate(json!({
            "area": 1000,
            "material_grade": "standard",
            "labor_grade": "basic",
            "duration_days": 0
        }))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert!(body.get("breakdown").is_none());
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("duration_days"));
    }

    #[tokio::test]
    async fn estimate_route_wraps_malformed_payloads() {
        let response = construction_router()
            .oneshot(
                Request::post("/api/v1/construction/estimate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"area": "wide", "material_grade": "standard"}"#))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("json payload");

        assert!(status.is_client_error());
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
    }

    #[tokio::test]
    async fn catalog_route_lists_every_grade() {
        let response = catalog_handler().await;
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("json payload");

        assert_eq!(body["materials"].as_array().expect("materials").len(), 4);
        assert_eq!(body["labor"].as_array().expect("labor").len(), 3);
        assert_eq!(body["materials"][0]["id"], "standard");
        assert_eq!(body["labor"][2]["rate_per_day"], 2500.0);
    }
}
