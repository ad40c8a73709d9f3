//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::planner::{JourneyPlanner, PlanError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(list_routes))
        .route("/api/journey/plan", post(plan_journey))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the routes in the current catalog.
async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let routes = state.catalog.snapshot().await;

    Json(routes.iter().map(RouteSummary::from_route).collect())
}

/// Plan a jeepney journey from origin to destination.
async fn plan_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanJourneyRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let routes = state.catalog.snapshot().await;
    let planner = JourneyPlanner::new(state.directions.as_ref(), &routes, &state.config);

    let journey = planner
        .plan_journey(&req.origin, &req.destination)
        .await
        .map_err(AppError::from)?;

    Ok(Json(PlanJourneyResponse {
        journey: journey.as_ref().map(JourneyResult::from_journey),
    }))
}

/// Application error type.
///
/// Planning never fails server-side: gateway and catalog problems degrade
/// to the local fallback or an empty journey, so only bad input is an error.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
