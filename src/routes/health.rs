// Health check
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::shared::services::AppState;

/// 헬스 체크 응답
/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = HealthResponse)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Active store backend ("postgres" or "memory")
    #[schema(example = "postgres")]
    pub store: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: app_state.store_backend.to_string(),
    })
}
