use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

use crate::{
    message::{HealthResponse, TestResponse},
    state::SharedState,
};

pub async fn test_handler() -> Json<TestResponse> {
    Json(TestResponse {
        message: "API is working!".to_string(),
    })
}

// Reports whether the key is present, never the key itself.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        api_key: state.credential_status(),
    })
}
