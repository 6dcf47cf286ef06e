use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;

    tracing::info!(
        user_message = payload.message.as_deref().unwrap_or_default(),
        "Chat request received"
    );

    let message = payload
        .message
        .filter(|m| !m.is_empty())
        .ok_or(AppError::MissingMessage)?;

    let provider = state.provider.as_deref().ok_or(AppError::MissingApiKey)?;

    match generate_reply(provider, &message).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(err) => {
            tracing::error!(
                provider = provider.name(),
                kind = err.kind(),
                error = %err,
                "Chat error"
            );
            Err(err.into())
        }
    }
}
