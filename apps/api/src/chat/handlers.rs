//! Axum route handlers for the AI Assistant chat.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::chat::responder::{classify, Topic, QUICK_QUESTIONS};
use crate::chat::session::{ChatLog, ChatMessage, Sender};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub user_message: ChatMessage,
    pub ai_message: ChatMessage,
    pub topic: Topic,
}

#[derive(Debug, Serialize)]
pub struct QuickQuestionsResponse {
    pub questions: Vec<&'static str>,
}

/// POST /api/v1/chat/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<ChatLog>) {
    let log = state.chats.create().await;
    info!("Chat session {} created", log.id);
    (StatusCode::CREATED, Json(log))
}

/// GET /api/v1/chat/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatLog>, AppError> {
    Ok(Json(state.chats.get(id).await?))
}

/// POST /api/v1/chat/sessions/:id/messages
///
/// Appends the user message, waits on the advisor, then appends the reply.
/// The store lock is released while the advisor is thinking; a second send
/// on the same session during that window is a 409.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let user_message = ChatMessage::new(request.text.clone(), Sender::User);
    state.chats.append(id, user_message.clone()).await?;

    let topic = classify(&request.text);
    debug!("Chat session {id}: question classified as {topic:?}");

    let reply = match state.advisor.reply(&request.text).await {
        Ok(reply) => reply,
        Err(e) => {
            state.chats.cancel_pending(id).await;
            return Err(e);
        }
    };
    let ai_message = ChatMessage::new(reply, Sender::Ai);
    state.chats.append(id, ai_message.clone()).await?;

    Ok(Json(SendMessageResponse {
        user_message,
        ai_message,
        topic,
    }))
}

/// DELETE /api/v1/chat/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.chats.remove(id).await?;
    info!("Chat session {id} closed");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/chat/quick-questions
pub async fn handle_quick_questions() -> Json<QuickQuestionsResponse> {
    Json(QuickQuestionsResponse {
        questions: QUICK_QUESTIONS.to_vec(),
    })
}
