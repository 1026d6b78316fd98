//! Axum route handlers for the Mock Interview.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::{
    validate_setup, InterviewLevel, InterviewSession, InterviewStatus, QuestionState, QUESTIONS,
    ROLES, TIPS,
};
use crate::questions::models::LabeledOption;
use crate::state::AppState;

/// Live interview sessions keyed by id. Exit or restart drops them.
#[derive(Clone, Default)]
pub struct InterviewStore {
    sessions: Arc<RwLock<HashMap<Uuid, InterviewSession>>>,
}

impl InterviewStore {
    pub async fn insert(&self, session: InterviewSession) {
        self.sessions.write().await.insert(session.id, session);
    }

    pub async fn get(&self, id: Uuid) -> Result<InterviewSession, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Runs `f` against the stored session and returns the updated copy.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Result<InterviewSession, AppError>
    where
        F: FnOnce(&mut InterviewSession) -> Result<(), AppError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        f(session)?;
        Ok(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Interview {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewOptionsResponse {
    pub roles: Vec<&'static str>,
    pub difficulties: Vec<LabeledOption>,
    pub question_count: usize,
    pub tips: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct InterviewView {
    pub id: Uuid,
    pub role: String,
    pub difficulty: InterviewLevel,
    pub status: InterviewStatus,
    pub started_at: DateTime<Utc>,
    pub question_number: usize,
    pub total_questions: usize,
    pub current_question: Option<&'static str>,
    pub draft_answer: Option<String>,
    pub progress_percent: f64,
    pub question_states: Vec<QuestionState>,
    pub answers: Vec<String>,
}

impl From<&InterviewSession> for InterviewView {
    fn from(session: &InterviewSession) -> Self {
        let completed = session.status == InterviewStatus::Completed;
        Self {
            id: session.id,
            role: session.role.clone(),
            difficulty: session.level,
            status: session.status,
            started_at: session.started_at,
            question_number: session.current_index() + 1,
            total_questions: QUESTIONS.len(),
            current_question: (!completed).then(|| session.current_question()),
            draft_answer: session.current_draft().map(str::to_string),
            progress_percent: session.progress_percent(),
            question_states: session.question_states(),
            answers: session.answers().to_vec(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/interviews/options
pub async fn handle_options() -> Json<InterviewOptionsResponse> {
    Json(InterviewOptionsResponse {
        roles: ROLES.to_vec(),
        difficulties: InterviewLevel::ALL
            .iter()
            .map(|l| LabeledOption {
                value: l.as_str(),
                label: l.label(),
            })
            .collect(),
        question_count: QUESTIONS.len(),
        tips: TIPS.to_vec(),
    })
}

/// POST /api/v1/interviews
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewView>), AppError> {
    let (role, level) = validate_setup(&req.role, &req.difficulty)?;
    let session = InterviewSession::start(role, level);
    let view = InterviewView::from(&session);
    info!(
        "Interview {} started ({} / {})",
        session.id,
        session.role,
        session.level.as_str()
    );
    state.interviews.insert(session).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    let session = state.interviews.get(id).await?;
    Ok(Json(InterviewView::from(&session)))
}

/// POST /api/v1/interviews/:id/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<InterviewView>, AppError> {
    let session = state
        .interviews
        .update(id, |s| s.submit_answer(&req.answer))
        .await?;
    if session.status == InterviewStatus::Completed {
        info!(
            "Interview {id} complete with {} answers",
            session.answers().len()
        );
    }
    Ok(Json(InterviewView::from(&session)))
}

/// POST /api/v1/interviews/:id/previous
pub async fn handle_previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    let session = state
        .interviews
        .update(id, |s| s.previous().map(|_| ()))
        .await?;
    Ok(Json(InterviewView::from(&session)))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_exit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.interviews.remove(id).await?;
    info!("Interview {id} exited");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_persists_mutation() {
        let store = InterviewStore::default();
        let session = InterviewSession::start("UX Designer".to_string(), InterviewLevel::Entry);
        let id = session.id;
        store.insert(session).await;

        store.update(id, |s| s.submit_answer("hello")).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().current_index(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_session_unchanged() {
        let store = InterviewStore::default();
        let session = InterviewSession::start("UX Designer".to_string(), InterviewLevel::Entry);
        let id = session.id;
        store.insert(session).await;

        assert!(store.update(id, |s| s.submit_answer("")).await.is_err());
        assert_eq!(store.get(id).await.unwrap().current_index(), 0);
    }

    #[tokio::test]
    async fn test_remove_then_get_is_not_found() {
        let store = InterviewStore::default();
        let session = InterviewSession::start("UX Designer".to_string(), InterviewLevel::Mid);
        let id = session.id;
        store.insert(session).await;
        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_view_of_completed_session_has_no_current_question() {
        let mut session =
            InterviewSession::start("Data Scientist".to_string(), InterviewLevel::Senior);
        for _ in 0..QUESTIONS.len() {
            session.submit_answer("ok").unwrap();
        }
        let view = InterviewView::from(&session);
        assert!(view.current_question.is_none());
        assert_eq!(view.answers.len(), QUESTIONS.len());
    }
}
