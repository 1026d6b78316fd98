//! Axum route handlers for the Question Bank.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::questions::filter::{filter_questions, QuestionFilter, Selector};
use crate::questions::fixtures::{category_facets, seed_questions, ROLES};
use crate::questions::models::{BankQuestion, CategoryFacet, Difficulty, LabeledOption};
use crate::state::AppState;

/// In-memory copy of the bank. Only the `saved` flags change, and only
/// for the lifetime of the process.
#[derive(Clone)]
pub struct QuestionStore {
    questions: Arc<RwLock<Vec<BankQuestion>>>,
}

impl QuestionStore {
    pub fn new(questions: Vec<BankQuestion>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }

    pub async fn search(&self, filter: &QuestionFilter) -> Vec<BankQuestion> {
        filter_questions(&self.questions.read().await, filter)
    }

    pub async fn set_saved(&self, id: u32, saved: bool) -> Result<BankQuestion, AppError> {
        let mut questions = self.questions.write().await;
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))?;
        question.saved = saved;
        Ok(question.clone())
    }
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new(seed_questions())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct QuestionQuery {
    pub q: Option<String>,
    pub role: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl QuestionQuery {
    pub fn into_filter(self) -> Result<QuestionFilter, AppError> {
        Ok(QuestionFilter {
            query: self.q.unwrap_or_default(),
            role: Selector::from_label(self.role.as_deref()),
            difficulty: Selector::parse(self.difficulty.as_deref())
                .map_err(AppError::Validation)?,
            category: Selector::parse(self.category.as_deref()).map_err(AppError::Validation)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<BankQuestion>,
    pub total: usize,
    pub no_matches: bool,
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub categories: Vec<CategoryFacet>,
    pub roles: Vec<&'static str>,
    pub difficulties: Vec<LabeledOption>,
}

#[derive(Debug, Deserialize)]
pub struct SavedToggle {
    pub saved: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionQuery>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let filter = params.into_filter()?;
    let questions = state.questions.search(&filter).await;
    let total = questions.len();
    Ok(Json(QuestionListResponse {
        questions,
        total,
        no_matches: total == 0,
    }))
}

/// GET /api/v1/questions/facets
pub async fn handle_facets() -> Json<FacetsResponse> {
    Json(FacetsResponse {
        categories: category_facets(),
        roles: ROLES.to_vec(),
        difficulties: Difficulty::ALL
            .iter()
            .map(|d| LabeledOption {
                value: d.as_str(),
                label: d.label(),
            })
            .collect(),
    })
}

/// PATCH /api/v1/questions/:id/saved
pub async fn handle_set_saved(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<SavedToggle>,
) -> Result<Json<BankQuestion>, AppError> {
    let question = state.questions.set_saved(id, req.saved).await?;
    info!("Question {id} saved={}", question.saved);
    Ok(Json(question))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_default_to_all() {
        let filter = QuestionQuery::default().into_filter().unwrap();
        assert_eq!(filter.role, Selector::All);
        assert_eq!(filter.difficulty, Selector::All);
        assert_eq!(filter.category, Selector::All);
        assert!(filter.query.is_empty());
    }

    #[test]
    fn test_unknown_difficulty_is_validation_error() {
        let params = QuestionQuery {
            difficulty: Some("legendary".to_string()),
            ..Default::default()
        };
        assert!(matches!(params.into_filter(), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_set_saved_toggles_in_memory_copy() {
        let store = QuestionStore::default();
        let updated = store.set_saved(1, true).await.unwrap();
        assert!(updated.saved);

        let all = store.search(&QuestionFilter::default()).await;
        assert!(all.iter().find(|q| q.id == 1).unwrap().saved);
    }

    #[tokio::test]
    async fn test_set_saved_unknown_id_is_not_found() {
        let store = QuestionStore::default();
        assert!(matches!(
            store.set_saved(99, true).await,
            Err(AppError::NotFound(_))
        ));
    }
}
