//! Interview session state machine.
//!
//! setup (role + level) → in_progress (answer / previous) → completed.
//! Answers live in a sequence parallel to `QUESTIONS`; revisiting a question
//! overwrites only that question's slot.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;

pub const ROLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "UX Designer",
    "Marketing Manager",
    "Sales Representative",
    "Business Analyst",
    "DevOps Engineer",
];

pub const QUESTIONS: &[&str] = &[
    "Tell me about yourself and your background.",
    "Why are you interested in this role?",
    "Describe a challenging project you worked on.",
    "How do you handle tight deadlines?",
    "Where do you see yourself in 5 years?",
];

pub const TIPS: &[&str] = &[
    "Use the STAR method (Situation, Task, Action, Result)",
    "Be specific and provide concrete examples",
    "Take your time to think before answering",
    "Show enthusiasm and passion for the role",
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterviewLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl InterviewLevel {
    pub const ALL: [InterviewLevel; 4] = [
        InterviewLevel::Entry,
        InterviewLevel::Mid,
        InterviewLevel::Senior,
        InterviewLevel::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewLevel::Entry => "entry",
            InterviewLevel::Mid => "mid",
            InterviewLevel::Senior => "senior",
            InterviewLevel::Executive => "executive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterviewLevel::Entry => "Entry Level",
            InterviewLevel::Mid => "Mid Level",
            InterviewLevel::Senior => "Senior Level",
            InterviewLevel::Executive => "Executive Level",
        }
    }
}

impl FromStr for InterviewLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterviewLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown difficulty '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionState {
    Answered,
    Current,
    Upcoming,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    pub id: Uuid,
    pub role: String,
    pub level: InterviewLevel,
    pub status: InterviewStatus,
    pub started_at: DateTime<Utc>,
    current: usize,
    answers: Vec<String>,
}

/// Validates the setup form. Both selections are required.
pub fn validate_setup(role: &str, difficulty: &str) -> Result<(String, InterviewLevel), AppError> {
    let role = role.trim();
    let difficulty = difficulty.trim();
    if role.is_empty() || difficulty.is_empty() {
        return Err(AppError::Validation(
            "role and difficulty must both be selected".to_string(),
        ));
    }
    if !ROLES.contains(&role) {
        return Err(AppError::Validation(format!("unknown role '{role}'")));
    }
    let level = difficulty.parse::<InterviewLevel>().map_err(AppError::Validation)?;
    Ok((role.to_string(), level))
}

impl InterviewSession {
    pub fn start(role: String, level: InterviewLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            level,
            status: InterviewStatus::InProgress,
            started_at: Utc::now(),
            current: 0,
            answers: Vec::new(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static str {
        QUESTIONS[self.current]
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Stored answer for the current question, if it was answered before.
    pub fn current_draft(&self) -> Option<&str> {
        self.answers.get(self.current).map(String::as_str)
    }

    /// Share of questions before the current one; stays at the last
    /// question's value once the session completes.
    pub fn progress_percent(&self) -> f64 {
        self.current as f64 / QUESTIONS.len() as f64 * 100.0
    }

    pub fn question_states(&self) -> Vec<QuestionState> {
        (0..QUESTIONS.len())
            .map(|i| {
                if self.status == InterviewStatus::Completed || i < self.current {
                    QuestionState::Answered
                } else if i == self.current {
                    QuestionState::Current
                } else {
                    QuestionState::Upcoming
                }
            })
            .collect()
    }

    /// Records the answer for the current question and advances.
    /// The last answer completes the session.
    pub fn submit_answer(&mut self, answer: &str) -> Result<(), AppError> {
        self.ensure_in_progress()?;
        if answer.trim().is_empty() {
            return Err(AppError::Validation("answer cannot be empty".to_string()));
        }

        if self.current < self.answers.len() {
            self.answers[self.current] = answer.to_string();
        } else {
            self.answers.push(answer.to_string());
        }

        if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
        } else {
            self.status = InterviewStatus::Completed;
        }
        Ok(())
    }

    /// Steps back one question and returns the answer stored there.
    pub fn previous(&mut self) -> Result<Option<&str>, AppError> {
        self.ensure_in_progress()?;
        if self.current == 0 {
            return Err(AppError::Validation(
                "already at the first question".to_string(),
            ));
        }
        self.current -= 1;
        Ok(self.current_draft())
    }

    fn ensure_in_progress(&self) -> Result<(), AppError> {
        match self.status {
            InterviewStatus::InProgress => Ok(()),
            InterviewStatus::Completed => Err(AppError::Conflict(format!(
                "Interview {} is already complete",
                self.id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> InterviewSession {
        InterviewSession::start("Software Engineer".to_string(), InterviewLevel::Mid)
    }

    #[test]
    fn test_setup_requires_both_fields() {
        assert!(matches!(
            validate_setup("", "mid"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_setup("Software Engineer", "  "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_setup_rejects_unknown_values() {
        assert!(validate_setup("Astronaut", "mid").is_err());
        assert!(validate_setup("Software Engineer", "intern").is_err());
    }

    #[test]
    fn test_setup_accepts_executive_level() {
        let (role, level) = validate_setup("DevOps Engineer", "executive").unwrap();
        assert_eq!(role, "DevOps Engineer");
        assert_eq!(level, InterviewLevel::Executive);
    }

    #[test]
    fn test_start_is_at_first_question() {
        let session = started();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question(), QUESTIONS[0]);
        assert!(session.answers().is_empty());
        assert_eq!(session.progress_percent(), 0.0);
    }

    #[test]
    fn test_blank_answer_does_not_advance() {
        let mut session = started();
        assert!(session.submit_answer("   ").is_err());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_answers_advance_and_complete() {
        let mut session = started();
        for i in 0..QUESTIONS.len() {
            session.submit_answer(&format!("answer {i}")).unwrap();
        }
        assert_eq!(session.status, InterviewStatus::Completed);
        assert_eq!(session.answers().len(), QUESTIONS.len());
        assert!((session.progress_percent() - 80.0).abs() < 1e-9);
        assert!(session
            .question_states()
            .iter()
            .all(|s| *s == QuestionState::Answered));
    }

    #[test]
    fn test_completed_session_rejects_changes() {
        let mut session = started();
        for _ in 0..QUESTIONS.len() {
            session.submit_answer("done").unwrap();
        }
        assert!(matches!(
            session.submit_answer("again"),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(session.previous(), Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_previous_restores_stored_answer() {
        let mut session = started();
        session.submit_answer("first").unwrap();
        session.submit_answer("second").unwrap();
        assert_eq!(session.previous().unwrap(), Some("second"));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_previous_at_start_is_rejected() {
        let mut session = started();
        assert!(matches!(session.previous(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_revisit_overwrites_only_that_slot() {
        let mut session = started();
        session.submit_answer("a").unwrap();
        session.submit_answer("b").unwrap();
        session.previous().unwrap();
        session.previous().unwrap();
        session.submit_answer("A").unwrap();
        assert_eq!(session.answers(), &["A".to_string(), "b".to_string()]);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_progress_and_question_states_mid_session() {
        let mut session = started();
        session.submit_answer("x").unwrap();
        session.submit_answer("y").unwrap();
        assert!((session.progress_percent() - 40.0).abs() < f64::EPSILON);
        assert_eq!(
            session.question_states(),
            vec![
                QuestionState::Answered,
                QuestionState::Answered,
                QuestionState::Current,
                QuestionState::Upcoming,
                QuestionState::Upcoming,
            ]
        );
    }
}
