//! Response Selector — maps a free-text career question to a canned answer.
//!
//! Triggers are checked in a fixed priority order against the lower-cased
//! query; the first hit wins. Anything else gets the generic fallback.
//!
//! `AppState` holds an `Arc<dyn CareerAdvisor>`. The default `CannedAdvisor`
//! waits a fixed delay before answering to stand in for a backend round trip.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;

pub const RESUME_RESPONSE: &str = "For a strong resume, focus on quantifiable achievements, use action verbs, and tailor it to each job. Include relevant skills, keep it concise (1-2 pages), and ensure consistent formatting.";
pub const INTERVIEW_RESPONSE: &str = "For interviews: Research the company thoroughly, practice STAR method for behavioral questions, prepare thoughtful questions to ask, dress appropriately, and arrive early. Remember to show enthusiasm and be authentic!";
pub const SALARY_RESPONSE: &str = "When negotiating salary, research market rates, consider your experience level, and factor in benefits. It's often best to let the employer make the first offer, then negotiate based on your value proposition.";
pub const SKILL_RESPONSE: &str = "Focus on developing both technical and soft skills relevant to your field. Stay updated with industry trends, consider online courses, and practice hands-on projects to demonstrate your abilities.";
pub const JOB_SEARCH_RESPONSE: &str = "Effective job searching involves networking, optimizing your LinkedIn profile, applying to relevant positions, following up professionally, and maintaining a consistent application routine.";
pub const FALLBACK_RESPONSE: &str = "That's a great question! For career guidance, I recommend focusing on your strengths, setting clear goals, networking actively, and continuously learning. Feel free to ask more specific questions about interviews, resumes, or career development!";

pub const GREETING: &str = "Hello! I'm your AI career assistant. Ask me anything about interviews, career advice, resume tips, or job search strategies!";

/// Trigger keyword → topic → canned response, in priority order.
const TRIGGERS: &[(&str, Topic, &str)] = &[
    ("resume", Topic::Resume, RESUME_RESPONSE),
    ("interview", Topic::Interview, INTERVIEW_RESPONSE),
    ("salary", Topic::Salary, SALARY_RESPONSE),
    ("skill", Topic::Skill, SKILL_RESPONSE),
    ("job search", Topic::JobSearch, JOB_SEARCH_RESPONSE),
];

pub const QUICK_QUESTIONS: &[&str] = &[
    "How to write a good resume?",
    "Tips for job interviews",
    "How to negotiate salary?",
    "What skills should I develop?",
    "Job search strategies",
    "How to prepare for behavioral questions?",
];

/// Which trigger (if any) selected a response. Surfaced to clients for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Resume,
    Interview,
    Salary,
    Skill,
    JobSearch,
    General,
}

/// Returns the canned response for `query`. Total over all inputs.
pub fn select_response(query: &str) -> &'static str {
    match_trigger(query).1
}

pub fn classify(query: &str) -> Topic {
    match_trigger(query).0
}

fn match_trigger(query: &str) -> (Topic, &'static str) {
    let lower = query.to_lowercase();
    TRIGGERS
        .iter()
        .find(|(keyword, _, _)| lower.contains(keyword))
        .map(|(_, topic, response)| (*topic, *response))
        .unwrap_or((Topic::General, FALLBACK_RESPONSE))
}

/// The advisor trait. Implement this to swap the canned table for a real
/// model without touching the chat handlers.
#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    async fn reply(&self, question: &str) -> Result<String, AppError>;
}

/// Lookup-table advisor with a fixed simulated processing delay.
pub struct CannedAdvisor {
    pub delay: Duration,
}

impl CannedAdvisor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CareerAdvisor for CannedAdvisor {
    async fn reply(&self, question: &str) -> Result<String, AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(select_response(question).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_keyword_selects_resume_response() {
        assert_eq!(select_response("How do I fix my resume?"), RESUME_RESPONSE);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(select_response("RESUME help"), RESUME_RESPONSE);
        assert_eq!(select_response("Salary Negotiation"), SALARY_RESPONSE);
    }

    #[test]
    fn test_resume_takes_priority_over_later_triggers() {
        // interview appears first in the text but resume ranks higher
        let query = "interview tips and salary advice for my resume";
        assert_eq!(select_response(query), RESUME_RESPONSE);
    }

    #[test]
    fn test_priority_order_below_resume() {
        assert_eq!(
            select_response("salary questions in an interview"),
            INTERVIEW_RESPONSE
        );
        assert_eq!(select_response("skills that raise salary"), SALARY_RESPONSE);
        assert_eq!(select_response("skill building during job search"), SKILL_RESPONSE);
    }

    #[test]
    fn test_job_search_requires_the_full_phrase() {
        assert_eq!(select_response("Job search strategies"), JOB_SEARCH_RESPONSE);
        assert_eq!(select_response("Looking for a job"), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_no_trigger_returns_fallback() {
        for query in ["", "   ", "hello there", "career change advice"] {
            assert_eq!(select_response(query), FALLBACK_RESPONSE, "query: {query:?}");
        }
    }

    #[test]
    fn test_skill_matches_as_substring() {
        assert_eq!(select_response("What skillset matters?"), SKILL_RESPONSE);
    }

    #[test]
    fn test_quick_questions_hit_expected_topics() {
        let topics: Vec<Topic> = QUICK_QUESTIONS.iter().map(|q| classify(q)).collect();
        assert_eq!(
            topics,
            vec![
                Topic::Resume,
                Topic::Interview,
                Topic::Salary,
                Topic::Skill,
                Topic::JobSearch,
                Topic::General,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_canned_advisor_waits_for_delay() {
        let advisor = CannedAdvisor::new(Duration::from_millis(1000));
        let start = tokio::time::Instant::now();
        let reply = advisor.reply("negotiate my salary").await.unwrap();
        assert_eq!(reply, SALARY_RESPONSE);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
