use std::sync::Arc;

use crate::chat::responder::{CannedAdvisor, CareerAdvisor};
use crate::chat::session::ChatStore;
use crate::config::Config;
use crate::interview::handlers::InterviewStore;
use crate::navigation::SessionContext;
use crate::questions::handlers::QuestionStore;
use crate::resume::analyzer::{MockResumeAnalyzer, ResumeAnalyzer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable chat backend. Default: CannedAdvisor with the configured reply delay.
    pub advisor: Arc<dyn CareerAdvisor>,
    /// Pluggable resume backend. Default: MockResumeAnalyzer.
    pub resume_analyzer: Arc<dyn ResumeAnalyzer>,
    pub chats: ChatStore,
    pub questions: QuestionStore,
    pub interviews: InterviewStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            advisor: Arc::new(CannedAdvisor::new(config.chat_reply_delay)),
            resume_analyzer: Arc::new(MockResumeAnalyzer::new(config.resume_analysis_delay)),
            chats: ChatStore::default(),
            questions: QuestionStore::default(),
            interviews: InterviewStore::default(),
            config,
        }
    }

    pub fn session_context(&self) -> SessionContext {
        SessionContext {
            authenticated: self.config.session_authenticated,
        }
    }
}
