//! Resume analyzer seam.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`. `MockResumeAnalyzer` waits
//! a fixed delay to stand in for a parsing service, then returns the fixture.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::resume::models::{mock_analysis, ResumeAnalysis};
use crate::resume::upload::UploadedFile;

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, file: &UploadedFile) -> Result<ResumeAnalysis, AppError>;
}

pub struct MockResumeAnalyzer {
    pub delay: Duration,
}

impl MockResumeAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResumeAnalyzer for MockResumeAnalyzer {
    async fn analyze(&self, file: &UploadedFile) -> Result<ResumeAnalysis, AppError> {
        debug!("Simulating analysis of {} ({})", file.file_name, file.size_display);
        tokio::time::sleep(self.delay).await;
        Ok(mock_analysis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::upload::validate_upload;

    #[tokio::test(start_paused = true)]
    async fn test_mock_analyzer_ignores_content_and_waits() {
        let analyzer = MockResumeAnalyzer::new(Duration::from_secs(3));
        let small = validate_upload("a.pdf", 10, 100).unwrap();
        let large = validate_upload("b.docx", 90, 100).unwrap();

        let start = tokio::time::Instant::now();
        let first = analyzer.analyze(&small).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));

        let second = analyzer.analyze(&large).await.unwrap();
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.keywords.found, second.keywords.found);
    }
}
