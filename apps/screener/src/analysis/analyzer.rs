//! Resume analyzer — pluggable, trait-based backend behind `POST /api/analyze`.
//!
//! Default: `MockAnalyzer` (fixed payload, no parsing, no network).
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, chosen at startup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analysis::mock::{analyze_resume, AnalysisError};
use crate::analysis::models::{AnalysisResult, UploadedFile};

// ────────────────────────────────────────────────────────────────────────────
// Clock
// ────────────────────────────────────────────────────────────────────────────

/// Source of `upload_time`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the analysis backend without touching the route
/// or handler code.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, file: Option<&UploadedFile>) -> Result<AnalysisResult, AnalysisError>;

    /// Short label reported by `/api/info` and in logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MockAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct MockAnalyzer {
    clock: Arc<dyn Clock>,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeAnalyzer for MockAnalyzer {
    async fn analyze(&self, file: Option<&UploadedFile>) -> Result<AnalysisResult, AnalysisError> {
        analyze_resume(file, self.clock.now())
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[tokio::test]
    async fn test_mock_analyzer_uses_injected_clock() {
        let at = Utc.with_ymd_and_hms(2023, 11, 5, 8, 15, 0).unwrap();
        let analyzer = MockAnalyzer::with_clock(Arc::new(FixedClock(at)));
        let file = UploadedFile::new(Some("bob.doc".to_string()), Bytes::new());

        let result = analyzer.analyze(Some(&file)).await.unwrap();
        assert_eq!(result.upload_time, at);
        assert_eq!(result.filename, "bob.doc");
    }

    #[tokio::test]
    async fn test_mock_analyzer_missing_upload() {
        let analyzer = MockAnalyzer::new();
        let err = analyzer.analyze(None).await.unwrap_err();
        assert_eq!(err, AnalysisError::MissingUpload);
    }

    #[tokio::test]
    async fn test_upload_time_non_decreasing() {
        let analyzer = MockAnalyzer::new();
        let file = UploadedFile::new(None, Bytes::new());
        let first = analyzer.analyze(Some(&file)).await.unwrap();
        let second = analyzer.analyze(Some(&file)).await.unwrap();
        assert!(second.upload_time >= first.upload_time);
    }

    #[test]
    fn test_backend_label_is_mock() {
        assert_eq!(MockAnalyzer::default().backend(), "mock");
    }
}
