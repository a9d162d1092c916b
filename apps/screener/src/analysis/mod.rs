// Mock resume analysis: the analyzer seam carried in AppState, the default
// mock backend, the payload it returns, and the HTTP handlers in front of it.
// No document is ever parsed.

pub mod analyzer;
pub mod handlers;
pub mod mock;
pub mod models;

pub use analyzer::{MockAnalyzer, ResumeAnalyzer};
pub use mock::{AnalysisError, SUPPORTED_EXTENSIONS};
pub use models::{AnalysisResult, UploadedFile};
