//! The mock analysis. Every field except `filename` and `upload_time` is a
//! constant; the uploaded bytes are never inspected.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::analysis::models::{AnalysisResult, Scores, UploadedFile};

/// Extensions offered by the upload widget. Only the widget's `accept` list
/// reads this; `analyze_resume` does not validate against it.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

/// Filename used when the upload carried no name.
pub const FALLBACK_FILENAME: &str = "upload";

pub const SKILLS_EXTRACTED: [&str; 3] = ["JavaScript", "React", "TypeScript"];
pub const EXPERIENCE_YEARS: u32 = 3;
pub const SCORES: Scores = Scores {
    skills_match: 0.82,
    knowledge_depth: 0.75,
    experience_relevance: 0.67,
};
pub const SUMMARY: &str =
    "Candidate looks promising — strengths in React + TypeScript, moderate backend exposure.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No file uploaded")]
    MissingUpload,
}

pub fn analyze_resume(
    file: Option<&UploadedFile>,
    now: DateTime<Utc>,
) -> Result<AnalysisResult, AnalysisError> {
    let file = file.ok_or(AnalysisError::MissingUpload)?;

    let filename = file
        .name
        .clone()
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string());

    Ok(AnalysisResult {
        filename,
        upload_time: now,
        skills_extracted: SKILLS_EXTRACTED.iter().map(|s| s.to_string()).collect(),
        experience_years: EXPERIENCE_YEARS,
        scores: SCORES,
        summary: SUMMARY.to_string(),
    })
}
