// Demo page served at `GET /`.
// The page posts the chosen file to `/api/analyze` and prints the JSON reply.

use askama::Template;
use axum::response::Html;

use crate::analysis::SUPPORTED_EXTENSIONS;
use crate::errors::AppError;

pub const TITLE: &str = "Resume Screening Agent — Live Demo (Mock)";

pub const DESCRIPTION: &str = "Upload a resume (PDF/DOC/DOCX). This demo returns a simulated \
    analysis and scoring; real AI analysis requires backend/OpenAI integration.";

#[derive(Template)]
#[template(path = "page.html")]
pub struct DemoPage<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Value for the file input's `accept` attribute.
    pub accept: String,
}

impl Default for DemoPage<'static> {
    fn default() -> Self {
        Self {
            title: TITLE,
            description: DESCRIPTION,
            accept: accept_attribute(),
        }
    }
}

/// `.pdf,.doc,.docx`
pub fn accept_attribute() -> String {
    SUPPORTED_EXTENSIONS.join(",")
}

/// GET /
pub async fn page_handler() -> Result<Html<String>, AppError> {
    let page = DemoPage::default()
        .render()
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Html(page))
}
