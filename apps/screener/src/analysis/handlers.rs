use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::analysis::{AnalysisResult, UploadedFile, SUPPORTED_EXTENSIONS};
use crate::errors::AppError;
use crate::state::AppState;
use crate::ui;

/// Form field carrying the resume.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub title: &'static str,
    pub description: &'static str,
    pub supported_extensions: Vec<&'static str>,
    pub analyzer: &'static str,
}

/// POST /api/analyze
///
/// Success returns the bare `AnalysisResult`; a missing upload returns
/// `{"error": "No file uploaded"}`. A request that is not multipart at all
/// carries no file.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Option<Multipart>,
) -> Result<Json<AnalysisResult>, AppError> {
    let limit = state.config.max_upload_bytes;
    let file = match multipart {
        Some(multipart) => read_upload(multipart)
            .await
            .map_err(|e| multipart_error(e, limit))?,
        None => None,
    };

    let result = state.analyzer.analyze(file.as_ref()).await;
    match (&result, &file) {
        (Ok(analysis), Some(f)) => tracing::info!(
            filename = %analysis.filename,
            bytes = f.len(),
            content_type = f.content_type.as_deref().unwrap_or("-"),
            backend = state.analyzer.backend(),
            "Resume analyzed"
        ),
        (Err(e), _) => tracing::warn!("Analysis rejected: {e}"),
        _ => {}
    }

    Ok(Json(result?))
}

/// GET /api/info
pub async fn handle_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        title: ui::TITLE,
        description: ui::DESCRIPTION,
        supported_extensions: SUPPORTED_EXTENSIONS.to_vec(),
        analyzer: state.analyzer.backend(),
    })
}

/// Pulls the first `file` part out of the form; other parts are drained.
/// A `file` part with no bytes and no filename (what browsers send for an
/// empty file input) counts as no upload.
async fn read_upload(mut multipart: Multipart) -> Result<Option<UploadedFile>, MultipartError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if upload.is_some() || field.name() != Some(FILE_FIELD) {
            let _ = field.bytes().await?;
            continue;
        }

        let name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let file = UploadedFile::new(name, field.bytes().await?).with_content_type(content_type);

        if !file.is_blank() {
            upload = Some(file);
        }
    }

    Ok(upload)
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(limit)
    } else {
        AppError::Multipart(e.body_text())
    }
}
