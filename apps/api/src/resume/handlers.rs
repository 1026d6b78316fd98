//! Axum route handlers for the Resume Analyzer.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::models::ResumeAnalysis;
use crate::resume::upload::{validate_upload, UploadedFile};
use crate::state::AppState;

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub file: UploadedFile,
    pub analysis: ResumeAnalysis,
    pub star_rating: u32,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

/// POST /api/v1/resumes/analyze
///
/// Multipart upload with a single `file` part. Only the file name and byte
/// count are used; the analysis is the fixed mock report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data: Bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some(validate_upload(
            &file_name,
            data.len(),
            state.config.max_upload_bytes,
        )?);
        break;
    }

    let file = upload
        .ok_or_else(|| AppError::Validation(format!("missing '{FILE_FIELD}' part")))?;

    info!("Analyzing {} ({})", file.file_name, file.size_display);
    let analysis = state.resume_analyzer.analyze(&file).await?;
    let star_rating = analysis.star_rating();
    info!(
        "Analysis of {} finished: {}/100",
        file.file_name, analysis.overall_score
    );

    Ok(Json(AnalyzeResponse {
        file,
        analysis,
        star_rating,
    }))
}
