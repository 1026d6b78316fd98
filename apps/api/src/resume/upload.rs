use serde::Serialize;

use crate::errors::AppError;

pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// What the service knows about an upload: its name and size, nothing more.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub size_bytes: usize,
    pub size_display: String,
}

/// Formats a byte count as megabytes with two decimals, e.g. "1.50 MB".
pub fn format_megabytes(bytes: usize) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

fn extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Checks type and size. The bytes themselves are not inspected.
pub fn validate_upload(
    file_name: &str,
    size_bytes: usize,
    max_bytes: usize,
) -> Result<UploadedFile, AppError> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(AppError::Validation("file name is missing".to_string()));
    }

    match extension(file_name) {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(AppError::Validation(format!(
                "'{file_name}' is not a PDF, DOC or DOCX file"
            )))
        }
    }

    if size_bytes == 0 {
        return Err(AppError::Validation(format!("'{file_name}' is empty")));
    }
    if size_bytes > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "'{file_name}' is {} (limit {})",
            format_megabytes(size_bytes),
            format_megabytes(max_bytes)
        )));
    }

    Ok(UploadedFile {
        file_name: file_name.to_string(),
        size_bytes,
        size_display: format_megabytes(size_bytes),
    })
}
