use crate::utils::error::{AppError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Upload size ceiling, enforced both client- and server-side.
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

/// Declared MIME types accepted for a CSV upload. Browsers disagree on what a
/// .csv file is, so plain text and the legacy Excel type are allowed.
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["text/csv", "application/vnd.ms-excel", "text/plain"];

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::config(format!("{}: URL cannot be empty", field_name)));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::config(format!(
                "{}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(AppError::config(format!(
            "{}: invalid URL format: {}",
            field_name, e
        ))),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AppError::config(format!(
            "{}: value must be at least {}",
            field_name, min_value
        )));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

/// Server-side check of one uploaded file: .csv extension, declared MIME on
/// the allowlist (when declared at all), size under the cap.
pub fn validate_upload_file(filename: &str, content_type: Option<&str>, size: u64) -> Result<()> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    if extension.as_deref() != Some("csv") {
        return Err(AppError::validation(
            "Invalid file type. Only CSV files are allowed.",
        ));
    }

    if let Some(mime) = content_type {
        if !ALLOWED_MIME_TYPES.contains(&mime) {
            return Err(AppError::validation(
                "Invalid file type. Only CSV files are allowed.",
            ));
        }
    }

    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::validation("File too large. Max 2MB allowed."));
    }

    Ok(())
}

/// Strips anything outside [a-zA-Z0-9._-] from an uploaded filename before it
/// is used on disk.
pub fn sanitize_filename(name: &str) -> String {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
    let pattern =
        UNSAFE_CHARS.get_or_init(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("static pattern"));
    pattern.replace_all(name, "_").into_owned()
}
