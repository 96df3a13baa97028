use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Multipart error: {0}")]
    MultipartError(#[from] axum::extract::multipart::MultipartError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Data error: {message}")]
    DataError { message: String },

    #[error("External service error: {message}")]
    ExternalError { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError {
            message: message.into(),
        }
    }

    pub fn data(message: impl Into<String>) -> Self {
        AppError::DataError {
            message: message.into(),
        }
    }

    pub fn external(message: impl Into<String>) -> Self {
        AppError::ExternalError {
            message: message.into(),
        }
    }

    /// HTTP status returned for this error on the upload path.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError { .. }
            | AppError::DataError { .. }
            | AppError::MultipartError(_) => StatusCode::BAD_REQUEST,
            // A CSV error wrapping IO means the temp file went missing, not bad input.
            AppError::CsvError(e) => match e.kind() {
                csv::ErrorKind::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            AppError::ApiError(_)
            | AppError::IoError(_)
            | AppError::SerializationError(_)
            | AppError::ConfigError { .. }
            | AppError::ExternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the client. Provider and internal detail stays in the
    /// server log; resource errors get dedicated messages to aid diagnosis.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError { message }
            | AppError::DataError { message }
            | AppError::ConfigError { message } => message.clone(),
            // A multipart read can fail because the body-limit layer cut the
            // stream; surface that as the size rejection, not a decode fault.
            AppError::MultipartError(e) => {
                if e.body_text().to_ascii_lowercase().contains("length limit") {
                    "File too large. Max 2MB allowed.".to_string()
                } else {
                    "Invalid upload request".to_string()
                }
            }
            AppError::CsvError(e) => match e.kind() {
                csv::ErrorKind::Io(io) => io_user_message(io),
                _ => "Could not parse CSV file".to_string(),
            },
            AppError::IoError(io) => io_user_message(io),
            AppError::ApiError(_)
            | AppError::SerializationError(_)
            | AppError::ExternalError { .. } => "Something went wrong".to_string(),
        }
    }
}

fn io_user_message(err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => "File not found or access denied.".to_string(),
        std::io::ErrorKind::PermissionDenied => "Permission denied accessing file.".to_string(),
        _ => "Something went wrong".to_string(),
    }
}
