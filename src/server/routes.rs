use crate::domain::model::{AnalysisResponse, ErrorBody, HealthStatus};
use crate::domain::ports::CompletionProvider;
use crate::server::{upload, AppState};
use crate::utils::error::AppError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{SecondsFormat, Utc};

pub async fn health<P: CompletionProvider>(
    State(state): State<AppState<P>>,
) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

/// `POST /api/upload`: multipart field `file` in, analysis out. The temp copy
/// of the upload is removed when `TempUpload` drops, whichever way this
/// returns.
pub async fn upload<P: CompletionProvider>(
    State(state): State<AppState<P>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = upload::receive_upload(&mut multipart, &state.uploads_dir).await?;

    let response = state.pipeline.run(upload.path()).await?;
    tracing::info!(
        "Analyzed upload: {} rows, {} feedback entries",
        response.data_points,
        response.feedback_count
    );

    Ok(Json(response))
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
        }),
    )
}
