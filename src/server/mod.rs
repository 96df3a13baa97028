pub mod routes;
pub mod upload;

use crate::core::analyze::AnalysisPipeline;
use crate::domain::model::ErrorBody;
use crate::domain::ports::CompletionProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::MAX_UPLOAD_BYTES;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

/// Hard ceiling on any request body. Sits well above the 2 MiB file cap so
/// the streaming size check in `upload::receive_upload` owns the rejection
/// (and its message) for ordinarily oversized uploads; this only stops
/// grossly outsized bodies.
const BODY_BACKSTOP_BYTES: usize = 4 * MAX_UPLOAD_BYTES as usize;

pub struct AppState<P: CompletionProvider> {
    pub pipeline: Arc<AnalysisPipeline<P>>,
    pub uploads_dir: PathBuf,
    pub started_at: Instant,
}

impl<P: CompletionProvider> AppState<P> {
    pub fn new(pipeline: AnalysisPipeline<P>, uploads_dir: impl AsRef<Path>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            uploads_dir: uploads_dir.as_ref().to_path_buf(),
            started_at: Instant::now(),
        }
    }
}

impl<P: CompletionProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            uploads_dir: self.uploads_dir.clone(),
            started_at: self.started_at,
        }
    }
}

pub fn build_router<P: CompletionProvider + 'static>(
    state: AppState<P>,
    client_url: &str,
) -> Result<Router> {
    let origin: HeaderValue = client_url
        .parse()
        .map_err(|_| AppError::config(format!("invalid client URL: {}", client_url)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/api/health", get(routes::health::<P>))
        .route("/api/upload", post(routes::upload::<P>))
        .fallback(routes::not_found)
        .layer(cors)
        // Axum's implicit 2 MB extractor limit would reject an at-cap upload
        // before the explicit size check gets to decide; raise both limits to
        // the backstop so validation owns the size decision.
        .layer(DefaultBodyLimit::max(BODY_BACKSTOP_BYTES))
        .layer(RequestBodyLimitLayer::new(BODY_BACKSTOP_BYTES))
        .with_state(state))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Full detail is server-side only; the client gets the mapped message.
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}
