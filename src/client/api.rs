use crate::domain::model::{AnalysisResponse, ErrorBody, HealthStatus, UploadedFile};
use crate::utils::error::{AppError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Thin client over the server's HTTP API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn check_health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Uploads the file as multipart field `file` and returns the analysis.
    /// A non-2xx answer surfaces the server's `{error}` message.
    pub async fn upload_and_analyze(&self, file: &UploadedFile) -> Result<AnalysisResponse> {
        let bytes = tokio::fs::read(&file.path).await?;
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.mime_type.as_deref().unwrap_or("text/csv"))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Upload failed".to_string());
            return Err(AppError::external(message));
        }

        Ok(response.json().await?)
    }

    /// Translates a failure into the string shown to the user.
    pub fn user_facing_error(err: &AppError) -> String {
        match err {
            AppError::ApiError(e) if e.is_connect() || e.is_timeout() => {
                "Unable to connect to server. Please check your internet connection.".to_string()
            }
            AppError::ExternalError { message } => message.clone(),
            other => other.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_check_health() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/health");
            then.status(200).json_body(serde_json::json!({
                "status": "OK",
                "timestamp": "2024-01-01T00:00:00.000Z",
                "uptime": 12.5
            }));
        });

        let api = ApiClient::new(format!("{}/api", server.base_url()));
        let health = api.check_health().await.unwrap();
        assert_eq!(health.status, "OK");
        assert_eq!(health.uptime, 12.5);
    }

    #[tokio::test]
    async fn test_upload_error_body_surfaces_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/upload");
            then.status(400)
                .json_body(serde_json::json!({"error": "No data found in CSV file"}));
        });

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "feedback\n").unwrap();
        let file = UploadedFile::from_path(&path).unwrap();

        let api = ApiClient::new(format!("{}/api", server.base_url()));
        let err = api.upload_and_analyze(&file).await.unwrap_err();
        assert_eq!(
            ApiClient::user_facing_error(&err),
            "No data found in CSV file"
        );
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_friendly_message() {
        // Nothing listens on this port.
        let api = ApiClient::new("http://127.0.0.1:1/api");
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("f.csv");
        std::fs::write(&path, "feedback\nok\n").unwrap();
        let file = UploadedFile::from_path(&path).unwrap();

        let err = api.upload_and_analyze(&file).await.unwrap_err();
        assert_eq!(
            ApiClient::user_facing_error(&err),
            "Unable to connect to server. Please check your internet connection."
        );
    }
}
