use crate::adapters::openai;
use crate::core::ingest;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "feedback-insight")]
#[command(about = "CSV feedback analysis server backed by an LLM completion API")]
pub struct ServerConfig {
    /// Port the API server binds on.
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Allowed cross-origin client URL.
    #[arg(long, default_value = "http://localhost:5173")]
    pub client_url: String,

    /// Maximum CSV rows read per upload; caps the completion call's input.
    #[arg(long, default_value_t = ingest::DEFAULT_ROW_LIMIT)]
    pub row_limit: usize,

    /// Directory holding transient upload files.
    #[arg(long, default_value = "uploads")]
    pub uploads_dir: String,

    /// Completion API base URL.
    #[arg(long, default_value = openai::DEFAULT_API_BASE)]
    pub api_base_url: String,

    /// Completion API key; falls back to the OPENAI_API_KEY environment
    /// variable.
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    /// Overlays deployment environment variables over CLI defaults.
    pub fn overlay_env(mut self) -> Self {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(client_url) = std::env::var("CLIENT_URL") {
            self.client_url = client_url;
        }
        if let Ok(row_limit) = std::env::var("CSV_ROW_LIMIT") {
            if let Ok(row_limit) = row_limit.parse() {
                self.row_limit = row_limit;
            }
        }
        self
    }

    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            validate_non_empty_string("api_key", key)?;
            return Ok(key.clone());
        }
        std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::config("OPENAI_API_KEY environment variable is required"))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client_url", &self.client_url)?;
        validate_url("api_base_url", &self.api_base_url)?;
        validate_positive_number("row_limit", self.row_limit, 1)?;
        validate_non_empty_string("uploads_dir", &self.uploads_dir)?;
        self.resolve_api_key()?;
        Ok(())
    }
}
