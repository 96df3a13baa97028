pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::openai::OpenAiClient;
pub use config::ServerConfig;
pub use crate::core::analyze::AnalysisPipeline;
pub use domain::model::{AnalysisResponse, AnalysisResult};
pub use server::{build_router, AppState};
pub use utils::error::{AppError, Result};
