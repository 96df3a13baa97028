pub mod analyze;
pub mod ingest;
pub mod normalize;
pub mod prompt;
pub mod resolve;

pub use analyze::AnalysisPipeline;
pub use crate::domain::model::{AnalysisResponse, AnalysisResult, FeedbackRow};
pub use crate::domain::ports::CompletionProvider;
pub use crate::utils::error::Result;
