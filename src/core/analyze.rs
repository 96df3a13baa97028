use crate::core::{ingest, normalize, prompt, resolve};
use crate::domain::model::AnalysisResponse;
use crate::domain::ports::CompletionProvider;
use crate::utils::error::{AppError, Result};
use std::path::Path;

/// Runs the parse → extract → request → normalize pipeline for one uploaded
/// CSV. Stateless per request; the caller owns the file lifecycle.
pub struct AnalysisPipeline<P: CompletionProvider> {
    provider: P,
    row_limit: usize,
}

impl<P: CompletionProvider> AnalysisPipeline<P> {
    pub fn new(provider: P, row_limit: usize) -> Self {
        Self {
            provider,
            row_limit,
        }
    }

    pub async fn run(&self, csv_path: &Path) -> Result<AnalysisResponse> {
        let rows = ingest::read_rows(csv_path, self.row_limit)?;
        tracing::debug!("Parsed {} rows from upload", rows.len());

        if rows.is_empty() {
            return Err(AppError::data("No data found in CSV file"));
        }

        let feedback_texts = resolve::extract_feedback_texts(&rows);
        if feedback_texts.is_empty() {
            return Err(AppError::data("No valid feedback text found in CSV file"));
        }

        let prompt = prompt::build_analysis_prompt(&feedback_texts);
        tracing::debug!(
            "Requesting analysis for {} feedback entries",
            feedback_texts.len()
        );
        let completion = self.provider.complete(&prompt).await?;

        let analysis = normalize::normalize_completion(&completion);
        if analysis.is_fallback() {
            tracing::warn!("Completion was not structured JSON, returning raw analysis");
        }

        Ok(AnalysisResponse {
            analysis,
            data_points: rows.len(),
            feedback_count: feedback_texts.len(),
        })
    }
}
