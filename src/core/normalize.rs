use crate::domain::model::{AnalysisResult, FallbackAnalysis, StructuredAnalysis};

/// Marker the client keys on to tell a fallback payload from a structured one.
pub const PARSE_ERROR_MARKER: &str = "Could not parse structured response";

/// Normalizes the completion text into an `AnalysisResult`.
///
/// Strict typed deserialization: a completion that is JSON of the wrong shape
/// (say, a string sentimentScore) degrades to the fallback exactly like
/// non-JSON text, instead of flowing downstream as a malformed value. The
/// fallback carries the completion verbatim, so an off-format answer never
/// fails the request.
pub fn normalize_completion(text: &str) -> AnalysisResult {
    match serde_json::from_str::<StructuredAnalysis>(text) {
        Ok(analysis) => AnalysisResult::Structured(analysis),
        Err(err) => {
            tracing::debug!("Completion did not parse as structured JSON: {}", err);
            AnalysisResult::Fallback(FallbackAnalysis {
                raw_analysis: text.to_string(),
                parse_error: PARSE_ERROR_MARKER.to_string(),
            })
        }
    }
}
