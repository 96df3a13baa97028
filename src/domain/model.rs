use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One parsed CSV row: (header, value) pairs in the column order of the file.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRow {
    pub columns: Vec<(String, String)>,
}

impl FeedbackRow {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(h, _)| h.eq_ignore_ascii_case(header))
            .map(|(_, v)| v.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(_, v)| v.as_str())
    }
}

/// The six-field shape the completion service is instructed to return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAnalysis {
    #[serde(default)]
    pub positive_feedback: Vec<String>,
    #[serde(default)]
    pub negative_feedback: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub sentiment_score: f64,
    #[serde(default)]
    pub key_themes: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
}

/// Raw-text wrapper used when the completion cannot be parsed as the expected
/// JSON shape. `parse_error` is the marker clients discriminate on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FallbackAnalysis {
    pub raw_analysis: String,
    pub parse_error: String,
}

/// Exactly one variant per request. Serialized untagged so the wire shape is
/// the plain object the results view expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisResult {
    Structured(StructuredAnalysis),
    Fallback(FallbackAnalysis),
}

impl AnalysisResult {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisResult::Fallback(_))
    }
}

/// Body of a successful `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis: AnalysisResult,
    /// Rows read from the CSV, before text extraction.
    pub data_points: usize,
    /// Non-empty feedback strings extracted from those rows.
    pub feedback_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
}

/// Flat error body; no structured codes beyond the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Client-side descriptor of the file picked for upload. Transient: lives
/// only long enough to be validated and transmitted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: Option<String>,
    pub size: u64,
    pub path: PathBuf,
}

impl UploadedFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.csv")
            .to_string();
        let mime_type = name
            .to_ascii_lowercase()
            .ends_with(".csv")
            .then(|| "text/csv".to_string());

        Ok(Self {
            name,
            mime_type,
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}
