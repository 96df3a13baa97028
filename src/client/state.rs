use crate::domain::model::{AnalysisResponse, UploadedFile};
use std::sync::{Arc, Mutex};

/// Shared UI state for one session: the latest analysis, the in-flight flag,
/// the last error, and the file descriptor that produced the result.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    pub analysis_data: Option<AnalysisResponse>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub uploaded_file: Option<UploadedFile>,
}

/// Explicit state container passed down to whoever renders results — cloned
/// handles all view the same underlying state. Invariants: turning loading on
/// clears the error; setting an error turns loading off.
#[derive(Clone, Default)]
pub struct AnalysisStore {
    inner: Arc<Mutex<AnalysisState>>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> AnalysisState {
        self.lock().clone()
    }

    pub fn set_loading(&self, loading: bool) {
        let mut state = self.lock();
        state.is_loading = loading;
        if loading {
            state.error = None;
        }
    }

    pub fn set_analysis(&self, data: AnalysisResponse) {
        let mut state = self.lock();
        state.analysis_data = Some(data);
        state.error = None;
    }

    pub fn set_error(&self, message: impl Into<String>) {
        let mut state = self.lock();
        state.error = Some(message.into());
        state.is_loading = false;
    }

    pub fn set_uploaded_file(&self, file: UploadedFile) {
        self.lock().uploaded_file = Some(file);
    }

    pub fn clear(&self) {
        *self.lock() = AnalysisState::default();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AnalysisState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
