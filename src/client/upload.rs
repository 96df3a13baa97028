use crate::client::api::ApiClient;
use crate::client::state::AnalysisStore;
use crate::domain::model::UploadedFile;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::MAX_UPLOAD_BYTES;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const PROGRESS_TICK: Duration = Duration::from_millis(200);
const PROGRESS_STEP: u8 = 10;
/// Simulated progress parks here until the remote call resolves.
const PROGRESS_CEILING: u8 = 90;
const REDIRECT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    Empty,
    Validating,
    Uploading(u8),
    Succeeded,
    Failed(String),
}

/// Next value of the simulated progress counter; `None` once it has parked at
/// the ceiling. Cosmetic only — it is not derived from transfer bytes.
fn next_progress(progress: u8) -> Option<u8> {
    if progress >= PROGRESS_CEILING {
        None
    } else {
        Some(progress + PROGRESS_STEP)
    }
}

/// Drives one file from selection to analysis result: validate locally, tick
/// a simulated progress counter, call the server, and push the outcome into
/// the shared store. One upload in flight at a time; a second call while busy
/// is ignored, mirroring the disabled file input.
#[derive(Clone)]
pub struct Uploader {
    api: ApiClient,
    store: AnalysisStore,
    phase: Arc<Mutex<UploadPhase>>,
}

impl Uploader {
    pub fn new(api: ApiClient, store: AnalysisStore) -> Self {
        Self {
            api,
            store,
            phase: Arc::new(Mutex::new(UploadPhase::Empty)),
        }
    }

    pub fn phase(&self) -> UploadPhase {
        lock_phase(&self.phase).clone()
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase(),
            UploadPhase::Validating | UploadPhase::Uploading(_)
        )
    }

    /// Clears a terminal phase so the user can pick another file.
    pub fn reset(&self) {
        *lock_phase(&self.phase) = UploadPhase::Empty;
    }

    /// Checked before any network traffic happens.
    fn validate_file(file: &UploadedFile) -> Result<()> {
        let is_csv = file.name.to_ascii_lowercase().ends_with(".csv")
            || file.mime_type.as_deref() == Some("text/csv");
        if !is_csv {
            return Err(AppError::validation("Please upload a CSV file"));
        }
        if file.size > MAX_UPLOAD_BYTES {
            return Err(AppError::validation("File size must be less than 2MB"));
        }
        Ok(())
    }

    pub async fn upload(&self, file: UploadedFile) -> UploadPhase {
        {
            let mut phase = lock_phase(&self.phase);
            if matches!(*phase, UploadPhase::Validating | UploadPhase::Uploading(_)) {
                return phase.clone();
            }
            *phase = UploadPhase::Validating;
        }

        if let Err(err) = Self::validate_file(&file) {
            let message = err.user_message();
            self.store.set_error(message.clone());
            self.set_phase(UploadPhase::Failed(message));
            return self.phase();
        }

        self.store.set_loading(true);
        self.set_phase(UploadPhase::Uploading(0));

        let ticker_phase = Arc::clone(&self.phase);
        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval(PROGRESS_TICK);
            interval.tick().await; // first tick resolves immediately
            loop {
                interval.tick().await;
                let mut phase = lock_phase(&ticker_phase);
                match *phase {
                    UploadPhase::Uploading(progress) => match next_progress(progress) {
                        Some(next) => *phase = UploadPhase::Uploading(next),
                        None => break,
                    },
                    _ => break,
                }
            }
        });

        let result = self.api.upload_and_analyze(&file).await;
        ticker.abort();

        match result {
            Ok(response) => {
                self.set_phase(UploadPhase::Uploading(100));
                self.store.set_analysis(response);
                self.store.set_uploaded_file(file);
                self.store.set_loading(false);
                // Short pause before the view switches to results.
                tokio::time::sleep(REDIRECT_DELAY).await;
                self.set_phase(UploadPhase::Succeeded);
            }
            Err(err) => {
                let message = ApiClient::user_facing_error(&err);
                self.store.set_error(message.clone());
                self.store.set_loading(false);
                // Failed drops the file selection so the user can retry.
                self.set_phase(UploadPhase::Failed(message));
            }
        }

        self.phase()
    }

    fn set_phase(&self, phase: UploadPhase) {
        *lock_phase(&self.phase) = phase;
    }
}

fn lock_phase(phase: &Arc<Mutex<UploadPhase>>) -> std::sync::MutexGuard<'_, UploadPhase> {
    phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_steps_to_ceiling_then_parks() {
        let mut progress = 0;
        let mut steps = 0;
        while let Some(next) = next_progress(progress) {
            progress = next;
            steps += 1;
        }
        assert_eq!(progress, PROGRESS_CEILING);
        assert_eq!(steps, 9);
        assert_eq!(next_progress(PROGRESS_CEILING), None);
    }

    #[test]
    fn test_validate_file_rules() {
        let csv = UploadedFile {
            name: "feedback.csv".to_string(),
            mime_type: Some("text/csv".to_string()),
            size: 1024,
            path: "feedback.csv".into(),
        };
        assert!(Uploader::validate_file(&csv).is_ok());

        let by_mime_only = UploadedFile {
            name: "export".to_string(),
            mime_type: Some("text/csv".to_string()),
            size: 1024,
            path: "export".into(),
        };
        assert!(Uploader::validate_file(&by_mime_only).is_ok());

        let wrong_type = UploadedFile {
            name: "notes.txt".to_string(),
            mime_type: Some("text/plain".to_string()),
            size: 1024,
            path: "notes.txt".into(),
        };
        let err = Uploader::validate_file(&wrong_type).unwrap_err();
        assert_eq!(err.user_message(), "Please upload a CSV file");

        let oversize = UploadedFile {
            name: "big.csv".to_string(),
            mime_type: Some("text/csv".to_string()),
            size: MAX_UPLOAD_BYTES + 1,
            path: "big.csv".into(),
        };
        let err = Uploader::validate_file(&oversize).unwrap_err();
        assert_eq!(err.user_message(), "File size must be less than 2MB");

        let at_cap = UploadedFile {
            name: "ok.csv".to_string(),
            mime_type: Some("text/csv".to_string()),
            size: MAX_UPLOAD_BYTES,
            path: "ok.csv".into(),
        };
        assert!(Uploader::validate_file(&at_cap).is_ok());
    }
}
