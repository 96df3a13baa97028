use crate::utils::error::{AppError, Result};
use crate::utils::validation::{sanitize_filename, validate_upload_file, MAX_UPLOAD_BYTES};
use axum::extract::Multipart;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Transient server-side copy of one uploaded file.
///
/// Removal is tied to this value's lifetime, so the file is deleted exactly
/// once per request no matter which exit path the handler takes.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to remove temp upload {}: {}",
                    self.path.display(),
                    err
                );
            }
        }
    }
}

/// Pulls the `file` part out of the multipart body, validates it, and spills
/// it to the uploads directory under a millisecond-timestamped name (which
/// keeps concurrent requests from colliding without any locking).
pub async fn receive_upload(multipart: &mut Multipart, uploads_dir: &Path) -> Result<TempUpload> {
    let mut file_part = None;
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.csv").to_string();
            let content_type = field.content_type().map(str::to_string);
            // Enforce the cap while streaming, so an oversized body is cut
            // off at the limit instead of buffered whole first.
            let mut bytes: Vec<u8> = Vec::new();
            while let Some(chunk) = field.chunk().await? {
                if bytes.len() + chunk.len() > MAX_UPLOAD_BYTES as usize {
                    return Err(AppError::validation("File too large. Max 2MB allowed."));
                }
                bytes.extend_from_slice(&chunk);
            }
            file_part = Some((filename, content_type, bytes));
            break;
        }
    }

    let Some((filename, content_type, bytes)) = file_part else {
        return Err(AppError::validation("No file uploaded"));
    };

    validate_upload_file(&filename, content_type.as_deref(), bytes.len() as u64)?;

    tokio::fs::create_dir_all(uploads_dir).await?;
    let stored_name = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_filename(&filename)
    );
    let path = uploads_dir.join(stored_name);
    tokio::fs::write(&path, &bytes).await?;
    tracing::debug!("Stored upload at {}", path.display());

    Ok(TempUpload { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_upload_removes_file_on_drop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("123-feedback.csv");
        std::fs::write(&path, "feedback\nok\n").unwrap();

        {
            let _upload = TempUpload { path: path.clone() };
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_tolerates_already_removed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.csv");
        // Never created; drop must not panic.
        drop(TempUpload { path });
    }
}
