use std::path::PathBuf;

use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::FileStore;
use crate::error::ApiError;

/// Uploaded files land on the local disk under `root` and are served back
/// at `/uploads/<name>`. Names are random UUIDs; the client filename only
/// contributes the extension.
#[derive(Clone)]
pub struct LocalFileStore {
    pub root: PathBuf,
}

fn sanitized_extension(filename_hint: &str) -> Option<String> {
    let ext = filename_hint.rsplit_once('.')?.1;
    if ext.is_empty() || ext.len() > 10 {
        return None;
    }
    let ext = ext.to_lowercase();
    if ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext)
    } else {
        None
    }
}

impl FileStore for LocalFileStore {
    async fn store(&self, filename_hint: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let name = match sanitized_extension(filename_hint) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        tokio::fs::create_dir_all(&self.root)
            .await
            .context("create upload directory")?;
        tokio::fs::write(self.root.join(&name), bytes)
            .await
            .context("write uploaded file")?;
        Ok(format!("/uploads/{name}"))
    }
}
