use std::path::Path;
use tokio::fs;

/// Reads and writes whole files on the local filesystem
#[derive(Debug, Default)]
pub struct LocalFileRepository;

impl LocalFileRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn read(&self, path: &Path) -> Result<Vec<u8>, String> {
        let bytes = fs::read(path).await.map_err(|e| e.to_string())?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Local file read");
        Ok(bytes)
    }

    /// Create or truncate `path` and write `contents`
    pub async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), String> {
        fs::write(path, contents).await.map_err(|e| e.to_string())?;
        tracing::info!(path = %path.display(), size = contents.len(), "Local file written");
        Ok(())
    }
}
