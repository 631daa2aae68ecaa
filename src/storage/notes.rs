//! Newline-delimited note storage.
//!
//! One note per line, appended in arrival order. The file is created on
//! first use; missing files read as empty.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// File-backed note store.
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file if it does not exist yet.
    async fn ensure_file(&self) -> std::io::Result<()> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        debug!("Creating notes file: {}", self.path.display());
        fs::write(&self.path, b"").await
    }

    /// Append a note. Surrounding whitespace is trimmed; the stored line
    /// always ends with a newline.
    pub async fn append(&self, message: &str) -> std::io::Result<()> {
        self.ensure_file().await?;
        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(format!("{}\n", message.trim()).as_bytes())
            .await?;
        file.flush().await
    }

    /// Read all notes as one string, trimmed. Empty string if there are none.
    pub async fn read_all(&self) -> std::io::Result<String> {
        self.ensure_file().await?;
        let content = fs::read_to_string(&self.path).await?;
        Ok(content.trim().to_string())
    }

    /// The most recently appended note, if any.
    pub async fn latest(&self) -> std::io::Result<Option<String>> {
        let content = self.read_all().await?;
        Ok(content.lines().last().map(|line| line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_append_and_read() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("notes.txt"));

        store.append("  first note  ").await.unwrap();
        store.append("second note").await.unwrap();

        let all = store.read_all().await.unwrap();
        assert_eq!(all, "first note\nsecond note");
    }

    #[tokio::test]
    async fn test_empty_store_reads_empty() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("notes.txt"));

        assert_eq!(store.read_all().await.unwrap(), "");
        assert_eq!(store.latest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_latest_returns_last_line() {
        let dir = tempdir().unwrap();
        let store = NoteStore::new(dir.path().join("notes.txt"));

        store.append("one").await.unwrap();
        store.append("two").await.unwrap();

        assert_eq!(store.latest().await.unwrap(), Some("two".to_string()));
    }
}
