use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::Error;
use crate::schema::Document;
use crate::traits::DocumentLoader;
use crate::Result;

/// Loader for UTF-8 text files
pub struct TextLoader {
    file_path: PathBuf,
}

impl TextLoader {
    /// Create a new text loader
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DocumentLoader for TextLoader {
    async fn load(&self) -> Result<Vec<Document>> {
        let file_path = &self.file_path;
        let metadata = fs::metadata(file_path).await.map_err(|e| {
            Error::DocumentLoader(format!("Failed to read metadata for file: {}", e))
        })?;

        if !metadata.is_file() {
            return Err(Error::DocumentLoader(format!(
                "Path is not a file: {}",
                file_path.display()
            )));
        }

        let content = fs::read_to_string(file_path)
            .await
            .map_err(|e| Error::DocumentLoader(format!("Failed to read file: {}", e)))?;

        let mut doc_metadata = HashMap::new();
        doc_metadata.insert(
            "source".to_string(),
            serde_json::Value::String(file_path.to_string_lossy().to_string()),
        );

        Ok(vec![Document::with_metadata(content, doc_metadata)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "First paragraph.\n\nSecond paragraph.").unwrap();

        let docs = TextLoader::new(file.path()).load().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].page_content, "First paragraph.\n\nSecond paragraph.");
        assert_eq!(
            docs[0].metadata["source"],
            file.path().to_string_lossy().to_string()
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TextLoader::new(dir.path().join("missing.txt")).load().await;
        assert!(matches!(result, Err(Error::DocumentLoader(_))));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = TextLoader::new(dir.path()).load().await;
        assert!(matches!(result, Err(Error::DocumentLoader(_))));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        let result = TextLoader::new(file.path()).load().await;
        assert!(matches!(result, Err(Error::DocumentLoader(_))));
    }
}
