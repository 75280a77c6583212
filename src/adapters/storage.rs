use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads and writes files relative to a project directory.
#[derive(Debug, Clone)]
pub struct ProjectStorage {
    root: PathBuf,
}

impl ProjectStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for ProjectStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        Ok(tokio::fs::read(full_path).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        // results/tables 之類的中間目錄不存在時一併建立
        if let Some(dir) = full_path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        // 每次執行都整檔覆寫
        tokio::fs::write(&full_path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GeneError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_directories_and_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProjectStorage::new(temp_dir.path());

        storage
            .write_file("results/tables/orthologs.csv", b"sparrow\nMYH7\n")
            .await
            .unwrap();
        assert!(temp_dir.path().join("results/tables").is_dir());

        let data = storage.read_file("results/tables/orthologs.csv").await.unwrap();
        assert_eq!(data, b"sparrow\nMYH7\n");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProjectStorage::new(temp_dir.path());

        storage.write_file("out.csv", b"old contents, longer").await.unwrap();
        storage.write_file("out.csv", b"new").await.unwrap();

        assert_eq!(storage.read_file("out.csv").await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ProjectStorage::new(temp_dir.path());

        match storage.read_file("results/tables/orthologs.csv").await {
            Err(GeneError::IoError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {:?}", other.map(|d| d.len())),
        }
    }
}
