use std::io;

use async_trait::async_trait;
use thiserror::Error;

use super::ResolvedPath;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("write failed: {path}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn not_found(path: &ResolvedPath, source: io::Error) -> Self {
        Self::NotFound {
            path: path.to_string(),
            source,
        }
    }

    pub fn write(path: &ResolvedPath, source: io::Error) -> Self {
        Self::Write {
            path: path.to_string(),
            source,
        }
    }
}

/// Metadata for one resolved path. `entries` is only filled in by
/// [`FileStore::stat_or_list`] and only for directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStat {
    pub is_directory: bool,
    pub size: u64,
    pub entries: Option<Vec<String>>,
}

impl PathStat {
    pub fn file(size: u64) -> Self {
        Self {
            is_directory: false,
            size,
            entries: None,
        }
    }

    pub fn directory(size: u64) -> Self {
        Self {
            is_directory: true,
            size,
            entries: None,
        }
    }
}

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn stat(&self, path: &ResolvedPath) -> Result<PathStat, StoreError>;

    /// Entry names in whatever order the underlying enumeration yields them.
    async fn list_directory(&self, path: &ResolvedPath) -> Result<Vec<String>, StoreError>;

    async fn read_file(&self, path: &ResolvedPath) -> Result<Vec<u8>, StoreError>;

    /// Creates the file or truncates and replaces its contents.
    async fn write_file(&self, path: &ResolvedPath, contents: &[u8]) -> Result<(), StoreError>;

    /// Creates the file or appends at its current end.
    async fn append_file(&self, path: &ResolvedPath, contents: &[u8]) -> Result<(), StoreError>;

    /// Fails with `NotFound` when nothing is there to remove.
    async fn remove_file(&self, path: &ResolvedPath) -> Result<(), StoreError>;

    async fn stat_or_list(&self, path: &ResolvedPath) -> Result<PathStat, StoreError> {
        let mut stat = self.stat(path).await?;
        if stat.is_directory {
            stat.entries = Some(self.list_directory(path).await?);
        }
        Ok(stat)
    }
}
