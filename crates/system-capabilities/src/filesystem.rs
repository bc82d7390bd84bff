//! 文件系统能力模块。
//!
//! 基于 `tokio::fs` 实现网关的文件操作：元数据、目录列表、读取、
//! 覆盖写入、追加写入与删除。

use std::io;

use async_trait::async_trait;
use flatfs_core::{FileStore, PathStat, ResolvedPath, StoreError};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::locks::WriteLocks;

/// 本地磁盘上的文件存储。
#[derive(Clone, Default)]
pub struct LocalFileStore {
    /// 设置时，同一路径上的写、追加与删除串行执行。
    locks: Option<WriteLocks>,
}

impl LocalFileStore {
    /// 创建不加锁的实例，并发写入同一路径的顺序不作保证。
    pub fn new() -> Self {
        Self { locks: None }
    }

    /// 创建按路径串行化写操作的实例。
    pub fn with_serialized_writes() -> Self {
        Self::with_locks(WriteLocks::new())
    }

    /// 使用给定锁表串行化写操作，锁表可与其他持有者共享。
    pub fn with_locks(locks: WriteLocks) -> Self {
        Self { locks: Some(locks) }
    }

    /// 是否启用了写入串行化。
    pub fn serializes_writes(&self) -> bool {
        self.locks.is_some()
    }

    async fn append(path: &ResolvedPath, contents: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(contents).await?;
        file.flush().await
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn stat(&self, path: &ResolvedPath) -> Result<PathStat, StoreError> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| StoreError::not_found(path, e))?;

        if metadata.is_dir() {
            Ok(PathStat::directory(metadata.len()))
        } else {
            Ok(PathStat::file(metadata.len()))
        }
    }

    async fn list_directory(&self, path: &ResolvedPath) -> Result<Vec<String>, StoreError> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|e| StoreError::not_found(path, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::not_found(path, e))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        debug!(path = %path, count = names.len(), "listed directory");
        Ok(names)
    }

    async fn read_file(&self, path: &ResolvedPath) -> Result<Vec<u8>, StoreError> {
        let contents = fs::read(path)
            .await
            .map_err(|e| StoreError::not_found(path, e))?;
        debug!(path = %path, bytes = contents.len(), "read file");
        Ok(contents)
    }

    async fn write_file(&self, path: &ResolvedPath, contents: &[u8]) -> Result<(), StoreError> {
        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(path.as_path()).await),
            None => None,
        };

        fs::write(path, contents)
            .await
            .map_err(|e| StoreError::write(path, e))?;
        debug!(path = %path, bytes = contents.len(), "wrote file");
        Ok(())
    }

    async fn append_file(&self, path: &ResolvedPath, contents: &[u8]) -> Result<(), StoreError> {
        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(path.as_path()).await),
            None => None,
        };

        Self::append(path, contents)
            .await
            .map_err(|e| StoreError::write(path, e))?;
        debug!(path = %path, bytes = contents.len(), "appended to file");
        Ok(())
    }

    async fn remove_file(&self, path: &ResolvedPath) -> Result<(), StoreError> {
        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(path.as_path()).await),
            None => None,
        };

        fs::remove_file(path)
            .await
            .map_err(|e| StoreError::not_found(path, e))?;
        debug!(path = %path, "removed file");
        Ok(())
    }
}
