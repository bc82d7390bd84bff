//! 按路径的写入互斥。

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// 每个路径一把异步锁，持有期间同一路径上的其他写操作等待。
///
/// 路径按解析结果原样作为键，不做规范化。
#[derive(Clone, Default)]
pub struct WriteLocks {
    inner: Arc<Mutex<HashMap<PathBuf, Arc<AsyncMutex<()>>>>>,
}

impl WriteLocks {
    /// 创建空的锁表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取指定路径的锁，返回的 guard 释放时解锁。
    pub async fn acquire(&self, path: &Path) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            // 只剩锁表自身引用的条目已无人持有
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(path.to_path_buf()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// 锁表中的条目数。已释放的条目要到下一次 `acquire` 时才被清理。
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
