//! 统一的应用状态。

use std::sync::Arc;

use flatfs_capabilities::LocalFileStore;
use flatfs_core::{FileStore, PathResolver};

use crate::config::GatewayConfig;

/// 所有请求共享的状态：服务根目录的路径解析器与文件存储。
#[derive(Clone)]
pub struct AppState {
    /// 路径解析器，持有根目录与路径策略。
    pub resolver: PathResolver,
    /// 文件存储。
    pub store: Arc<dyn FileStore>,
}

impl AppState {
    /// 以任意文件存储创建应用状态。
    pub fn new(resolver: PathResolver, store: Arc<dyn FileStore>) -> Self {
        Self { resolver, store }
    }

    /// 按配置创建基于本地磁盘的应用状态。
    pub fn from_config(config: &GatewayConfig) -> Self {
        let store = if config.serialize_writes {
            LocalFileStore::with_serialized_writes()
        } else {
            LocalFileStore::new()
        };
        Self::new(
            PathResolver::with_policy(config.root.clone(), config.path_policy),
            Arc::new(store),
        )
    }
}
