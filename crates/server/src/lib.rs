//! flatfs - 以 HTTP 方法直接操作单个目录树的文件网关。

pub mod api;
pub mod config;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use api::AppState;
pub use config::GatewayConfig;

/// 组装完整的应用路由。
pub fn app(state: AppState) -> Router {
    api::create_file_router()
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
