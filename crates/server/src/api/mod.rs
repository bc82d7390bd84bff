//! API 路由模块。
//!
//! 将 HTTP 方法与路径映射为对服务目录的文件操作。

pub mod body;
pub mod files;
pub mod response;
pub mod state;

pub use body::{AccumulatedBody, accumulate};
pub use files::create_file_router;
pub use state::AppState;
