//! System Capabilities - 本地文件系统能力。
//!
//! 为网关提供 `FileStore` 的本地磁盘实现，
//! 以及可选的按路径写入串行化。

pub mod filesystem;
pub mod locks;

pub use filesystem::LocalFileStore;
pub use locks::WriteLocks;
