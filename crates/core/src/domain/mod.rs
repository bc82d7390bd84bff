mod error;
mod method;
mod path;
mod reply;
mod store;

pub use error::GatewayError;
pub use method::FileMethod;
pub use path::{PathPolicy, PathResolver, ResolvedPath};
pub use reply::{
    ACCESS_DENIED, FILE_DELETED, FILE_NOT_FOUND, FILE_SAVED, FILE_UPDATED, SERVER_ERROR,
    UNEXPECTED_METHOD,
};
pub use store::{FileStore, PathStat, StoreError};
