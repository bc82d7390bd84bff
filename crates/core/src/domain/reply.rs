pub const FILE_NOT_FOUND: &str = "File not found";
pub const FILE_SAVED: &str = "File saved";
pub const FILE_UPDATED: &str = "File updated";
pub const FILE_DELETED: &str = "File deleted";
pub const SERVER_ERROR: &str = "Server error";
pub const UNEXPECTED_METHOD: &str = "Unexpected method";
pub const ACCESS_DENIED: &str = "Access denied";
