use thiserror::Error;

use super::StoreError;
use super::reply::{ACCESS_DENIED, FILE_NOT_FOUND, SERVER_ERROR, UNEXPECTED_METHOD};

/// Failure taxonomy seen at the router boundary. Each kind maps onto one fixed
/// status/body pair.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("file not found")]
    NotFound,
    #[error("failed to write file")]
    WriteError,
    #[error("unexpected method")]
    UnexpectedMethod,
    #[error("path resolves outside the served root")]
    OutsideRoot,
}

impl GatewayError {
    pub fn status(self) -> u16 {
        match self {
            Self::NotFound | Self::UnexpectedMethod => 404,
            Self::WriteError => 500,
            Self::OutsideRoot => 403,
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Self::NotFound => FILE_NOT_FOUND,
            Self::WriteError => SERVER_ERROR,
            Self::UnexpectedMethod => UNEXPECTED_METHOD,
            Self::OutsideRoot => ACCESS_DENIED,
        }
    }
}

impl From<StoreError> for GatewayError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound,
            StoreError::Write { .. } => Self::WriteError,
        }
    }
}
