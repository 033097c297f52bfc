//! Handler failures and the HTTP status each one maps to

use serde::Serialize;
use thiserror::Error;

use crate::core::error::{HubError, StorageError, ValidationError};

/// Failure class of a handler call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No message with the requested id (404)
    NotFound,
    /// Malformed query, body, status or participant (400)
    BadRequest,
    /// The ledger could not be read or written (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this class
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Internal => 500,
        }
    }

    /// Wire name used in the `error.code` field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Error returned by every `api` handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .code.as_str())]
pub struct ApiError {
    /// Failure class
    pub code: ErrorCode,
    /// Text shown to the caller
    pub message: String,
}

impl ApiError {
    fn with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown message id
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::NotFound, message)
    }

    /// Input the hub refuses
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::BadRequest, message)
    }

    /// Storage failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::Internal, message)
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        log::error!("Storage failure: {err}");
        Self::internal(err.to_string())
    }
}

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        match err {
            HubError::Validation(e) => e.into(),
            HubError::Storage(e) => e.into(),
        }
    }
}

/// `error` member of a failed [`ApiResponse`](super::ApiResponse)
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Wire name of the [`ErrorCode`]
    pub code: String,
    /// Text shown to the caller
    pub message: String,
}
