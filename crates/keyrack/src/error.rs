//! Error taxonomy and native-code translation.
//!
//! Every public operation returns [`Result`]. Gateway failures carry native
//! store status codes and are mapped into the closed [`KeychainError`] set
//! by [`translate`]; unknown codes pass through as [`KeychainError::Unmapped`]
//! with the native code preserved, never silently coerced to success.

use thiserror::Error;

use crate::store::{status, StoreError};

/// Fixed domain identifier reported alongside error codes.
pub const DOMAIN: &str = "dev.keyrack";

/// Errors that can occur during keychain operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeychainError {
    /// Some of the caller-supplied arguments were invalid.
    #[error("some of the arguments were invalid: {0}")]
    BadArguments(String),

    /// There was no password for the requested item.
    #[error("there was no password: {0}")]
    NoPassword(String),

    /// One or more parameters passed internally were not valid.
    #[error("one or more parameters were not valid: {0}")]
    InvalidParameter(String),

    /// Failed to allocate memory.
    #[error("failed to allocate memory: {0}")]
    FailedToAllocate(String),

    /// The secure store is not available.
    #[error("the secure store is not available: {0}")]
    NotAvailable(String),

    /// Authorization or authentication failed.
    #[error("authorization failed: {0}")]
    AuthorizationFailed(String),

    /// An item with the same service and account already exists.
    #[error("the item already exists: {0}")]
    DuplicateItem(String),

    /// The item could not be found.
    #[error("the item cannot be found: {0}")]
    NotFound(String),

    /// Interaction with the secure store is not allowed.
    #[error("interaction with the secure store is not allowed: {0}")]
    InteractionNotAllowed(String),

    /// The stored data could not be decoded.
    #[error("unable to decode the stored data: {0}")]
    FailedToDecode(String),

    /// A native status code outside the closed taxonomy. The code is
    /// preserved verbatim so callers can still act on it.
    #[error("secure store error {code}: {message}")]
    Unmapped {
        /// The native status code as reported by the store.
        code: i32,
        /// Human-readable description of the failure.
        message: String,
    },
}

impl KeychainError {
    /// The numeric status code for this error.
    ///
    /// Mapped variants report the classic Security framework values; the
    /// `Unmapped` variant reports whatever the store produced.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadArguments(_) => status::BAD_ARGUMENTS,
            Self::NoPassword(_) => status::NO_PASSWORD,
            Self::InvalidParameter(_) => status::INVALID_PARAMETER,
            Self::FailedToAllocate(_) => status::FAILED_TO_ALLOCATE,
            Self::NotAvailable(_) => status::NOT_AVAILABLE,
            Self::AuthorizationFailed(_) => status::AUTHORIZATION_FAILED,
            Self::DuplicateItem(_) => status::DUPLICATE_ITEM,
            Self::NotFound(_) => status::ITEM_NOT_FOUND,
            Self::InteractionNotAllowed(_) => status::INTERACTION_NOT_ALLOWED,
            Self::FailedToDecode(_) => status::FAILED_TO_DECODE,
            Self::Unmapped { code, .. } => *code,
        }
    }

    /// The fixed domain identifier for this error family.
    pub fn domain(&self) -> &'static str {
        DOMAIN
    }
}

/// Map a native store failure into the closed taxonomy.
///
/// Pure function of the status code: known codes get their named variant,
/// everything else becomes [`KeychainError::Unmapped`] carrying the native
/// code and message.
pub fn translate(err: StoreError) -> KeychainError {
    match err.code {
        status::BAD_ARGUMENTS => KeychainError::BadArguments(err.message),
        status::NO_PASSWORD => KeychainError::NoPassword(err.message),
        status::INVALID_PARAMETER => KeychainError::InvalidParameter(err.message),
        status::FAILED_TO_ALLOCATE => KeychainError::FailedToAllocate(err.message),
        status::NOT_AVAILABLE => KeychainError::NotAvailable(err.message),
        status::AUTHORIZATION_FAILED => KeychainError::AuthorizationFailed(err.message),
        status::DUPLICATE_ITEM => KeychainError::DuplicateItem(err.message),
        status::ITEM_NOT_FOUND => KeychainError::NotFound(err.message),
        status::INTERACTION_NOT_ALLOWED => KeychainError::InteractionNotAllowed(err.message),
        status::FAILED_TO_DECODE => KeychainError::FailedToDecode(err.message),
        _ => KeychainError::Unmapped {
            code: err.code,
            message: err.message,
        },
    }
}

impl From<StoreError> for KeychainError {
    fn from(err: StoreError) -> Self {
        translate(err)
    }
}

/// Convenience result alias for keychain operations.
pub type Result<T> = std::result::Result<T, KeychainError>;
