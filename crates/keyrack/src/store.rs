//! The secure-store gateway contract.
//!
//! Defines the [`StoreGateway`] trait -- the four primitives this library
//! needs from a platform secure store -- along with the raw item and error
//! shapes a gateway produces. Gateways report failures with the store's
//! native status codes; translation into [`crate::error::KeychainError`]
//! happens above this seam, never inside it.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::query::{QuerySpec, WriteAttributes};
use crate::types::ItemClass;

/// Native status codes used by secure-store gateways.
///
/// The values match the classic Security framework `OSStatus` constants so
/// that errors translated by this library keep their well-known numeric
/// identities on every backend.
pub mod status {
    /// Operation completed (`noErr`).
    pub const SUCCESS: i32 = 0;
    /// Some of the caller-supplied arguments were invalid.
    pub const BAD_ARGUMENTS: i32 = -1001;
    /// A matching item exists but carries no secret payload.
    pub const NO_PASSWORD: i32 = -1002;
    /// One or more parameters passed internally were not valid (`errSecParam`).
    pub const INVALID_PARAMETER: i32 = -50;
    /// Failed to allocate memory (`errSecAllocate`).
    pub const FAILED_TO_ALLOCATE: i32 = -108;
    /// The store is not available (`errSecNotAvailable`).
    pub const NOT_AVAILABLE: i32 = -25291;
    /// Authorization or authentication failed (`errSecAuthFailed`).
    pub const AUTHORIZATION_FAILED: i32 = -25293;
    /// An item with the same key already exists (`errSecDuplicateItem`).
    pub const DUPLICATE_ITEM: i32 = -25299;
    /// The item could not be found (`errSecItemNotFound`).
    pub const ITEM_NOT_FOUND: i32 = -25300;
    /// Interaction with the store is not allowed (`errSecInteractionNotAllowed`).
    pub const INTERACTION_NOT_ALLOWED: i32 = -25308;
    /// The stored data could not be decoded (`errSecDecode`).
    pub const FAILED_TO_DECODE: i32 = -26275;
}

/// A raw failure from a store gateway: the native status code plus a
/// human-readable message. Translated into a `KeychainError` before it
/// reaches callers of the accessor API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Native status code.
    pub code: i32,
    /// Human-readable description of the failure.
    pub message: String,
}

impl StoreError {
    /// Create a store error from a native code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The native "item already exists" failure.
    pub fn duplicate_item() -> Self {
        Self::new(status::DUPLICATE_ITEM, "the item already exists")
    }

    /// The native "item could not be found" failure.
    pub fn item_not_found() -> Self {
        Self::new(status::ITEM_NOT_FOUND, "the item cannot be found")
    }

    /// The native "not available" failure with a backend-specific reason.
    pub fn not_available(message: impl Into<String>) -> Self {
        Self::new(status::NOT_AVAILABLE, message)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

/// Convenience result alias for gateway operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A raw item as returned by a gateway `find` call.
///
/// `secret` is populated only when the query requested data. Attribute
/// fields a backend does not track are `None`.
#[derive(Clone)]
pub struct StoreItem {
    /// Service the item belongs to.
    pub service: String,
    /// Account the item belongs to.
    pub account: String,
    /// Raw secret bytes, present only for data-returning queries.
    pub secret: Option<Vec<u8>>,
    /// Display label, if the store tracks one.
    pub label: Option<String>,
    /// Free-form description, if the store tracks one.
    pub description: Option<String>,
    /// "Where created" annotation, if the store tracks one.
    pub where_created: Option<String>,
    /// Creation time, if the store tracks it.
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time, if the store tracks it.
    pub modified_at: Option<DateTime<Utc>>,
    /// Kind of the underlying item.
    pub class: ItemClass,
}

// Never print secret bytes, even at debug level.
impl fmt::Debug for StoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreItem")
            .field("service", &self.service)
            .field("account", &self.account)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("label", &self.label)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

/// The narrow interface to the external secure-store capability.
///
/// Implementations own persistence, encryption-at-rest, and any OS-level
/// access control. This library only issues these four calls and interprets
/// their results.
pub trait StoreGateway: Send + Sync {
    /// Add a new item. Fails with the native duplicate-item status if an
    /// item with the same (service, account) key already exists.
    fn add(&self, attrs: &WriteAttributes) -> StoreResult<()>;

    /// Overwrite the secret of the item(s) matching `query`, leaving other
    /// attributes alone. Fails with the native not-found status when nothing
    /// matches.
    fn update(&self, query: &QuerySpec, attrs: &WriteAttributes) -> StoreResult<()>;

    /// Delete the item(s) matching `query`. Fails with the native not-found
    /// status when nothing matches.
    fn delete(&self, query: &QuerySpec) -> StoreResult<()>;

    /// Return the item(s) matching `query`. Zero matches is reported as the
    /// native not-found status, mirroring `SecItemCopyMatching`; callers
    /// decide whether that means "empty result" or "no password".
    fn find(&self, query: &QuerySpec) -> StoreResult<Vec<StoreItem>>;
}
