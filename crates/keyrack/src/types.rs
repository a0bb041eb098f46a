//! Core types for credential access.
//!
//! Retrieved secrets come back as [`Password`] (string view) or
//! [`PasswordData`] (byte view) -- zeroed on drop, redacted in Debug/Display.
//! Enumeration returns [`AccountRecord`] projections that carry metadata
//! only, so they are safe to pass around, log, or serialize.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::store::StoreItem;

/// Kind of the underlying store item.
///
/// This accessor only reads and writes generic-password items; the tag is
/// carried on enumeration records so callers can tell item kinds apart if a
/// backend ever surfaces more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemClass {
    /// A generic password item, keyed by user-defined attributes.
    #[serde(rename = "genp")]
    GenericPassword,
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericPassword => f.write_str("genp"),
        }
    }
}

/// An opaque accessibility token.
///
/// The recognized values are whatever the underlying store defines as valid
/// accessibility levels; this library passes them through without
/// interpreting them. `None` at the accessor level means "use the store
/// default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility(String);

impl Accessibility {
    /// Wrap a store-defined accessibility token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for handing to a store backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Accessibility {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A retrieved password, string view.
///
/// Zeroed on drop; Debug and Display both emit `[REDACTED]` to prevent
/// accidental logging.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    inner: String,
}

impl Password {
    /// Wrap a plaintext password.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Expose the plaintext value. Use sparingly.
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// A retrieved password, raw byte view.
///
/// The bytes are returned exactly as stored -- including content that is not
/// valid UTF-8 -- and zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PasswordData {
    inner: Vec<u8>,
}

impl PasswordData {
    /// Wrap raw secret bytes.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Expose the raw bytes. Use sparingly.
    pub fn expose(&self) -> &[u8] {
        &self.inner
    }
}

impl fmt::Debug for PasswordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for PasswordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// A read-only projection of a stored credential, as returned by
/// enumeration. Contains metadata only -- no secret material.
///
/// Attributes the backend does not track are `None`, never placeholder
/// strings. Result order is whatever the store produced; callers must not
/// depend on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account name.
    pub account: String,

    /// Service the account belongs to.
    pub service: String,

    /// Time the item was created, if tracked.
    pub created_at: Option<DateTime<Utc>>,

    /// Time the item was last modified, if tracked.
    pub modified_at: Option<DateTime<Utc>>,

    /// Display label, if any.
    pub label: Option<String>,

    /// Free-form description, if any.
    pub description: Option<String>,

    /// "Where created" annotation, if any.
    pub where_created: Option<String>,

    /// Kind of the underlying item.
    pub class: ItemClass,
}

impl From<StoreItem> for AccountRecord {
    fn from(item: StoreItem) -> Self {
        Self {
            account: item.account,
            service: item.service,
            created_at: item.created_at,
            modified_at: item.modified_at,
            label: item.label,
            description: item.description,
            where_created: item.where_created,
            class: item.class,
        }
    }
}
