//! Query construction.
//!
//! Translates semantic parameters (service name, account name, accessibility
//! policy) into the typed query and attribute sets the store gateway works
//! with, replacing the stringly-keyed attribute dictionaries of classic
//! keychain APIs.
//!
//! Service and account names are compared by exact string equality; no case
//! folding or trimming is performed. Callers are responsible for canonical
//! names.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KeychainError, Result};
use crate::types::Accessibility;

/// A query against the store's generic-password items.
///
/// Absent filters match everything, so `QuerySpec::lookup(None, None)` is the
/// enumeration query. Lookups always request matching attributes; callers
/// that need the secret payload add [`with_data`](Self::with_data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Exact-match service filter, if any.
    pub service: Option<String>,
    /// Exact-match account filter, if any.
    pub account: Option<String>,
    /// Return every matching item instead of the first one.
    pub match_all: bool,
    /// Return the secret payload alongside the attributes.
    pub return_data: bool,
}

impl QuerySpec {
    /// Build a lookup query. Both filters are optional; when both are absent
    /// the query matches every generic-password item in the store.
    pub fn lookup(service: Option<&str>, account: Option<&str>) -> Self {
        Self {
            service: service.map(str::to_owned),
            account: account.map(str::to_owned),
            match_all: false,
            return_data: false,
        }
    }

    /// Request the secret payload in the result.
    #[must_use]
    pub fn with_data(mut self) -> Self {
        self.return_data = true;
        self
    }

    /// Request every matching item (enumeration) instead of the first.
    #[must_use]
    pub fn match_all(mut self) -> Self {
        self.match_all = true;
        self
    }

    /// Whether an item with the given key satisfies this query's filters.
    /// Exact string equality, no normalization.
    pub fn matches(&self, service: &str, account: &str) -> bool {
        self.service.as_deref().map_or(true, |s| s == service)
            && self.account.as_deref().map_or(true, |a| a == account)
    }
}

/// The attribute set for a store write (add or update).
///
/// Construction validates that service and account are non-empty -- a caller
/// error surfaced as `BadArguments` before any gateway call is made. The
/// accessibility token, when present, is the policy in effect at the moment
/// the write was issued.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WriteAttributes {
    /// Service the item belongs to.
    pub service: String,
    /// Account the item belongs to.
    pub account: String,
    /// Raw secret bytes to store.
    pub secret: Vec<u8>,
    /// Accessibility policy to apply, or `None` for the store default.
    #[zeroize(skip)]
    pub accessibility: Option<Accessibility>,
}

impl WriteAttributes {
    /// Build the attribute set for a write.
    ///
    /// # Errors
    ///
    /// Returns `BadArguments` when `service` or `account` is empty.
    pub fn new(
        service: &str,
        account: &str,
        secret: &[u8],
        accessibility: Option<Accessibility>,
    ) -> Result<Self> {
        validate_key(service, account)?;
        Ok(Self {
            service: service.to_owned(),
            account: account.to_owned(),
            secret: secret.to_vec(),
            accessibility,
        })
    }
}

// Never print secret bytes.
impl fmt::Debug for WriteAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteAttributes")
            .field("service", &self.service)
            .field("account", &self.account)
            .field("secret", &"[REDACTED]")
            .field("accessibility", &self.accessibility)
            .finish()
    }
}

/// Check that a single-credential operation names both halves of its key.
///
/// # Errors
///
/// Returns `BadArguments` when `service` or `account` is empty.
pub fn validate_key(service: &str, account: &str) -> Result<()> {
    if service.is_empty() {
        return Err(KeychainError::BadArguments(
            "service must not be empty".to_string(),
        ));
    }
    if account.is_empty() {
        return Err(KeychainError::BadArguments(
            "account must not be empty".to_string(),
        ));
    }
    Ok(())
}
