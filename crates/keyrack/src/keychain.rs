//! The public accessor surface.
//!
//! [`Keychain`] composes the query builder, a store gateway, and the error
//! translator into the credential operations callers use: get/set/delete
//! password, account enumeration, and the accessibility policy applied to
//! future writes.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{translate, KeychainError, Result};
use crate::query::{validate_key, QuerySpec, WriteAttributes};
use crate::store::{status, StoreGateway};
use crate::types::{AccountRecord, Accessibility, Password, PasswordData};

/// Accessor for named secrets in a secure store.
///
/// All operations are synchronous, blocking calls into the gateway. Reads
/// are idempotent; the set-password upsert is two gateway calls and is not
/// atomic under contention (racing writers to the same key are ordered only
/// by the store itself).
///
/// The accessibility policy is held per instance, defaults to "store
/// default" (`None`), and is read at the moment each write executes.
/// Concurrent policy writers race; last write wins.
pub struct Keychain {
    store: Arc<dyn StoreGateway>,
    accessibility: RwLock<Option<Accessibility>>,
}

impl Keychain {
    /// Create an accessor over the given store gateway.
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            store,
            accessibility: RwLock::new(None),
        }
    }

    /// The password for the given service and account, as a string.
    ///
    /// # Errors
    ///
    /// `BadArguments` when service or account is empty, `NoPassword` when no
    /// matching credential exists, `FailedToDecode` when the stored bytes
    /// are not valid UTF-8.
    pub fn password(&self, service: &str, account: &str) -> Result<Password> {
        let bytes = self.lookup_secret(service, account)?;
        String::from_utf8(bytes).map(Password::new).map_err(|_| {
            KeychainError::FailedToDecode(format!(
                "password for `{service}`/`{account}` is not valid UTF-8"
            ))
        })
    }

    /// The password for the given service and account, as raw bytes.
    ///
    /// Bytes are returned exactly as stored, so encoding-sensitive content
    /// (a BOM, non-UTF-8 data) survives untouched.
    ///
    /// # Errors
    ///
    /// `BadArguments` when service or account is empty, `NoPassword` when no
    /// matching credential exists.
    pub fn password_data(&self, service: &str, account: &str) -> Result<PasswordData> {
        self.lookup_secret(service, account).map(PasswordData::new)
    }

    /// Store a password string for the given service and account,
    /// overwriting any existing value.
    ///
    /// # Errors
    ///
    /// `BadArguments` when service or account is empty; otherwise the
    /// translated store error.
    pub fn set_password(&self, service: &str, account: &str, password: &str) -> Result<()> {
        self.set_password_data(service, account, password.as_bytes())
    }

    /// Store raw password bytes for the given service and account,
    /// overwriting any existing value.
    ///
    /// Writes attempt an `add` first; when the store reports a duplicate,
    /// the existing item is updated in place (secret overwritten, other
    /// attributes untouched). The two calls are not atomic.
    ///
    /// # Errors
    ///
    /// `BadArguments` when service or account is empty; otherwise the
    /// translated store error.
    pub fn set_password_data(&self, service: &str, account: &str, secret: &[u8]) -> Result<()> {
        let attrs = WriteAttributes::new(service, account, secret, self.accessibility())?;
        match self.store.add(&attrs) {
            Ok(()) => Ok(()),
            Err(err) if err.code == status::DUPLICATE_ITEM => {
                debug!(service, account, "item exists, updating in place");
                let query = QuerySpec::lookup(Some(service), Some(account));
                self.store.update(&query, &attrs).map_err(translate)
            }
            Err(err) => Err(translate(err)),
        }
    }

    /// Delete the credential for the given service and account.
    ///
    /// # Errors
    ///
    /// `BadArguments` when service or account is empty, `NotFound` when no
    /// such credential exists.
    pub fn delete_password(&self, service: &str, account: &str) -> Result<()> {
        validate_key(service, account)?;
        debug!(service, account, "deleting credential");
        let query = QuerySpec::lookup(Some(service), Some(account));
        self.store.delete(&query).map_err(translate)
    }

    /// Every account in the store, across all services.
    ///
    /// An empty store yields an empty list, not an error. Order is
    /// unspecified.
    pub fn all_accounts(&self) -> Result<Vec<AccountRecord>> {
        self.enumerate(QuerySpec::lookup(None, None).match_all())
    }

    /// The accounts stored for one service.
    ///
    /// No accounts for the service yields an empty list, not an error.
    /// Order is unspecified.
    pub fn accounts_for_service(&self, service: &str) -> Result<Vec<AccountRecord>> {
        self.enumerate(QuerySpec::lookup(Some(service), None).match_all())
    }

    /// The accessibility policy applied to future writes, or `None` for the
    /// store default.
    pub fn accessibility(&self) -> Option<Accessibility> {
        self.accessibility.read().clone()
    }

    /// Set the accessibility policy applied to future writes. `None`
    /// restores the store default. Items already stored are unaffected.
    pub fn set_accessibility(&self, policy: Option<Accessibility>) {
        *self.accessibility.write() = policy;
    }

    /// Fetch the secret bytes for one credential, synthesizing `NoPassword`
    /// for both a store-level miss and a matched item without a payload.
    fn lookup_secret(&self, service: &str, account: &str) -> Result<Vec<u8>> {
        validate_key(service, account)?;
        let query = QuerySpec::lookup(Some(service), Some(account)).with_data();
        match self.store.find(&query) {
            Ok(items) => items
                .into_iter()
                .next()
                .and_then(|item| item.secret)
                .ok_or_else(|| no_password(service, account)),
            Err(err) if err.code == status::ITEM_NOT_FOUND => {
                Err(no_password(service, account))
            }
            Err(err) => Err(translate(err)),
        }
    }

    /// Run an enumeration query, mapping the store's not-found status to an
    /// empty result.
    fn enumerate(&self, query: QuerySpec) -> Result<Vec<AccountRecord>> {
        match self.store.find(&query) {
            Ok(items) => Ok(items.into_iter().map(AccountRecord::from).collect()),
            Err(err) if err.code == status::ITEM_NOT_FOUND => Ok(Vec::new()),
            Err(err) => Err(translate(err)),
        }
    }
}

fn no_password(service: &str, account: &str) -> KeychainError {
    KeychainError::NoPassword(format!(
        "no password for service `{service}` account `{account}`"
    ))
}
