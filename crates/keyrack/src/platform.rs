//! macOS secure-store gateway over Security.framework.
//!
//! Adapts the `security_framework` generic-password calls to the
//! [`StoreGateway`] contract. The passwords facade addresses one item at a
//! time, so this backend serves single-credential queries only; enumeration
//! queries report the native not-available status. It also does not expose
//! item attributes, so found items carry the key and secret but no
//! timestamps or annotations.

use security_framework::passwords::{
    delete_generic_password, get_generic_password, set_generic_password,
};
use tracing::debug;

use crate::query::{QuerySpec, WriteAttributes};
use crate::store::{status, StoreError, StoreGateway, StoreItem, StoreResult};
use crate::types::ItemClass;

/// Store gateway backed by the macOS keychain.
///
/// The accessibility token on write attributes is ignored here: the
/// passwords facade always stores with the system default. Use a
/// lower-level `SecItem` backend if per-item accessibility is required.
#[derive(Debug, Default)]
pub struct MacKeychain;

impl MacKeychain {
    /// Create a gateway over the user's default keychain.
    pub fn new() -> Self {
        Self
    }
}

impl StoreGateway for MacKeychain {
    fn add(&self, attrs: &WriteAttributes) -> StoreResult<()> {
        // set_generic_password upserts, so an explicit existence check is
        // needed to surface the duplicate status. Check-then-set is not
        // atomic; the keychain itself orders racing writers.
        match get_generic_password(&attrs.service, &attrs.account) {
            Ok(_) => Err(StoreError::duplicate_item()),
            Err(e) if e.code() == status::ITEM_NOT_FOUND => {
                debug!(service = %attrs.service, account = %attrs.account, "adding keychain item");
                set_generic_password(&attrs.service, &attrs.account, &attrs.secret)
                    .map_err(to_store_error)
            }
            Err(e) => Err(to_store_error(e)),
        }
    }

    fn update(&self, query: &QuerySpec, attrs: &WriteAttributes) -> StoreResult<()> {
        let (service, account) = single_key(query)?;
        match get_generic_password(service, account) {
            Ok(_) => set_generic_password(service, account, &attrs.secret)
                .map_err(to_store_error),
            Err(e) => Err(to_store_error(e)),
        }
    }

    fn delete(&self, query: &QuerySpec) -> StoreResult<()> {
        let (service, account) = single_key(query)?;
        delete_generic_password(service, account).map_err(to_store_error)
    }

    fn find(&self, query: &QuerySpec) -> StoreResult<Vec<StoreItem>> {
        let (service, account) = single_key(query)?;
        let secret = get_generic_password(service, account).map_err(to_store_error)?;
        Ok(vec![StoreItem {
            service: service.to_owned(),
            account: account.to_owned(),
            secret: query.return_data.then_some(secret),
            label: None,
            description: None,
            where_created: None,
            created_at: None,
            modified_at: None,
            class: ItemClass::GenericPassword,
        }])
    }
}

/// Require a fully-keyed single-item query.
fn single_key(query: &QuerySpec) -> StoreResult<(&str, &str)> {
    match (query.service.as_deref(), query.account.as_deref()) {
        (Some(service), Some(account)) => Ok((service, account)),
        _ => Err(StoreError::not_available(
            "the macOS passwords backend cannot enumerate items; \
             queries must name both service and account",
        )),
    }
}

fn to_store_error(e: security_framework::base::Error) -> StoreError {
    StoreError::new(e.code(), e.to_string())
}
