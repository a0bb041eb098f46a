//! In-memory store gateway.
//!
//! A complete [`StoreGateway`] implementation backed by a process-local map,
//! with the same status semantics as a platform keychain: duplicate on add,
//! not-found on a missed update/delete/find. Useful as the reference backend
//! in tests and on platforms without a system secure store.
//!
//! Secrets held here are only as protected as process memory; nothing is
//! persisted or encrypted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::query::{QuerySpec, WriteAttributes};
use crate::store::{StoreError, StoreGateway, StoreItem, StoreResult};
use crate::types::{Accessibility, ItemClass};

/// One stored generic-password item.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct Entry {
    secret: Vec<u8>,
    #[zeroize(skip)]
    accessibility: Option<Accessibility>,
    #[zeroize(skip)]
    label: Option<String>,
    #[zeroize(skip)]
    description: Option<String>,
    #[zeroize(skip)]
    where_created: Option<String>,
    #[zeroize(skip)]
    created_at: DateTime<Utc>,
    #[zeroize(skip)]
    modified_at: DateTime<Utc>,
}

/// An in-memory secure-store gateway.
///
/// Items are keyed by (service, account). Iteration order of `find` results
/// is the map's order and deliberately unspecified.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<(String, String), Entry>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accessibility token recorded for an item, if any.
    ///
    /// Test hook: lets callers verify which policy was in effect when an
    /// item was written.
    pub fn accessibility_of(&self, service: &str, account: &str) -> Option<Accessibility> {
        let items = self.items.lock();
        items
            .get(&(service.to_owned(), account.to_owned()))
            .and_then(|entry| entry.accessibility.clone())
    }
}

impl StoreGateway for MemoryStore {
    fn add(&self, attrs: &WriteAttributes) -> StoreResult<()> {
        let mut items = self.items.lock();
        let key = (attrs.service.clone(), attrs.account.clone());
        if items.contains_key(&key) {
            return Err(StoreError::duplicate_item());
        }
        let now = Utc::now();
        debug!(service = %attrs.service, account = %attrs.account, "adding item");
        items.insert(
            key,
            Entry {
                secret: attrs.secret.clone(),
                accessibility: attrs.accessibility.clone(),
                label: None,
                description: None,
                where_created: None,
                created_at: now,
                modified_at: now,
            },
        );
        Ok(())
    }

    fn update(&self, query: &QuerySpec, attrs: &WriteAttributes) -> StoreResult<()> {
        let mut items = self.items.lock();
        let mut touched = false;
        for ((service, account), entry) in items.iter_mut() {
            if !query.matches(service, account) {
                continue;
            }
            // Overwrite the secret, leave label/description/where alone.
            entry.secret.zeroize();
            entry.secret = attrs.secret.clone();
            if attrs.accessibility.is_some() {
                entry.accessibility = attrs.accessibility.clone();
            }
            entry.modified_at = Utc::now();
            touched = true;
        }
        if touched {
            Ok(())
        } else {
            Err(StoreError::item_not_found())
        }
    }

    fn delete(&self, query: &QuerySpec) -> StoreResult<()> {
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|(service, account), _| !query.matches(service, account));
        if items.len() == before {
            return Err(StoreError::item_not_found());
        }
        Ok(())
    }

    fn find(&self, query: &QuerySpec) -> StoreResult<Vec<StoreItem>> {
        let items = self.items.lock();
        let mut found: Vec<StoreItem> = items
            .iter()
            .filter(|((service, account), _)| query.matches(service, account))
            .map(|((service, account), entry)| StoreItem {
                service: service.clone(),
                account: account.clone(),
                secret: query.return_data.then(|| entry.secret.clone()),
                label: entry.label.clone(),
                description: entry.description.clone(),
                where_created: entry.where_created.clone(),
                created_at: Some(entry.created_at),
                modified_at: Some(entry.modified_at),
                class: ItemClass::GenericPassword,
            })
            .collect();
        if found.is_empty() {
            return Err(StoreError::item_not_found());
        }
        if !query.match_all {
            found.truncate(1);
        }
        Ok(found)
    }
}
