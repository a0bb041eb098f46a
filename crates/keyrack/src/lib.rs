//! Credential-storage accessor over a platform secure store.
//!
//! Stores, retrieves, enumerates, and deletes named secrets -- passwords
//! keyed by (service, account) -- in a secure store reached through the
//! narrow [`StoreGateway`] trait. The store itself (persistence,
//! encryption-at-rest, OS access control) lives behind that seam; this
//! crate owns query construction, result normalization, and the
//! translation of native status codes into a stable error taxonomy.
//!
//! ```
//! use std::sync::Arc;
//! use keyrack::{Keychain, MemoryStore};
//!
//! let keychain = Keychain::new(Arc::new(MemoryStore::new()));
//! keychain.set_password("mail", "alice", "p@ss1").unwrap();
//! assert_eq!(keychain.password("mail", "alice").unwrap().expose(), "p@ss1");
//! ```

pub mod error;
pub mod keychain;
pub mod memory;
#[cfg(target_os = "macos")]
pub mod platform;
pub mod query;
pub mod store;
pub mod types;

pub use error::{KeychainError, Result};
pub use keychain::Keychain;
pub use memory::MemoryStore;
#[cfg(target_os = "macos")]
pub use platform::MacKeychain;
pub use query::{QuerySpec, WriteAttributes};
pub use store::{StoreError, StoreGateway, StoreItem};
pub use types::{AccountRecord, Accessibility, ItemClass, Password, PasswordData};
