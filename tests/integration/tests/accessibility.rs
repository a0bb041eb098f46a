//! Accessibility policy integration tests.
//!
//! The policy is held per accessor instance and read at write time, so two
//! keychains in one process can run with independent configurations.

use std::sync::Arc;

use keyrack::{Accessibility, Keychain, MemoryStore};

#[test]
fn test_policy_applies_at_write_time() {
    let store = Arc::new(MemoryStore::new());
    let kc = Keychain::new(Arc::clone(&store) as Arc<dyn keyrack::StoreGateway>);

    kc.set_password("mail", "before", "x").unwrap();
    kc.set_accessibility(Some(Accessibility::new("when-unlocked")));
    kc.set_password("mail", "after", "y").unwrap();

    assert_eq!(store.accessibility_of("mail", "before"), None);
    assert_eq!(
        store.accessibility_of("mail", "after"),
        Some(Accessibility::new("when-unlocked"))
    );
}

#[test]
fn test_instances_hold_independent_policies() {
    let kc_a = Keychain::new(Arc::new(MemoryStore::new()));
    let kc_b = Keychain::new(Arc::new(MemoryStore::new()));

    kc_a.set_accessibility(Some(Accessibility::new("after-first-unlock")));

    assert_eq!(
        kc_a.accessibility(),
        Some(Accessibility::new("after-first-unlock"))
    );
    assert_eq!(kc_b.accessibility(), None);
}

#[test]
fn test_policy_survives_upsert() {
    let store = Arc::new(MemoryStore::new());
    let kc = Keychain::new(Arc::clone(&store) as Arc<dyn keyrack::StoreGateway>);

    kc.set_password("mail", "alice", "p@ss1").unwrap();
    kc.set_accessibility(Some(Accessibility::new("when-unlocked")));
    // Second write goes through the duplicate-item fallback and must still
    // apply the policy in effect at write time.
    kc.set_password("mail", "alice", "p@ss2").unwrap();

    assert_eq!(
        store.accessibility_of("mail", "alice"),
        Some(Accessibility::new("when-unlocked"))
    );
    assert_eq!(kc.password("mail", "alice").unwrap().expose(), "p@ss2");
}

#[test]
fn test_clearing_policy_restores_default() {
    let kc = Keychain::new(Arc::new(MemoryStore::new()));
    kc.set_accessibility(Some(Accessibility::new("when-unlocked")));
    kc.set_accessibility(None);
    assert_eq!(kc.accessibility(), None);
}
