//! Account enumeration integration tests.

use keyrack_integration_tests::memory_keychain;

#[test]
fn test_all_accounts_empty_store() {
    let kc = memory_keychain();
    let records = kc.all_accounts().unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_all_accounts_spans_services() {
    let kc = memory_keychain();
    kc.set_password("svcA", "alice", "a").unwrap();
    kc.set_password("svcB", "bob", "b").unwrap();

    let records = kc.all_accounts().unwrap();
    assert_eq!(records.len(), 2);

    // Order is unspecified; compare as a set.
    let mut keys: Vec<(String, String)> = records
        .iter()
        .map(|r| (r.service.clone(), r.account.clone()))
        .collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            ("svcA".to_string(), "alice".to_string()),
            ("svcB".to_string(), "bob".to_string()),
        ]
    );
}

#[test]
fn test_accounts_for_service_never_leaks_other_services() {
    let kc = memory_keychain();
    kc.set_password("svcA", "alice", "a").unwrap();
    kc.set_password("svcA", "bob", "b").unwrap();
    kc.set_password("svcB", "carol", "c").unwrap();

    let records = kc.accounts_for_service("svcA").unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.service == "svcA"));
}

#[test]
fn test_accounts_for_unknown_service_is_empty() {
    let kc = memory_keychain();
    kc.set_password("svcA", "alice", "a").unwrap();
    assert!(kc.accounts_for_service("svcZ").unwrap().is_empty());
}

#[test]
fn test_records_expose_metadata_not_secrets() {
    let kc = memory_keychain();
    kc.set_password("svcA", "alice", "top-secret").unwrap();

    let records = kc.all_accounts().unwrap();
    let json = serde_json::to_string(&records).unwrap();
    assert!(json.contains("alice"));
    assert!(!json.contains("top-secret"));
}

#[test]
fn test_records_carry_timestamps_from_memory_store() {
    let kc = memory_keychain();
    kc.set_password("svcA", "alice", "a").unwrap();

    let records = kc.all_accounts().unwrap();
    assert!(records[0].created_at.is_some());
    assert!(records[0].modified_at.is_some());
    assert!(records[0].label.is_none());
}
