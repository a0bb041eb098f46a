//! Credential lifecycle integration tests.
//!
//! These exercise the public accessor surface end-to-end against the
//! in-memory store backend: round-trips on both the string and byte paths,
//! the duplicate-item upsert, and the not-found behaviors.

use keyrack::KeychainError;
use keyrack_integration_tests::memory_keychain;

#[test]
fn test_string_round_trip() {
    let kc = memory_keychain();
    kc.set_password("mail", "alice", "p@ss1").unwrap();
    assert_eq!(kc.password("mail", "alice").unwrap().expose(), "p@ss1");
}

#[test]
fn test_binary_round_trip_exact_bytes() {
    let kc = memory_keychain();
    // Not valid UTF-8 anywhere.
    let secret = [0x00, 0xd8, 0xff, 0xfe, 0x80];
    kc.set_password_data("vault", "blob", &secret).unwrap();

    let data = kc.password_data("vault", "blob").unwrap();
    assert_eq!(data.expose(), &secret);

    // The string path must refuse the same bytes, not mangle them.
    assert!(matches!(
        kc.password("vault", "blob"),
        Err(KeychainError::FailedToDecode(_))
    ));
}

#[test]
fn test_overwrite_via_duplicate_fallback() {
    let kc = memory_keychain();
    kc.set_password("mail", "alice", "p@ss1").unwrap();
    kc.set_password("mail", "alice", "p@ss2").unwrap();
    assert_eq!(kc.password("mail", "alice").unwrap().expose(), "p@ss2");
}

#[test]
fn test_lifecycle_scenario() {
    let kc = memory_keychain();

    kc.set_password("mail", "alice", "p@ss1").unwrap();
    assert_eq!(kc.password("mail", "alice").unwrap().expose(), "p@ss1");

    kc.set_password("mail", "alice", "p@ss2").unwrap();
    assert_eq!(kc.password("mail", "alice").unwrap().expose(), "p@ss2");

    kc.delete_password("mail", "alice").unwrap();

    let get_err = kc.password("mail", "alice").unwrap_err();
    assert!(matches!(get_err, KeychainError::NoPassword(_)));
    assert_eq!(get_err.code(), -1002);

    let delete_err = kc.delete_password("mail", "alice").unwrap_err();
    assert!(matches!(delete_err, KeychainError::NotFound(_)));
    assert_eq!(delete_err.code(), -25300);
}

#[test]
fn test_empty_arguments_do_not_mutate() {
    let kc = memory_keychain();
    assert!(matches!(
        kc.set_password("", "alice", "x"),
        Err(KeychainError::BadArguments(_))
    ));
    assert!(matches!(
        kc.set_password("mail", "", "x"),
        Err(KeychainError::BadArguments(_))
    ));
    assert!(kc.all_accounts().unwrap().is_empty());
}
