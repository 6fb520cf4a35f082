//! Environment overrides for stream settings
//!
//! Lives in its own test binary so the variable never leaks into tests that
//! expect file or default values. Everything runs inside one test because the
//! process environment is shared between threads.

use cadence_stream::{StreamError, StreamSettings};
use std::io::Write;

const TTL_VAR: &str = "CADENCE_STREAM__EXPIRY_TTL_SECS";

#[test]
fn environment_overrides_expiry_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[stream]\nexpiry_ttl_secs = 120").unwrap();

    std::env::set_var(TTL_VAR, "7200");

    let without_file = StreamSettings::load_from(&absent, false);
    let over_file = StreamSettings::load_from(file.path(), true);

    std::env::set_var(TTL_VAR, "0");
    let invalid = StreamSettings::load_from(&absent, false);

    std::env::remove_var(TTL_VAR);
    let restored = StreamSettings::load_from(file.path(), true);

    assert_eq!(without_file.unwrap().expiry_ttl_secs, 7200);
    assert_eq!(over_file.unwrap().expiry_ttl_secs, 7200);
    assert!(matches!(invalid, Err(StreamError::Config(_))));
    assert_eq!(restored.unwrap().expiry_ttl_secs, 120);
}
