//! Tests for error types

use unschedulable_pool::core::{PodKey, PoolError};

#[test]
fn test_invalid_key_error() {
    let err = PoolError::InvalidKey("p0".to_string());
    assert_eq!(format!("{}", err), "invalid pod key: p0");
}

#[test]
fn test_config_error() {
    let err = PoolError::Config("gated_gauge must not be empty".to_string());
    assert_eq!(format!("{}", err), "config error: gated_gauge must not be empty");
}

#[test]
fn test_parse_error_surfaces_input() {
    let err = PodKey::from_full_name("no-separator").unwrap_err();
    assert_eq!(err.to_string(), "invalid pod key: no-separator");
}

#[test]
fn test_errors_convert_to_anyhow() {
    let result: unschedulable_pool::core::AppResult<PodKey> =
        PodKey::from_full_name("a_b_c").map_err(Into::into);
    assert!(result.unwrap_err().to_string().contains("a_b_c"));
}
