//! Tests for configuration validation

use unschedulable_pool::config::PoolConfig;
use unschedulable_pool::core::PoolError;

#[test]
fn test_pool_config_defaults_are_valid() {
    let config = PoolConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.unschedulable_gauge, "unschedulable_pods");
    assert_eq!(config.gated_gauge, "gated_pods");
    assert!(config.log_drift);
}

#[test]
fn test_pool_config_empty_gauge_name() {
    let invalid = PoolConfig {
        unschedulable_gauge: "  ".into(),
        ..PoolConfig::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = PoolConfig {
        gated_gauge: String::new(),
        ..PoolConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_pool_config_duplicate_gauge_names() {
    let invalid = PoolConfig {
        unschedulable_gauge: "pods".into(),
        gated_gauge: "pods".into(),
        log_drift: false,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_pool_config_from_json() {
    let json = r#"{
        "unschedulable_gauge": "scheduler_unschedulable_pods",
        "gated_gauge": "scheduler_gated_pods",
        "log_drift": false
    }"#;

    let config = PoolConfig::from_json_str(json).unwrap();
    assert_eq!(config.unschedulable_gauge, "scheduler_unschedulable_pods");
    assert_eq!(config.gated_gauge, "scheduler_gated_pods");
    assert!(!config.log_drift);
}

#[test]
fn test_pool_config_from_json_fills_defaults() {
    let config = PoolConfig::from_json_str("{}").unwrap();
    assert_eq!(config, PoolConfig::default());
}

#[test]
fn test_pool_config_from_json_invalid() {
    assert!(matches!(
        PoolConfig::from_json_str("not json"),
        Err(PoolError::Config(msg)) if msg.starts_with("parse error")
    ));
    assert!(PoolConfig::from_json_str(r#"{"gated_gauge": "unschedulable_pods"}"#).is_err());
}
