//! Tests for builder modules

use unschedulable_pool::builders::PoolBuilder;
use unschedulable_pool::config::PoolConfig;
use unschedulable_pool::core::{MetricRecorder, PendingPod, PodKey};

#[test]
fn test_pool_builder_names_gauges() {
    let config = PoolConfig {
        unschedulable_gauge: "sched_unschedulable".into(),
        gated_gauge: "sched_gated".into(),
        log_drift: true,
    };

    let builder = PoolBuilder::new(config);
    assert_eq!(builder.config().gated_gauge, "sched_gated");

    let built = builder.build::<()>().unwrap();
    assert_eq!(built.unschedulable.name(), "sched_unschedulable");
    assert_eq!(built.gated.name(), "sched_gated");
    assert!(built.pool.is_empty());
}

#[test]
fn test_pool_builder_handles_share_counters() {
    let built = PoolBuilder::new(PoolConfig::default()).build::<u8>().unwrap();
    built
        .pool
        .add_or_update(PendingPod::new(PodKey::new("ns1", "p0"), 1).gated_by("gate"), false, "PodAdd");
    built
        .pool
        .add_or_update(PendingPod::new(PodKey::new("ns1", "p1"), 2), false, "PodAdd");

    assert_eq!(built.gated.value(), 1);
    assert_eq!(built.unschedulable.value(), 1);
}

#[test]
fn test_pool_builder_rejects_invalid_config() {
    let config = PoolConfig {
        gated_gauge: "unschedulable_pods".into(),
        ..PoolConfig::default()
    };
    assert!(PoolBuilder::new(config).build::<()>().is_err());
}
