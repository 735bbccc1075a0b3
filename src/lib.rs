//! # Unschedulable Pool
//!
//! Holding area for pods a scheduler could not place, or that a gating plugin
//! is deliberately holding back, until something external triggers a retry.
//!
//! The pool is a keyed store paired with two counters: one for pods that failed
//! placement (unschedulable) and one for pods held by a gate (gated). After
//! every operation the counters equal the number of ungated and gated pods in
//! the store, provided callers report each pod's previous gating state
//! accurately.
//!
//! ## What the pool does not do
//!
//! - Decide when or in which order pods are retried
//! - Decide which cluster events release which pods
//! - Place pods on nodes
//! - Persist anything across restarts
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use unschedulable_pool::core::{GaugeRecorder, MetricRecorder, PendingPod, PodKey, UnschedulablePool};
//!
//! let unschedulable = GaugeRecorder::new("unschedulable_pods");
//! let gated = GaugeRecorder::new("gated_pods");
//! let pool = UnschedulablePool::new(Arc::new(unschedulable.clone()), Arc::new(gated.clone()));
//!
//! let key = PodKey::new("default", "web-0");
//! pool.add_or_update(PendingPod::new(key.clone(), "spec"), false, "PodAdd");
//! assert_eq!(unschedulable.value(), 1);
//!
//! // The gate now holds the pod: it moves between counters.
//! let gated_before = pool.is_gated(&key);
//! pool.add_or_update(PendingPod::new(key.clone(), "spec").gated_by("SchedulingGates"), gated_before, "PodUpdate");
//! assert_eq!((unschedulable.value(), gated.value()), (0, 1));
//!
//! pool.delete(&key, pool.is_gated(&key));
//! assert!(pool.is_empty());
//! assert_eq!(gated.value(), 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Pod identity, the counter contract, and the pool itself.
pub mod core;
/// Configuration models for the pool.
pub mod config;
/// Builders to construct pools from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
