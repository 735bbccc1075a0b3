//! Pod identity, the counter contract, and the unschedulable pool.

pub mod error;
pub mod metrics;
pub mod pod;
pub mod unschedulable_pool;

pub use error::{AppResult, PoolError};
pub use metrics::{GaugeRecorder, MetricRecorder};
pub use pod::{PendingPod, PodKey};
pub use unschedulable_pool::{PoolStats, UnschedulablePool};
