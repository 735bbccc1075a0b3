//! Configuration for the pool's counters and diagnostics.

pub mod pool;

pub use pool::PoolConfig;
