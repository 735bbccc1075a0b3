//! Builders to construct pools from configuration.

pub mod pool_builder;

pub use pool_builder::{BuiltPool, PoolBuilder};
