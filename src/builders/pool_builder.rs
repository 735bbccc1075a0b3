//! Builder constructing an unschedulable pool from configuration.

use std::sync::Arc;

use crate::config::PoolConfig;
use crate::core::{GaugeRecorder, PoolError, UnschedulablePool};

/// A pool together with export handles for both of its gauges.
pub struct BuiltPool<P> {
    /// The pool itself.
    pub pool: UnschedulablePool<P>,
    /// Handle sharing the unschedulable counter.
    pub unschedulable: GaugeRecorder,
    /// Handle sharing the gated counter.
    pub gated: GaugeRecorder,
}

/// Builds an [`UnschedulablePool`] bound to freshly created gauges.
#[derive(Debug, Clone)]
pub struct PoolBuilder {
    config: PoolConfig,
}

impl PoolBuilder {
    /// Create a builder from configuration.
    pub const fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Configuration the builder was created with.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Validate the configuration and build the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] when the configuration is invalid.
    pub fn build<P>(&self) -> Result<BuiltPool<P>, PoolError> {
        self.config.validate().map_err(PoolError::Config)?;

        let unschedulable = GaugeRecorder::new(self.config.unschedulable_gauge.as_str());
        let gated = GaugeRecorder::new(self.config.gated_gauge.as_str());
        let pool = UnschedulablePool::new(Arc::new(unschedulable.clone()), Arc::new(gated.clone()))
            .with_drift_logging(self.config.log_drift);

        Ok(BuiltPool {
            pool,
            unschedulable,
            gated,
        })
    }
}
