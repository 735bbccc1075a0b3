//! Counter contract the pool reports through, and an atomic gauge implementing it.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Minimal up/down counter the pool needs from a metrics backend.
///
/// Implementations must be safe to read while another thread writes, so a
/// metrics scrape never has to wait on the pool lock.
pub trait MetricRecorder: Send + Sync {
    /// Add one.
    fn inc(&self);
    /// Subtract one.
    fn dec(&self);
    /// Reset to zero.
    fn clear(&self);
    /// Current value.
    fn value(&self) -> i64;
}

/// Named gauge backed by a shared `AtomicI64`.
///
/// Clones share the same underlying value, so one handle can be injected into
/// the pool while another is kept for export.
#[derive(Clone)]
pub struct GaugeRecorder {
    name: Arc<str>,
    value: Arc<AtomicI64>,
}

impl GaugeRecorder {
    /// Create a gauge starting at zero.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            value: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Name the gauge is exported under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for GaugeRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaugeRecorder")
            .field("name", &self.name)
            .field("value", &self.value())
            .finish()
    }
}

impl MetricRecorder for GaugeRecorder {
    fn inc(&self) {
        self.value.fetch_add(1, Ordering::AcqRel);
    }

    fn dec(&self) {
        self.value.fetch_sub(1, Ordering::AcqRel);
    }

    fn clear(&self) {
        self.value.store(0, Ordering::Release);
    }

    fn value(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }
}
