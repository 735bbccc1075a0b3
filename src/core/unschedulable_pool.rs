//! Pool of pods that failed placement or are held back by a gating plugin.
//!
//! The pool pairs a keyed store with two injected counters: one tracking
//! ungated (unschedulable) pods and one tracking gated pods. Every store
//! mutation adjusts the counters while the store lock is still held, so a
//! reader never observes the two out of step.
//!
//! `add_or_update` and `delete` take the caller's view of whether the pod was
//! gated before the call rather than reading it back from the store. A caller
//! passing a stale flag makes the counters drift until the next [`clear`],
//! which resets both to zero.
//!
//! [`clear`]: UnschedulablePool::clear

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{MetricRecorder, PendingPod, PodKey};

/// Point-in-time view of the pool size and both counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Pods currently held.
    pub pods: usize,
    /// Value of the unschedulable counter.
    pub unschedulable: i64,
    /// Value of the gated counter.
    pub gated: i64,
}

/// Keyed store of held-back pods plus the two counters describing it.
pub struct UnschedulablePool<P> {
    pods: Mutex<HashMap<PodKey, PendingPod<P>>>,
    unschedulable_recorder: Arc<dyn MetricRecorder>,
    gated_recorder: Arc<dyn MetricRecorder>,
    log_drift: bool,
}

impl<P> UnschedulablePool<P> {
    /// Create an empty pool reporting through the given counters.
    pub fn new(
        unschedulable_recorder: Arc<dyn MetricRecorder>,
        gated_recorder: Arc<dyn MetricRecorder>,
    ) -> Self {
        Self {
            pods: Mutex::new(HashMap::new()),
            unschedulable_recorder,
            gated_recorder,
            log_drift: true,
        }
    }

    /// Enable or disable warnings when a caller's prior gating state
    /// disagrees with the stored record.
    #[must_use]
    pub fn with_drift_logging(mut self, enabled: bool) -> Self {
        self.log_drift = enabled;
        self
    }

    fn recorder(&self, gated: bool) -> &dyn MetricRecorder {
        if gated {
            self.gated_recorder.as_ref()
        } else {
            self.unschedulable_recorder.as_ref()
        }
    }

    /// Insert `pod`, or replace the record stored under its key.
    ///
    /// On insert the counter matching the pod's gating state is incremented.
    /// On replace the counters move only when `gated_before` differs from the
    /// new state; the record is replaced either way. `event` is used for
    /// diagnostics only.
    pub fn add_or_update(&self, pod: PendingPod<P>, gated_before: bool, event: &str) {
        let gated = pod.gated();
        let mut pods = self.pods.lock();

        match pods.get_mut(&pod.key) {
            Some(existing) => {
                if self.log_drift && existing.gated() != gated_before {
                    warn!(
                        pod = %pod.key,
                        event,
                        stored_gated = existing.gated(),
                        gated_before,
                        "prior gating state disagrees with stored pod"
                    );
                }
                if gated_before != gated {
                    self.recorder(gated_before).dec();
                    self.recorder(gated).inc();
                }
                debug!(pod = %pod.key, event, gated_before, gated, "updated unschedulable pod");
                *existing = pod;
            }
            None => {
                self.recorder(gated).inc();
                debug!(pod = %pod.key, event, gated, "added unschedulable pod");
                pods.insert(pod.key.clone(), pod);
            }
        }
    }

    /// Remove the pod stored under `key`.
    ///
    /// The counter matching `gated_before` is decremented when a record was
    /// actually removed; deleting an absent key changes nothing.
    pub fn delete(&self, key: &PodKey, gated_before: bool) {
        let mut pods = self.pods.lock();
        if let Some(removed) = pods.remove(key) {
            if self.log_drift && removed.gated() != gated_before {
                warn!(
                    pod = %key,
                    stored_gated = removed.gated(),
                    gated_before,
                    "prior gating state disagrees with deleted pod"
                );
            }
            self.recorder(gated_before).dec();
            debug!(pod = %key, gated_before, "deleted unschedulable pod");
        }
    }

    /// Remove and return the pod stored under `key`, settling the counters
    /// from the stored record instead of a caller-supplied state.
    pub fn remove(&self, key: &PodKey) -> Option<PendingPod<P>> {
        let mut pods = self.pods.lock();
        let removed = pods.remove(key)?;
        self.recorder(removed.gated()).dec();
        debug!(pod = %key, gated = removed.gated(), "removed unschedulable pod");
        Some(removed)
    }

    /// Drop every pod and reset both counters to zero.
    pub fn clear(&self) {
        let mut pods = self.pods.lock();
        let dropped = pods.len();
        pods.clear();
        self.unschedulable_recorder.clear();
        self.gated_recorder.clear();
        info!(dropped, "cleared unschedulable pods");
    }

    /// Whether a pod is stored under `key`.
    pub fn contains(&self, key: &PodKey) -> bool {
        self.pods.lock().contains_key(key)
    }

    /// Whether the pod stored under `key` is gated. Absent keys report `false`,
    /// which is the value callers pass as `gated_before` for new pods.
    pub fn is_gated(&self, key: &PodKey) -> bool {
        self.pods.lock().get(key).is_some_and(PendingPod::gated)
    }

    /// Number of pods held.
    pub fn len(&self) -> usize {
        self.pods.lock().len()
    }

    /// Whether the pool holds no pods.
    pub fn is_empty(&self) -> bool {
        self.pods.lock().is_empty()
    }

    /// Keys of every pod held, in no particular order.
    pub fn keys(&self) -> Vec<PodKey> {
        self.pods.lock().keys().cloned().collect()
    }

    /// Current value of the unschedulable counter.
    pub fn unschedulable_count(&self) -> i64 {
        self.unschedulable_recorder.value()
    }

    /// Current value of the gated counter.
    pub fn gated_count(&self) -> i64 {
        self.gated_recorder.value()
    }

    /// Pool size and counter values read under one lock acquisition.
    pub fn stats(&self) -> PoolStats {
        let pods = self.pods.lock();
        PoolStats {
            pods: pods.len(),
            unschedulable: self.unschedulable_recorder.value(),
            gated: self.gated_recorder.value(),
        }
    }
}

impl<P: Clone> UnschedulablePool<P> {
    /// Copy of the pod stored under `key`.
    pub fn get(&self, key: &PodKey) -> Option<PendingPod<P>> {
        self.pods.lock().get(key).cloned()
    }

    /// Copy of the whole store.
    pub fn snapshot(&self) -> HashMap<PodKey, PendingPod<P>> {
        self.pods.lock().clone()
    }
}
