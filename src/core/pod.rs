//! Pod identity and the record held by the pool.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PoolError;

/// Separator used by the rendered full name (`name_namespace`).
const FULL_NAME_SEPARATOR: char = '_';

/// Identity of a pod: namespace plus name.
///
/// Used directly as the map key so two distinct pods can never collide the
/// way concatenated strings can.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PodKey {
    /// Namespace the pod lives in.
    pub namespace: String,
    /// Pod name, unique within its namespace.
    pub name: String,
}

impl PodKey {
    /// Create a key from namespace and name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse the `name_namespace` full-name form produced by `Display`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidKey`] unless the input holds exactly one
    /// separator with a non-empty name and namespace on either side.
    pub fn from_full_name(full_name: &str) -> Result<Self, PoolError> {
        let mut parts = full_name.split(FULL_NAME_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(namespace), None) if !name.is_empty() && !namespace.is_empty() => {
                Ok(Self::new(namespace, name))
            }
            _ => Err(PoolError::InvalidKey(full_name.to_string())),
        }
    }
}

impl fmt::Display for PodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FULL_NAME_SEPARATOR}{}", self.name, self.namespace)
    }
}

/// A pod waiting in the pool, plus the scheduling bookkeeping attached to it.
///
/// `payload` is the caller's representation of the pod and is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPod<P> {
    /// Identity of the pod.
    pub key: PodKey,
    /// Opaque caller payload.
    pub payload: P,
    /// Plugin currently holding the pod back, if any.
    pub gating_plugin: Option<String>,
    /// Plugins that rejected the pod on its last attempt.
    pub unschedulable_plugins: BTreeSet<String>,
    /// Number of placement attempts made so far.
    pub attempts: u32,
}

impl<P> PendingPod<P> {
    /// Create an ungated record with no failing plugins.
    pub const fn new(key: PodKey, payload: P) -> Self {
        Self {
            key,
            payload,
            gating_plugin: None,
            unschedulable_plugins: BTreeSet::new(),
            attempts: 0,
        }
    }

    /// Mark the pod as held by `plugin`.
    ///
    /// The gating plugin is also recorded as the reason the pod is unschedulable.
    #[must_use]
    pub fn gated_by(mut self, plugin: impl Into<String>) -> Self {
        let plugin = plugin.into();
        self.unschedulable_plugins.insert(plugin.clone());
        self.gating_plugin = Some(plugin);
        self
    }

    /// Record a plugin that rejected the pod.
    #[must_use]
    pub fn with_unschedulable_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.unschedulable_plugins.insert(plugin.into());
        self
    }

    /// Set the attempt count.
    #[must_use]
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Whether a gating plugin is holding this pod.
    pub fn gated(&self) -> bool {
        self.gating_plugin.as_deref().is_some_and(|p| !p.is_empty())
    }
}
