//! Pool configuration: counter names and diagnostic switches.

use serde::{Deserialize, Serialize};

use crate::core::PoolError;

/// Environment variable naming the unschedulable gauge.
pub const ENV_UNSCHEDULABLE_GAUGE: &str = "UNSCHEDULABLE_POOL_UNSCHEDULABLE_GAUGE";
/// Environment variable naming the gated gauge.
pub const ENV_GATED_GAUGE: &str = "UNSCHEDULABLE_POOL_GATED_GAUGE";
/// Environment variable toggling drift warnings (`true`/`false`).
pub const ENV_LOG_DRIFT: &str = "UNSCHEDULABLE_POOL_LOG_DRIFT";

fn default_unschedulable_gauge() -> String {
    "unschedulable_pods".into()
}

fn default_gated_gauge() -> String {
    "gated_pods".into()
}

const fn default_log_drift() -> bool {
    true
}

/// Pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Name of the gauge counting ungated pods.
    #[serde(default = "default_unschedulable_gauge")]
    pub unschedulable_gauge: String,
    /// Name of the gauge counting gated pods.
    #[serde(default = "default_gated_gauge")]
    pub gated_gauge: String,
    /// Warn when a caller's prior gating state disagrees with the store.
    #[serde(default = "default_log_drift")]
    pub log_drift: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            unschedulable_gauge: default_unschedulable_gauge(),
            gated_gauge: default_gated_gauge(),
            log_drift: default_log_drift(),
        }
    }
}

impl PoolConfig {
    /// Validate gauge names.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.unschedulable_gauge.trim().is_empty() {
            return Err("unschedulable_gauge must not be empty".into());
        }
        if self.gated_gauge.trim().is_empty() {
            return Err("gated_gauge must not be empty".into());
        }
        if self.unschedulable_gauge == self.gated_gauge {
            return Err(format!(
                "unschedulable_gauge and gated_gauge must differ (both `{}`)",
                self.gated_gauge
            ));
        }
        Ok(())
    }

    /// Parse pool configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] on malformed JSON or invalid values.
    pub fn from_json_str(input: &str) -> Result<Self, PoolError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| PoolError::Config(format!("parse error: {e}")))?;
        cfg.validate().map_err(PoolError::Config)?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] on an unparsable boolean or invalid values.
    pub fn from_env() -> Result<Self, PoolError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Config`] on an unparsable boolean or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PoolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(name) = lookup(ENV_UNSCHEDULABLE_GAUGE) {
            cfg.unschedulable_gauge = name;
        }
        if let Some(name) = lookup(ENV_GATED_GAUGE) {
            cfg.gated_gauge = name;
        }
        if let Some(raw) = lookup(ENV_LOG_DRIFT) {
            cfg.log_drift = raw
                .trim()
                .parse()
                .map_err(|e| PoolError::Config(format!("{ENV_LOG_DRIFT}: {e}")))?;
        }
        cfg.validate().map_err(PoolError::Config)?;
        Ok(cfg)
    }
}
