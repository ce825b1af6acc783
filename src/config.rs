use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{FlowcheckError, FlowcheckResult};

/// Configuration for the flowcheck pipeline.
///
/// Loadable from a YAML file; missing fields fall back to the defaults, so a
/// config file only needs to state what it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowcheckConfig {
    /// Turn unresolved-edge diagnostics into a hard failure.
    pub strict: bool,

    /// Bound on each verifier invocation, per formula. Externally delegated
    /// checking engines may not terminate promptly.
    pub verifier_timeout_secs: u64,

    /// The verifiers to register, by name, in registration order. The set of
    /// valid names is fixed at compile time; an unknown name fails at startup.
    pub verifiers: Vec<String>,

    /// Keep the per-lane net fragments in the conversion outcome so the CLI can
    /// write them as intermediate artifacts.
    pub persist_lane_nets: bool,
}

impl Default for FlowcheckConfig {
    fn default() -> Self {
        FlowcheckConfig {
            strict: false,
            verifier_timeout_secs: 30,
            verifiers: vec!["syntax".to_string(), "reachability".to_string()],
            persist_lane_nets: false,
        }
    }
}

impl FlowcheckConfig {
    pub fn from_file(path: &Path) -> FlowcheckResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| FlowcheckError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn verifier_timeout(&self) -> Duration {
        Duration::from_secs(self.verifier_timeout_secs)
    }
}
