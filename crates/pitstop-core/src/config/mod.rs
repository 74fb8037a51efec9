pub mod defaults;
mod flow_config;
mod observability_config;
mod scoring_config;
mod session_config;

pub use flow_config::FlowConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::{ScoringConfig, ScoringWeights};
pub use session_config::SessionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{PitstopError, PitstopResult};

/// Root configuration. Every section and field falls back to its default
/// when absent, so an empty document yields `PitstopConfig::default()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PitstopConfig {
    pub session: SessionConfig,
    pub scoring: ScoringConfig,
    pub flow: FlowConfig,
    pub observability: ObservabilityConfig,
}

impl PitstopConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> PitstopResult<Self> {
        toml::from_str(source).map_err(|e| PitstopError::Config {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> PitstopResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| PitstopError::Config {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }
}
