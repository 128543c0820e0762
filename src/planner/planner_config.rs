use serde::{Deserialize, Serialize};

/// Knobs of the two-phase rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Stores spliced between a partial and a final stage write locally.
    pub local_store: bool,
    /// Rebind aggregate arguments of the final group-by stage to the partial
    /// stage's output columns.
    pub rebind_aggregates: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { local_store: true, rebind_aggregates: true }
    }
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(local_store: bool, rebind_aggregates: bool) -> Self {
        Self { local_store, rebind_aggregates }
    }

    pub fn remote_store() -> Self {
        Self { local_store: false, ..Self::default() }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
