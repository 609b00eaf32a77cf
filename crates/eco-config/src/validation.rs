//! Document validation configuration.

use serde::{Deserialize, Serialize};

const fn default_enforce_invariants() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Run typed decoding and shape invariant checks after structural
    /// schema validation. When off, only the JSON Schema is checked.
    #[serde(default = "default_enforce_invariants")]
    pub enforce_invariants: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_invariants: default_enforce_invariants(),
        }
    }
}
