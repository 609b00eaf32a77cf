//! Schema export configuration.

use serde::{Deserialize, Serialize};

fn default_export_dir() -> String {
    "schemas".to_string()
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// Directory `eco export` writes `*.schema.json` files into.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Pretty-print exported schemas.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            pretty: default_pretty(),
        }
    }
}
