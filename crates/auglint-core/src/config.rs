//! Configuration file loading for auglint.
//!
//! Reads `.auglint.json` from the scanned project root and provides typed
//! access to all settings. Falls back to defaults when the file is missing or
//! incomplete, so a bare `auglint check` needs no configuration at all.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level auglint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuglintConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Marker class naming the transform family. Subclasses of this class
    /// are checked; the marker itself is exempt.
    #[serde(default = "default_base_class")]
    pub base_class: String,
    /// Method-name prefix selecting which callables are inspected.
    #[serde(default = "default_method_prefix")]
    pub method_prefix: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_base_class() -> String {
    "BasicTransform".to_string()
}
fn default_method_prefix() -> String {
    "apply".to_string()
}

impl Default for AuglintConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            base_class: default_base_class(),
            method_prefix: default_method_prefix(),
        }
    }
}

impl AuglintConfig {
    pub const FILE_NAME: &'static str = ".auglint.json";

    /// Load configuration from `.auglint.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(Self::FILE_NAME);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "auglint: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
