// File: ./src/config.rs
// Handles configuration loading and defaults.
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_list() -> String {
    "Inbox".to_string()
}

/// Credentials and default board/list names, read from a JSON file.
/// Defaults are injected at parse time, so a minimal file only needs the
/// two credential strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub key: String,
    pub token: String,
    #[serde(default)]
    pub board: Option<String>,
    /// Fallback list for untagged input.
    #[serde(default = "default_list")]
    pub list: String,
}

impl Config {
    /// Load the configuration from disk.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        // Explicitly detect missing file so the message points the user at
        // the expected location.
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Config file '{}' not found",
                path.display()
            ));
        }

        // Read the file with contextualized error (covers permission/IO issues).
        let contents = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        // Parse JSON with contextualized error (covers syntax issues).
        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }
}
