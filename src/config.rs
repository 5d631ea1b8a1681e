//! Panel configuration
//!
//! Stored in `~/.config/pinboard/config.yaml`:
//!
//! ```yaml
//! view_id: packagePinnedExplorer
//! special_views:
//!   Git Graph: git-graph.view
//! ```
//!
//! `special_views` replaces the built-in table when present.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controller::DEFAULT_VIEW_ID;
use crate::registry::SpecialViewRegistry;

/// Pinned panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Identifier the tree is registered under
    #[serde(default = "default_view_id")]
    pub view_id: String,
    /// Non-file tab labels that can still be opened, with their commands
    #[serde(default)]
    pub special_views: SpecialViewRegistry,
}

fn default_view_id() -> String {
    DEFAULT_VIEW_ID.to_string()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            view_id: default_view_id(),
            special_views: SpecialViewRegistry::default(),
        }
    }
}

impl PanelConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;

        tracing::info!(
            "Loaded config from {} ({} special views)",
            path.display(),
            config.special_views.len()
        );
        Ok(config)
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
