//! File-backed host - tab state read from a JSON snapshot on disk
//!
//! Lets the panel run outside an editor. The snapshot looks like:
//!
//! ```json
//! { "groups": [ { "tabs": [
//!     { "label": "main.rs", "pinned": true, "input": { "kind": "file", "path": "/src/main.rs" } },
//!     { "label": "Git Graph", "pinned": true, "input": { "kind": "other" } }
//! ] } ] }
//! ```
//!
//! The file is re-read on every query; nothing is cached.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::host::{HostActions, TabSource};
use crate::model::TabGroup;

/// On-disk tab snapshot, primary group first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSnapshot {
    #[serde(default)]
    pub groups: Vec<TabGroup>,
}

impl TabSnapshot {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid tab snapshot")
    }
}

/// A [`TabSource`] backed by a snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabSource for SnapshotFile {
    fn tab_groups(&self) -> Result<Vec<TabGroup>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let snapshot = TabSnapshot::parse(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(snapshot.groups)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Opens documents with the platform's default application
///
/// Host commands only exist inside an editor, so asking for one is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemActions;

impl HostActions for SystemActions {
    fn open_document(&self, path: &Path) -> Result<()> {
        tracing::info!("Opening {}", path.display());
        open::that(path)?;
        Ok(())
    }

    fn execute_command(&self, command: &str) -> Result<()> {
        bail!("host command {} needs an editor host (try --dry-run)", command)
    }
}

/// Prints the chosen action instead of performing it
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintActions;

impl HostActions for PrintActions {
    fn open_document(&self, path: &Path) -> Result<()> {
        println!("open {}", path.display());
        Ok(())
    }

    fn execute_command(&self, command: &str) -> Result<()> {
        println!("command {}", command);
        Ok(())
    }
}
