//! Host tab state - the read-only snapshot the panel is derived from
//!
//! These types mirror what the host editor reports about its open tabs.
//! The panel never mutates them; it only reads label, pin flag and input.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// Tab Input
// ============================================================================

/// What a tab is showing, resolved once when the snapshot is taken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabInput {
    /// A document backed by a file-system location
    File {
        #[serde(alias = "uri")]
        path: PathBuf,
    },
    /// Anything else (custom views, webviews, settings, diff editors...)
    Other,
}

impl TabInput {
    /// The file-system location, if this input has one
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::File { path } => Some(path),
            Self::Other => None,
        }
    }
}

// ============================================================================
// Tab Descriptor
// ============================================================================

/// One open tab as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Display label shown on the tab
    pub label: String,
    /// Whether the user pinned this tab
    #[serde(rename = "pinned", alias = "is_pinned", default)]
    pub is_pinned: bool,
    pub input: TabInput,
}

impl TabDescriptor {
    /// A tab showing a file
    pub fn file(label: impl Into<String>, path: impl Into<PathBuf>, is_pinned: bool) -> Self {
        Self {
            label: label.into(),
            is_pinned,
            input: TabInput::File { path: path.into() },
        }
    }

    /// A tab showing something that is not a file
    pub fn other(label: impl Into<String>, is_pinned: bool) -> Self {
        Self {
            label: label.into(),
            is_pinned,
            input: TabInput::Other,
        }
    }
}

// ============================================================================
// Tab Groups
// ============================================================================

/// An ordered group of tabs (one editor pane's tab bar)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroup {
    #[serde(default)]
    pub tabs: Vec<TabDescriptor>,
}

impl TabGroup {
    pub fn new(tabs: Vec<TabDescriptor>) -> Self {
        Self { tabs }
    }
}
