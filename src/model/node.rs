//! Display nodes - the derived, renderable form of a pinned tab

use std::path::{Path, PathBuf};

use super::tab::TabDescriptor;

/// Theme icon shown next to every pinned entry
pub const PINNED_ICON: &str = "pinned";

// ============================================================================
// Activation
// ============================================================================

/// How a node opens when the user activates it
///
/// Decided when the node is built and never re-derived at click time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Show the document at this location
    OpenDocument(PathBuf),
    /// Run the named host command
    InvokeCommand(String),
}

impl Activation {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenDocument(_) => "open-document",
            Self::InvokeCommand(_) => "invoke-command",
        }
    }
}

// ============================================================================
// Display Node
// ============================================================================

/// One entry of the pinned panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub label: String,
    /// Containing directory for file tabs, command id for special views
    pub location_hint: String,
    /// The tab this node was derived from
    pub source_tab: TabDescriptor,
    activation: Activation,
}

impl DisplayNode {
    pub fn new(
        source_tab: &TabDescriptor,
        location_hint: impl Into<String>,
        activation: Activation,
    ) -> Self {
        Self {
            label: source_tab.label.clone(),
            location_hint: location_hint.into(),
            source_tab: source_tab.clone(),
            activation,
        }
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    /// Build the host-facing tree item for this node
    pub fn tree_item(&self) -> TreeItem {
        let tooltip = match &self.activation {
            Activation::OpenDocument(_) if self.location_hint == "." => self.label.clone(),
            Activation::OpenDocument(_) => Path::new(&self.location_hint)
                .join(&self.label)
                .to_string_lossy()
                .into_owned(),
            Activation::InvokeCommand(command) => command.clone(),
        };

        TreeItem {
            label: self.label.clone(),
            description: self.location_hint.clone(),
            tooltip,
            icon: PINNED_ICON,
            collapsible: false,
        }
    }
}

// ============================================================================
// Tree Item
// ============================================================================

/// Presentation of a node as the host's tree surface draws it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub label: String,
    /// Dimmed text after the label
    pub description: String,
    pub tooltip: String,
    /// Theme icon id
    pub icon: &'static str,
    /// Pinned entries are always leaves
    pub collapsible: bool,
}
