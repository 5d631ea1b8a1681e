//! Tab snapshot → display nodes
//!
//! Pure mapping from the host's tab list to the ordered nodes of the pinned
//! panel. Each pinned tab is classified exactly once:
//!
//! 1. File input → node opening that document, hinted with its directory
//! 2. Label known to the [`SpecialViewRegistry`] → node invoking the command
//! 3. Anything else → dropped
//!
//! Host ordering is preserved and nothing is deduplicated.

use std::path::Path;

use crate::model::{Activation, DisplayNode, TabDescriptor, TabInput};
use crate::registry::SpecialViewRegistry;

/// Maps tab snapshots to pinned panel nodes
#[derive(Debug, Clone, Default)]
pub struct TabSnapshotMapper {
    registry: SpecialViewRegistry,
}

impl TabSnapshotMapper {
    pub fn new(registry: SpecialViewRegistry) -> Self {
        Self { registry }
    }

    /// Derive the panel nodes for a snapshot, in tab order
    pub fn map(&self, tabs: &[TabDescriptor]) -> Vec<DisplayNode> {
        tabs.iter()
            .filter(|tab| tab.is_pinned)
            .filter_map(|tab| self.classify(tab))
            .collect()
    }

    /// Build the node for a single pinned tab, or `None` if it can't be shown
    fn classify(&self, tab: &TabDescriptor) -> Option<DisplayNode> {
        if let TabInput::File { path } = &tab.input {
            return Some(DisplayNode::new(
                tab,
                containing_dir(path),
                Activation::OpenDocument(path.clone()),
            ));
        }

        match self.registry.command_for(&tab.label) {
            Some(command) => Some(DisplayNode::new(
                tab,
                command,
                Activation::InvokeCommand(command.to_string()),
            )),
            None => {
                tracing::trace!("Dropping unrecognized pinned tab {:?}", tab.label);
                None
            }
        }
    }
}

/// Directory part of a path, with `dirname(1)` conventions
///
/// A bare file name yields `"."` and the root stays `"/"`.
pub fn containing_dir(path: &Path) -> String {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => ".".to_string(),
        Some(parent) => parent.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
