//! Pinned tree controller - keeps the panel in sync with the host's tabs
//!
//! The controller holds no derived state. Every `get_roots` re-pulls the host
//! snapshot and re-runs the mapper; every tab-change notification fires the
//! change signal exactly once so the host re-pulls.

use anyhow::{Context, Result};

use crate::config::PanelConfig;
use crate::host::{HostActions, TabSource};
use crate::mapper::TabSnapshotMapper;
use crate::messages::PanelMsg;
use crate::model::{Activation, DisplayNode, TreeItem};
use crate::signal::{ChangeSignal, SubscriptionId};

/// Default panel identifier the tree is mounted under
pub const DEFAULT_VIEW_ID: &str = "packagePinnedExplorer";

/// Drives the pinned panel for one host
pub struct PinnedTreeController<S, A> {
    source: S,
    actions: A,
    mapper: TabSnapshotMapper,
    changed: ChangeSignal,
    view_id: String,
}

impl<S: TabSource, A: HostActions> PinnedTreeController<S, A> {
    pub fn new(source: S, actions: A, mapper: TabSnapshotMapper) -> Self {
        Self {
            source,
            actions,
            mapper,
            changed: ChangeSignal::new(),
            view_id: DEFAULT_VIEW_ID.to_string(),
        }
    }

    /// Build a controller from panel configuration
    pub fn from_config(source: S, actions: A, config: PanelConfig) -> Self {
        let mut controller = Self::new(
            source,
            actions,
            TabSnapshotMapper::new(config.special_views),
        );
        controller.view_id = config.view_id;
        controller
    }

    /// Panel identifier the host mounts this tree under
    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    // ========================================================================
    // Tree data
    // ========================================================================

    /// Current panel nodes, derived fresh from the host snapshot
    pub fn get_roots(&self) -> Vec<DisplayNode> {
        let tabs = self.source.primary_tabs();
        let nodes = self.mapper.map(&tabs);
        tracing::debug!(
            "Derived {} pinned nodes from {} tabs",
            nodes.len(),
            tabs.len()
        );
        nodes
    }

    /// Presentation of a node for the host's tree surface
    pub fn get_tree_item(&self, node: &DisplayNode) -> TreeItem {
        node.tree_item()
    }

    /// Subscribe to "data changed" notifications
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Number of change notifications fired so far
    pub fn change_count(&self) -> u64 {
        self.changed.fire_count()
    }

    // ========================================================================
    // Host notifications
    // ========================================================================

    /// Tab set changed somewhere: invalidate the whole tree
    pub fn on_host_tabs_changed(&mut self) {
        tracing::trace!("Host tabs changed, refreshing {}", self.view_id);
        self.changed.fire();
    }

    /// Open whatever the node was mapped to
    pub fn on_node_activated(&self, node: &DisplayNode) -> Result<()> {
        tracing::debug!(
            "Activating {:?} ({})",
            node.label,
            node.activation().kind()
        );
        dispatch(&self.actions, node.activation())
    }

    /// Selection changed in the tree; activate the first selected node
    pub fn on_selection_changed(&self, selection: &[DisplayNode]) -> Result<()> {
        match selection.first() {
            Some(node) => self.on_node_activated(node),
            None => {
                tracing::trace!("Selection cleared");
                Ok(())
            }
        }
    }

    /// Route a host message to the matching handler
    pub fn handle(&mut self, msg: PanelMsg) -> Result<()> {
        match msg {
            PanelMsg::TabsChanged => {
                self.on_host_tabs_changed();
                Ok(())
            }
            PanelMsg::Activate(node) => self.on_node_activated(&node),
            PanelMsg::SelectionChanged(selection) => self.on_selection_changed(&selection),
        }
    }
}

/// Perform a node's activation against the host
pub fn dispatch<A: HostActions + ?Sized>(actions: &A, activation: &Activation) -> Result<()> {
    match activation {
        Activation::OpenDocument(path) => actions
            .open_document(path)
            .with_context(|| format!("Failed to open {}", path.display())),
        Activation::InvokeCommand(command) => actions
            .execute_command(command)
            .with_context(|| format!("Failed to run command {}", command)),
    }
}

impl<S, A> std::fmt::Debug for PinnedTreeController<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnedTreeController")
            .field("view_id", &self.view_id)
            .field("mapper", &self.mapper)
            .field("changed", &self.changed)
            .finish()
    }
}
