//! Message types for the pinned panel
//!
//! Everything the host tells the panel flows through [`PanelMsg`].

use crate::model::DisplayNode;

/// Host → panel notifications
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Some tab somewhere opened, closed, pinned or unpinned
    TabsChanged,
    /// A node was clicked
    Activate(DisplayNode),
    /// Tree selection changed; the first selected node is activated
    SelectionChanged(Vec<DisplayNode>),
}
