//! Panel model - host tab snapshots and the nodes derived from them

pub mod node;
pub mod tab;

pub use node::{Activation, DisplayNode, TreeItem, PINNED_ICON};
pub use tab::{TabDescriptor, TabGroup, TabInput};
