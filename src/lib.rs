//! Pinboard - a side-panel tree of pinned editor tabs
//!
//! The host editor owns its tabs; this crate turns the host's tab snapshot
//! into an ordered list of panel nodes, tells the host when to re-pull, and
//! routes clicks to either "open document" or "run host command".

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod fs_watcher;
pub mod host;
pub mod mapper;
pub mod messages;
pub mod model;
pub mod registry;
pub mod signal;
pub mod snapshot_file;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::PanelConfig;
pub use controller::PinnedTreeController;
pub use host::{HostActions, TabSource};
pub use mapper::TabSnapshotMapper;
pub use messages::PanelMsg;
pub use model::{Activation, DisplayNode, TabDescriptor, TabGroup, TabInput};
pub use registry::SpecialViewRegistry;
