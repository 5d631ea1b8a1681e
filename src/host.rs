//! Host seams - what the panel needs from the editor it is mounted in
//!
//! The host owns tab state and the actions that open things. The panel only
//! queries the former and requests the latter.

use std::path::Path;

use anyhow::Result;

use crate::model::{TabDescriptor, TabGroup};

/// Source of the host's current tab state
pub trait TabSource {
    /// All tab groups, primary group first
    fn tab_groups(&self) -> Result<Vec<TabGroup>>;

    /// Tabs of the primary group
    ///
    /// Query failures and a missing group both read as "no tabs": an empty
    /// panel is always a valid state.
    fn primary_tabs(&self) -> Vec<TabDescriptor> {
        match self.tab_groups() {
            Ok(groups) => match groups.into_iter().next() {
                Some(group) => group.tabs,
                None => {
                    tracing::debug!("Host reported no tab groups");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to query host tabs: {:#}", e);
                Vec::new()
            }
        }
    }
}

/// Actions the host performs on the panel's behalf
pub trait HostActions {
    /// Show the document at `path` in the editor
    fn open_document(&self, path: &Path) -> Result<()>;

    /// Run a named host command
    fn execute_command(&self, command: &str) -> Result<()>;
}

impl<T: TabSource + ?Sized> TabSource for &T {
    fn tab_groups(&self) -> Result<Vec<TabGroup>> {
        (**self).tab_groups()
    }
}

impl<T: HostActions + ?Sized> HostActions for &T {
    fn open_document(&self, path: &Path) -> Result<()> {
        (**self).open_document(path)
    }

    fn execute_command(&self, command: &str) -> Result<()> {
        (**self).execute_command(command)
    }
}
