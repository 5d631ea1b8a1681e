//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use pinboard::host::{HostActions, TabSource};
use pinboard::model::{TabDescriptor, TabGroup};
use pinboard::registry::SpecialViewRegistry;

/// An action the fake host was asked to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Open(PathBuf),
    Command(String),
}

/// In-memory host: mutable tab groups plus a log of requested actions
#[derive(Debug, Default)]
pub struct FakeHost {
    pub groups: RefCell<Vec<TabGroup>>,
    pub calls: RefCell<Vec<HostCall>>,
    /// Number of times the tab state was queried
    pub queries: RefCell<usize>,
    /// When set, tab queries fail
    pub fail_queries: bool,
    /// When set, actions fail
    pub fail_actions: bool,
}

impl FakeHost {
    /// Host with a single (primary) group holding `tabs`
    pub fn with_tabs(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            groups: RefCell::new(vec![TabGroup::new(tabs)]),
            ..Default::default()
        }
    }

    pub fn set_tabs(&self, tabs: Vec<TabDescriptor>) {
        *self.groups.borrow_mut() = vec![TabGroup::new(tabs)];
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }
}

impl TabSource for FakeHost {
    fn tab_groups(&self) -> Result<Vec<TabGroup>> {
        *self.queries.borrow_mut() += 1;
        if self.fail_queries {
            return Err(anyhow!("no tab groups available"));
        }
        Ok(self.groups.borrow().clone())
    }
}

impl HostActions for FakeHost {
    fn open_document(&self, path: &Path) -> Result<()> {
        if self.fail_actions {
            return Err(anyhow!("document vanished"));
        }
        self.calls
            .borrow_mut()
            .push(HostCall::Open(path.to_path_buf()));
        Ok(())
    }

    fn execute_command(&self, command: &str) -> Result<()> {
        if self.fail_actions {
            return Err(anyhow!("command not found"));
        }
        self.calls
            .borrow_mut()
            .push(HostCall::Command(command.to_string()));
        Ok(())
    }
}

/// Registry used by most tests
pub fn git_graph_registry() -> SpecialViewRegistry {
    SpecialViewRegistry::from_entries([("Git Graph", "git-graph.view")])
}

/// A realistic mix: pinned files, a pinned special view, noise
pub fn mixed_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::file("main.rs", "/project/src/main.rs", true),
        TabDescriptor::file("notes.md", "/project/notes.md", false),
        TabDescriptor::other("Git Graph", true),
        TabDescriptor::other("Settings", true),
        TabDescriptor::other("Welcome", false),
        TabDescriptor::file("Cargo.toml", "/project/Cargo.toml", true),
    ]
}
