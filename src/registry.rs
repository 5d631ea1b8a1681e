//! Special views - pinned tabs that are not files but can still be opened
//!
//! Maps a tab label (e.g. a third-party panel's display name) to the host
//! command that brings that view up. The registry is read-only once built and
//! is handed to the mapper, so tests can substitute their own table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Built-in special views known out of the box
const BUILTIN_VIEWS: &[(&str, &str)] = &[("Git Graph", "git-graph.view")];

/// Label → host command id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialViewRegistry {
    entries: BTreeMap<String, String>,
}

impl SpecialViewRegistry {
    /// A registry that recognizes nothing
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build from (label, command) pairs; later duplicates win
    pub fn from_entries<I, L, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, command)| (label.into(), command.into()))
                .collect(),
        }
    }

    /// Command id for a tab label, if it is a known special view
    pub fn command_for(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Overlay another registry on top of this one
    pub fn extend(&mut self, other: SpecialViewRegistry) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }
}

impl Default for SpecialViewRegistry {
    fn default() -> Self {
        Self::from_entries(BUILTIN_VIEWS.iter().copied())
    }
}
