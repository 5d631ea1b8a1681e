//! Command-line argument parsing
//!
//! Supports:
//! - Rendering the pinned panel for a tab snapshot file
//! - Activating a node by its row number
//! - Re-rendering whenever the snapshot changes

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::model::DisplayNode;

/// Show the pinned tabs of an editor's primary tab group
#[derive(Parser, Debug)]
#[command(name = "pinboard", version, about = "Pinned tabs panel")]
pub struct CliArgs {
    /// JSON tab snapshot written by the host editor
    #[arg(value_name = "SNAPSHOT", default_value = "tabs.json")]
    pub snapshot: PathBuf,

    /// Panel config file (defaults to ~/.config/pinboard/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Activate row N (1-based) instead of rendering
    #[arg(short, long, value_name = "N", conflicts_with = "watch")]
    pub activate: Option<usize>,

    /// Print the activation instead of performing it
    ///
    /// Special views need an editor to run their command, so activating one
    /// fails unless this is set.
    #[arg(long)]
    pub dry_run: bool,

    /// Re-render whenever the snapshot file changes
    #[arg(short, long)]
    pub watch: bool,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Render once and exit
    Render,
    /// Activate the node at this 0-based index
    Activate(usize),
    /// Render, then re-render on every change
    Watch,
}

impl CliArgs {
    /// Resolve the run mode, converting the user's 1-based row to an index
    pub fn run_mode(&self) -> Result<RunMode, String> {
        match (self.activate, self.watch) {
            (Some(0), _) => Err("Rows are numbered from 1".to_string()),
            (Some(row), _) => Ok(RunMode::Activate(row - 1)),
            (None, true) => Ok(RunMode::Watch),
            (None, false) => Ok(RunMode::Render),
        }
    }
}

/// The node at a 0-based row, or an error naming the 1-based row the user typed
pub fn pinned_row(roots: &[DisplayNode], index: usize) -> Result<&DisplayNode> {
    roots.get(index).ok_or_else(|| {
        anyhow!(
            "No pinned row {} ({} pinned tabs)",
            index + 1,
            roots.len()
        )
    })
}
