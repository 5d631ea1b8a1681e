use anyhow::{Context, Result};
use clap::Parser;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use pinboard::cli::{pinned_row, CliArgs, RunMode};
use pinboard::config::PanelConfig;
use pinboard::controller::PinnedTreeController;
use pinboard::fs_watcher::SnapshotWatcher;
use pinboard::host::{HostActions, TabSource};
use pinboard::messages::PanelMsg;
use pinboard::snapshot_file::{PrintActions, SnapshotFile, SystemActions};
use pinboard::view::render_panel;

/// Longest the watch loop blocks before checking for a pending render
const WATCH_TIMEOUT: Duration = Duration::from_secs(1);

fn render<S: TabSource, A: HostActions>(controller: &PinnedTreeController<S, A>) {
    let items: Vec<_> = controller
        .get_roots()
        .iter()
        .map(|node| controller.get_tree_item(node))
        .collect();
    print!("{}", render_panel(controller.view_id(), &items));
}

fn main() -> Result<()> {
    pinboard::tracing::init();

    let args = CliArgs::parse();
    let mode = args.run_mode().map_err(anyhow::Error::msg)?;

    let config = match &args.config {
        Some(path) => PanelConfig::load_from(path).map_err(anyhow::Error::msg)?,
        None => PanelConfig::load(),
    };

    let actions: &dyn HostActions = if args.dry_run {
        &PrintActions
    } else {
        &SystemActions
    };
    let source = SnapshotFile::new(args.snapshot.clone());
    let mut controller = PinnedTreeController::from_config(source, actions, config);

    match mode {
        RunMode::Render => render(&controller),

        RunMode::Activate(index) => {
            let roots = controller.get_roots();
            let node = pinned_row(&roots, index)?;
            controller.handle(PanelMsg::Activate(node.clone()))?;
        }

        RunMode::Watch => {
            let watcher = SnapshotWatcher::new(args.snapshot.clone())
                .with_context(|| format!("Failed to watch {}", args.snapshot.display()))?;

            let dirty = Rc::new(Cell::new(true));
            let flag = Rc::clone(&dirty);
            controller.subscribe(move || flag.set(true));

            loop {
                if dirty.replace(false) {
                    render(&controller);
                }
                if watcher.wait_changed(WATCH_TIMEOUT) {
                    controller.handle(PanelMsg::TabsChanged)?;
                }
            }
        }
    }

    Ok(())
}
