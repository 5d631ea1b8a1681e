//! Integration tests for the pinned tree controller
//!
//! Tests tree data queries, change notifications and activation routing.

mod common;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use common::{git_graph_registry, mixed_tabs, FakeHost, HostCall};
use pinboard::config::PanelConfig;
use pinboard::controller::{dispatch, PinnedTreeController, DEFAULT_VIEW_ID};
use pinboard::mapper::TabSnapshotMapper;
use pinboard::messages::PanelMsg;
use pinboard::model::{Activation, TabDescriptor, TabGroup};

fn controller(host: &FakeHost) -> PinnedTreeController<&FakeHost, &FakeHost> {
    PinnedTreeController::new(host, host, TabSnapshotMapper::new(git_graph_registry()))
}

fn counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    (count, move || c.set(c.get() + 1))
}

// ============================================================================
// get_roots
// ============================================================================

#[test]
fn test_get_roots_maps_primary_group() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let roots = controller(&host).get_roots();

    let labels: Vec<&str> = roots.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["main.rs", "Git Graph", "Cargo.toml"]);
}

#[test]
fn test_get_roots_ignores_secondary_groups() {
    let host = FakeHost::default();
    *host.groups.borrow_mut() = vec![
        TabGroup::new(vec![TabDescriptor::file("a.rs", "/a.rs", true)]),
        TabGroup::new(vec![TabDescriptor::file("b.rs", "/b.rs", true)]),
    ];

    let roots = controller(&host).get_roots();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].label, "a.rs");
}

#[test]
fn test_get_roots_repulls_every_time() {
    let host = FakeHost::with_tabs(vec![TabDescriptor::file("a.rs", "/a.rs", true)]);
    let controller = controller(&host);

    assert_eq!(controller.get_roots().len(), 1);

    host.set_tabs(vec![
        TabDescriptor::file("a.rs", "/a.rs", true),
        TabDescriptor::file("b.rs", "/b.rs", true),
    ]);
    assert_eq!(controller.get_roots().len(), 2);
    assert_eq!(*host.queries.borrow(), 2);
}

#[test]
fn test_query_failure_reads_as_empty_panel() {
    let host = FakeHost {
        fail_queries: true,
        ..FakeHost::with_tabs(mixed_tabs())
    };
    assert!(controller(&host).get_roots().is_empty());
}

#[test]
fn test_no_tab_groups_reads_as_empty_panel() {
    let host = FakeHost::default();
    assert!(controller(&host).get_roots().is_empty());
}

#[test]
fn test_tree_item_for_root() {
    let host = FakeHost::with_tabs(vec![TabDescriptor::file("c.txt", "/a/b/c.txt", true)]);
    let controller = controller(&host);
    let roots = controller.get_roots();

    let item = controller.get_tree_item(&roots[0]);
    assert_eq!(item.label, "c.txt");
    assert_eq!(item.description, "/a/b");
    assert_eq!(item.tooltip, "/a/b/c.txt");
    assert_eq!(item.icon, "pinned");
}

// ============================================================================
// Change notifications
// ============================================================================

#[test]
fn test_tabs_changed_fires_once_per_notification() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let mut controller = controller(&host);
    let (count, listener) = counter();
    controller.subscribe(listener);

    controller.on_host_tabs_changed();
    assert_eq!(count.get(), 1);

    // Nothing changed in between, still signals
    controller.on_host_tabs_changed();
    controller.on_host_tabs_changed();
    assert_eq!(count.get(), 3);
    assert_eq!(controller.change_count(), 3);
}

#[test]
fn test_tabs_changed_does_not_query_host() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let mut controller = controller(&host);

    controller.on_host_tabs_changed();
    assert_eq!(*host.queries.borrow(), 0);
}

#[test]
fn test_unsubscribed_listener_is_not_called() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let mut controller = controller(&host);
    let (count, listener) = counter();
    let id = controller.subscribe(listener);

    assert!(controller.unsubscribe(id));
    controller.on_host_tabs_changed();
    assert_eq!(count.get(), 0);
}

#[test]
fn test_handle_tabs_changed_message() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let mut controller = controller(&host);
    let (count, listener) = counter();
    controller.subscribe(listener);

    controller.handle(PanelMsg::TabsChanged).unwrap();
    assert_eq!(count.get(), 1);
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_activate_file_node_opens_document_only() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let controller = controller(&host);
    let roots = controller.get_roots();

    controller.on_node_activated(&roots[0]).unwrap();
    assert_eq!(
        host.calls(),
        vec![HostCall::Open(PathBuf::from("/project/src/main.rs"))]
    );
}

#[test]
fn test_activate_special_node_runs_command_only() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let controller = controller(&host);
    let roots = controller.get_roots();

    controller.on_node_activated(&roots[1]).unwrap();
    assert_eq!(
        host.calls(),
        vec![HostCall::Command("git-graph.view".to_string())]
    );
}

#[test]
fn test_activation_uses_captured_path_after_tabs_change() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let controller = controller(&host);
    let roots = controller.get_roots();

    // The tab went away, the node still remembers where it pointed
    host.set_tabs(Vec::new());
    controller.on_node_activated(&roots[2]).unwrap();
    assert_eq!(
        host.calls(),
        vec![HostCall::Open(PathBuf::from("/project/Cargo.toml"))]
    );
}

#[test]
fn test_activation_failure_propagates() {
    let host = FakeHost {
        fail_actions: true,
        ..FakeHost::with_tabs(mixed_tabs())
    };
    let controller = controller(&host);
    let roots = controller.get_roots();

    let err = controller.on_node_activated(&roots[0]).unwrap_err();
    assert!(format!("{:#}", err).contains("/project/src/main.rs"));
    assert!(host.calls().is_empty());
}

#[test]
fn test_selection_activates_first_node() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let controller = controller(&host);
    let roots = controller.get_roots();

    controller
        .on_selection_changed(&[roots[1].clone(), roots[0].clone()])
        .unwrap();
    assert_eq!(
        host.calls(),
        vec![HostCall::Command("git-graph.view".to_string())]
    );
}

#[test]
fn test_empty_selection_does_nothing() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let controller = controller(&host);

    controller.on_selection_changed(&[]).unwrap();
    assert!(host.calls().is_empty());
}

#[test]
fn test_handle_activate_and_selection_messages() {
    let host = FakeHost::with_tabs(mixed_tabs());
    let mut controller = controller(&host);
    let roots = controller.get_roots();

    controller.handle(PanelMsg::Activate(roots[2].clone())).unwrap();
    controller
        .handle(PanelMsg::SelectionChanged(vec![roots[0].clone()]))
        .unwrap();

    assert_eq!(
        host.calls(),
        vec![
            HostCall::Open(PathBuf::from("/project/Cargo.toml")),
            HostCall::Open(PathBuf::from("/project/src/main.rs")),
        ]
    );
}

#[test]
fn test_dispatch_routes_by_activation() {
    let host = FakeHost::default();
    dispatch(&host, &Activation::InvokeCommand("a.b".to_string())).unwrap();
    dispatch(&host, &Activation::OpenDocument(PathBuf::from("/x"))).unwrap();

    assert_eq!(
        host.calls(),
        vec![
            HostCall::Command("a.b".to_string()),
            HostCall::Open(PathBuf::from("/x")),
        ]
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_default_view_id() {
    let host = FakeHost::default();
    assert_eq!(controller(&host).view_id(), DEFAULT_VIEW_ID);
}

#[test]
fn test_from_config_uses_view_id_and_registry() {
    let host = FakeHost::with_tabs(vec![
        TabDescriptor::other("Git Graph", true),
        TabDescriptor::other("Timeline", true),
    ]);
    let config: PanelConfig = serde_yaml::from_str(
        "view_id: myPinned\nspecial_views:\n  Timeline: timeline.focus\n",
    )
    .unwrap();

    let controller = PinnedTreeController::from_config(&host, &host, config);
    let roots = controller.get_roots();

    assert_eq!(controller.view_id(), "myPinned");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].label, "Timeline");
}
