//! Behavior of the element tree view against fixture trees.

use element_tree::focus::FocusStore;
use element_tree::resource::{ResourceDefinition, ResourceProvider, ResourceTree};
use element_tree::view::{is_disabled, ElementTreeView};
use element_tree::ElementTreeError;
use std::path::Path;

fn tree_of(names: &[&str]) -> ResourceTree {
    let mut tree = ResourceTree::new();
    for name in names {
        tree.insert(*name, ResourceDefinition::new(format!("{} resource", name)));
    }
    tree
}

fn disabled_flags<P: ResourceProvider>(view: &ElementTreeView<P>) -> Vec<bool> {
    view.nodes().unwrap().iter().map(|n| n.disabled).collect()
}

#[test]
fn node_count_and_order_match_tree() {
    for size in [0, 1, 5, 50] {
        let names: Vec<String> = (0..size).map(|i| format!("Resource{:02}", size - i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();

        let mut store = FocusStore::new(None);
        let view = ElementTreeView::new(tree_of(&refs), store.subscribe());
        let nodes = view.nodes().unwrap();

        assert_eq!(nodes.len(), size);
        let rendered: Vec<&str> = nodes.iter().map(|n| n.name).collect();
        assert_eq!(rendered, refs);
        assert!(nodes.iter().enumerate().all(|(i, n)| n.key == i));
    }
}

#[test]
fn disabled_rule_over_all_pairs() {
    let names = ["Patient", "Observation", "Condition"];
    let focuses = [None, Some(""), Some("Patient"), Some("Observation"), Some("Encounter")];

    for focus in focuses {
        let mut store = FocusStore::new(focus);
        let view = ElementTreeView::new(tree_of(&names), store.subscribe());

        for node in view.nodes().unwrap() {
            let expected = matches!(focus, Some(f) if !f.is_empty() && f != node.name);
            assert_eq!(node.disabled, expected, "focus {:?}, resource {}", focus, node.name);
            assert_eq!(node.disabled, is_disabled(focus, node.name));
        }
    }
}

#[test]
fn focus_round_trip_through_store() {
    let mut store = FocusStore::new(None);
    let mut view = ElementTreeView::new(tree_of(&["Patient", "Observation"]), store.subscribe());
    assert_eq!(disabled_flags(&view), vec![false, false]);

    store.set("Patient");
    assert!(view.refresh());
    assert_eq!(disabled_flags(&view), vec![false, true]);

    store.clear();
    assert!(view.refresh());
    assert_eq!(disabled_flags(&view), vec![false, false]);
}

#[test]
fn several_views_share_one_store() {
    let mut store = FocusStore::new(None);
    let mut first = ElementTreeView::new(tree_of(&["Patient", "Observation"]), store.subscribe());
    let mut second = ElementTreeView::new(tree_of(&["Observation"]), store.subscribe());

    store.set("Observation");
    assert!(first.refresh());
    assert!(second.refresh());
    assert_eq!(disabled_flags(&first), vec![true, false]);
    assert_eq!(disabled_flags(&second), vec![false]);
}

#[test]
fn repeated_writes_of_same_focus_do_not_invalidate() {
    let mut store = FocusStore::new(Some("Patient"));
    let mut view = ElementTreeView::new(tree_of(&["Patient"]), store.subscribe());

    assert!(!store.set("Patient"));
    assert!(!view.refresh());
}

struct NamesOnly(Vec<&'static str>);

impl ResourceProvider for NamesOnly {
    fn resource_names(&self) -> Vec<&str> {
        self.0.clone()
    }

    fn get_resource(&self, _name: &str) -> Option<&ResourceDefinition> {
        None
    }
}

#[test]
fn missing_metadata_is_reported() {
    let mut store = FocusStore::new(None);
    let view = ElementTreeView::new(NamesOnly(vec!["Specimen"]), store.subscribe());

    let err = view.nodes().unwrap_err();
    assert!(matches!(err, ElementTreeError::MissingResource(ref name) if name == "Specimen"));
}

#[test]
fn fixture_file_loads_in_order() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/small_tree.json");
    let tree = ResourceTree::load(&path).unwrap();

    assert_eq!(tree.resource_names(), vec!["Patient", "Observation"]);
    assert_eq!(tree.get("Patient").unwrap().element_count(), 3);
}
