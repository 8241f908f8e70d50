//! The element tree view: one node per resource, with focus-derived
//! disabled state.

use serde::Serialize;

use crate::error::{ElementTreeError, Result};
use crate::focus::FocusSubscription;
use crate::resource::{ResourceDefinition, ResourceProvider};

/// Everything a node renderer needs for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceNode<'a> {
    pub name: &'a str,

    /// Position in the tree, stable for a given tree
    pub key: usize,

    /// Whether another resource currently holds the focus
    pub disabled: bool,

    #[serde(flatten)]
    pub resource: &'a ResourceDefinition,
}

/// A node is disabled when some other resource is focused.
pub fn is_disabled(focus: Option<&str>, name: &str) -> bool {
    match focus {
        Some(focus) if !focus.is_empty() => focus != name,
        _ => false,
    }
}

/// Computes resource nodes from an injected provider and focus subscription.
#[derive(Debug)]
pub struct ElementTreeView<P> {
    provider: P,
    focus: FocusSubscription,
}

impl<P: ResourceProvider> ElementTreeView<P> {
    pub fn new(provider: P, focus: FocusSubscription) -> Self {
        Self { provider, focus }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The focus as last seen by this view.
    pub fn focus(&self) -> Option<&str> {
        self.focus.current()
    }

    /// Pick up focus changes. Returns `true` when nodes need re-rendering.
    pub fn refresh(&mut self) -> bool {
        let changed = self.focus.sync();
        if changed {
            tracing::debug!(focus = ?self.focus.current(), "Element tree view invalidated");
        }
        changed
    }

    /// One node per resource, in provider order.
    ///
    /// Fails with [`ElementTreeError::MissingResource`] if the provider
    /// lists a name it has no definition for.
    pub fn nodes(&self) -> Result<Vec<ResourceNode<'_>>> {
        let focus = self.focus.current();
        self.provider
            .resource_names()
            .into_iter()
            .enumerate()
            .map(|(key, name)| {
                self.provider
                    .get_resource(name)
                    .map(|resource| ResourceNode {
                        name,
                        key,
                        disabled: is_disabled(focus, name),
                        resource,
                    })
                    .ok_or_else(|| ElementTreeError::MissingResource(name.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::FocusStore;
    use crate::resource::{ElementNode, ResourceTree};

    fn fixture_tree() -> ResourceTree {
        ResourceTree::new()
            .with_resource(
                "Patient",
                ResourceDefinition::new("A patient")
                    .with_element(ElementNode::new("Patient", "gender", "code")),
            )
            .with_resource("Observation", ResourceDefinition::new("A measurement"))
    }

    /// Lists a name without providing its definition.
    struct BrokenProvider;

    impl ResourceProvider for BrokenProvider {
        fn resource_names(&self) -> Vec<&str> {
            vec!["Patient", "Ghost"]
        }

        fn get_resource(&self, name: &str) -> Option<&ResourceDefinition> {
            static PATIENT: ResourceDefinition = ResourceDefinition {
                definition: String::new(),
                contains: Vec::new(),
            };
            (name == "Patient").then_some(&PATIENT)
        }
    }

    fn flags(view: &ElementTreeView<ResourceTree>) -> Vec<(String, bool)> {
        view.nodes()
            .unwrap()
            .into_iter()
            .map(|n| (n.name.to_string(), n.disabled))
            .collect()
    }

    #[test]
    fn test_is_disabled_rule() {
        assert!(!is_disabled(None, "Patient"));
        assert!(!is_disabled(Some(""), "Patient"));
        assert!(!is_disabled(Some("Patient"), "Patient"));
        assert!(is_disabled(Some("Patient"), "Observation"));
    }

    #[test]
    fn test_nodes_follow_tree_order() {
        let mut store = FocusStore::new(None);
        let view = ElementTreeView::new(fixture_tree(), store.subscribe());
        let nodes = view.nodes().unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name, "Patient");
        assert_eq!(nodes[0].key, 0);
        assert_eq!(nodes[0].resource.contains.len(), 1);
        assert_eq!(nodes[1].name, "Observation");
        assert_eq!(nodes[1].key, 1);
        assert!(nodes.iter().all(|n| !n.disabled));
    }

    #[test]
    fn test_focus_disables_other_resources() {
        let mut store = FocusStore::new(None);
        let mut view = ElementTreeView::new(fixture_tree(), store.subscribe());

        store.set("Patient");
        assert!(view.refresh());
        assert_eq!(
            flags(&view),
            vec![("Patient".into(), false), ("Observation".into(), true)]
        );

        store.clear();
        assert!(view.refresh());
        assert_eq!(
            flags(&view),
            vec![("Patient".into(), false), ("Observation".into(), false)]
        );
    }

    #[test]
    fn test_view_ignores_store_until_refresh() {
        let mut store = FocusStore::new(None);
        let mut view = ElementTreeView::new(fixture_tree(), store.subscribe());

        store.set("Observation");
        assert_eq!(view.focus(), None);
        view.refresh();
        assert_eq!(view.focus(), Some("Observation"));
    }

    #[test]
    fn test_unknown_focus_disables_everything() {
        let mut store = FocusStore::new(Some("Encounter"));
        let view = ElementTreeView::new(fixture_tree(), store.subscribe());
        assert!(view.nodes().unwrap().iter().all(|n| n.disabled));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut store = FocusStore::new(Some("Patient"));
        let mut view = ElementTreeView::new(fixture_tree(), store.subscribe());
        assert!(!view.refresh());
        let first = view.nodes().unwrap();
        let second = view.nodes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_tree_has_no_nodes() {
        let mut store = FocusStore::new(Some("Patient"));
        let view = ElementTreeView::new(ResourceTree::new(), store.subscribe());
        assert!(view.nodes().unwrap().is_empty());
    }

    #[test]
    fn test_missing_definition_is_an_error() {
        let mut store = FocusStore::new(None);
        let view = ElementTreeView::new(BrokenProvider, store.subscribe());
        match view.nodes() {
            Err(ElementTreeError::MissingResource(name)) => assert_eq!(name, "Ghost"),
            other => panic!("Expected MissingResource, got {:?}", other),
        }
    }

    #[test]
    fn test_node_serializes_flat() {
        let mut store = FocusStore::new(Some("Observation"));
        let view = ElementTreeView::new(fixture_tree(), store.subscribe());
        let nodes = view.nodes().unwrap();
        let json = serde_json::to_value(&nodes[0]).unwrap();

        assert_eq!(json["name"], "Patient");
        assert_eq!(json["key"], 0);
        assert_eq!(json["disabled"], true);
        assert_eq!(json["definition"], "A patient");
        assert_eq!(json["contains"][0]["path"], "Patient.gender");
    }
}
