use serde::{Deserialize, Serialize};

/// Metadata for a single resource type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Human-readable description of the resource
    #[serde(default)]
    pub definition: String,

    /// Top-level elements, in display order
    #[serde(default)]
    pub contains: Vec<ElementNode>,
}

/// An element (field) of a resource, possibly with nested elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    /// Element name (last segment of the path)
    pub name: String,

    /// Full dotted path, e.g. `Patient.name.given`
    pub path: String,

    /// Type code, e.g. `string`, `CodeableConcept`, `BackboneElement`
    #[serde(rename = "type")]
    pub type_code: String,

    #[serde(default)]
    pub definition: String,

    /// Child elements (backbone elements and complex types)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<ElementNode>,
}

impl ResourceDefinition {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            contains: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: ElementNode) -> Self {
        self.contains.push(element);
        self
    }

    /// Total number of elements, including nested ones.
    pub fn element_count(&self) -> usize {
        self.contains.iter().map(ElementNode::element_count).sum()
    }
}

impl ElementNode {
    /// Create an element under `parent_path`.
    pub fn new(parent_path: &str, name: impl Into<String>, type_code: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: format!("{}.{}", parent_path, name),
            name,
            type_code: type_code.into(),
            definition: String::new(),
            contains: Vec::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, type_code: impl Into<String>) -> Self {
        let child = ElementNode::new(&self.path, name, type_code);
        self.contains.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.contains.is_empty()
    }

    /// This element plus all of its descendants.
    pub fn element_count(&self) -> usize {
        1 + self
            .contains
            .iter()
            .map(ElementNode::element_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_path_is_built_from_parent() {
        let element = ElementNode::new("Patient", "name", "HumanName").with_child("given", "string");
        assert_eq!(element.path, "Patient.name");
        assert_eq!(element.contains[0].path, "Patient.name.given");
        assert!(!element.is_leaf());
        assert!(element.contains[0].is_leaf());
    }

    #[test]
    fn test_element_count_is_recursive() {
        let resource = ResourceDefinition::new("A patient")
            .with_element(ElementNode::new("Patient", "gender", "code"))
            .with_element(
                ElementNode::new("Patient", "contact", "BackboneElement")
                    .with_child("name", "HumanName")
                    .with_child("telecom", "ContactPoint"),
            );
        assert_eq!(resource.element_count(), 4);
    }

    #[test]
    fn test_element_type_uses_type_key() {
        let json = r#"{ "name": "status", "path": "Observation.status", "type": "code" }"#;
        let element: ElementNode = serde_json::from_str(json).unwrap();
        assert_eq!(element.type_code, "code");
        assert!(element.definition.is_empty());
        assert!(element.contains.is_empty());
    }
}
