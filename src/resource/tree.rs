use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{ResourceDefinition, ResourceProvider};
use crate::error::{ElementTreeError, Result};

/// Ordered mapping from resource name to its definition.
///
/// Iteration follows insertion order, which is also the order resources
/// appear on screen. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTree {
    entries: Vec<(String, ResourceDefinition)>,
    index: HashMap<String, usize>,
}

impl ResourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource. An existing name keeps its position and has its
    /// definition replaced.
    pub fn insert(&mut self, name: impl Into<String>, definition: ResourceDefinition) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = definition,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, definition));
            }
        }
    }

    pub fn with_resource(mut self, name: impl Into<String>, definition: ResourceDefinition) -> Self {
        self.insert(name, definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ResourceDefinition> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceDefinition)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Parse a tree from JSON. Object key order is kept.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a tree from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ElementTreeError::TreeRead {
            path: path.to_path_buf(),
            source,
        })?;

        let tree = Self::from_json_str(&content).map_err(|source| ElementTreeError::TreeParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), resources = tree.len(), "Loaded resource tree");
        Ok(tree)
    }
}

impl ResourceProvider for ResourceTree {
    fn resource_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn get_resource(&self, name: &str) -> Option<&ResourceDefinition> {
        self.get(name)
    }
}

impl Serialize for ResourceTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, definition) in &self.entries {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

struct ResourceTreeVisitor;

impl<'de> Visitor<'de> for ResourceTreeVisitor {
    type Value = ResourceTree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of resource names to resource definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<ResourceTree, A::Error> {
        let mut tree = ResourceTree::new();
        while let Some((name, definition)) = access.next_entry::<String, ResourceDefinition>()? {
            if tree.contains(&name) {
                return Err(A::Error::custom(format!("duplicate resource '{}'", name)));
            }
            tree.insert(name, definition);
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for ResourceTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ResourceTreeVisitor)
    }
}
