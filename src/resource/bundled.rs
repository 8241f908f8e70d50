use std::path::PathBuf;

use super::ResourceTree;
use crate::error::{ElementTreeError, Result};

const BUNDLED_TREE: &str = include_str!("../../resources/default_tree.json");

/// The resource tree shipped with the binary (a subset of FHIR R4).
pub fn bundled_tree() -> Result<ResourceTree> {
    ResourceTree::from_json_str(BUNDLED_TREE).map_err(|source| ElementTreeError::TreeParse {
        path: PathBuf::from("<bundled>"),
        source,
    })
}
