//! Resource and element definitions available to the picker.
//!
//! A [`ResourceTree`] is built once, before any view is created, and is
//! read-only afterwards. Views consume it through [`ResourceProvider`] so
//! tests can substitute fixture providers.

mod bundled;
mod definition;
mod tree;

pub use bundled::bundled_tree;
pub use definition::{ElementNode, ResourceDefinition};
pub use tree::ResourceTree;

/// Read-only source of resource names and their definitions.
pub trait ResourceProvider {
    /// Resource names in display order.
    fn resource_names(&self) -> Vec<&str>;

    /// Definition for `name`, or `None` if the provider has none.
    fn get_resource(&self, name: &str) -> Option<&ResourceDefinition>;
}
