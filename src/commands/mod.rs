//! Subcommand drivers.

pub mod list;
pub mod tui;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::resource::{bundled_tree, ResourceTree};

/// Load the tree named on the command line, else the configured one,
/// else the bundled tree.
pub fn load_tree(cli_path: Option<&Path>, config: &Config) -> Result<ResourceTree> {
    match cli_path.or(config.tree.source.as_deref()) {
        Some(path) => ResourceTree::load(path),
        None => {
            tracing::debug!("Using bundled resource tree");
            bundled_tree()
        }
    }
}

/// Pick the focus from the command line, falling back to config, and warn
/// when it names a resource the tree does not have.
pub fn resolve_focus<'a>(
    cli_focus: Option<&'a str>,
    config: &'a Config,
    tree: &ResourceTree,
) -> Option<&'a str> {
    let focus = cli_focus
        .filter(|name| !name.is_empty())
        .or_else(|| config.initial_focus());

    if let Some(name) = focus {
        if !tree.contains(name) {
            tracing::warn!(focus = name, "Focused resource is not in the tree; all resources will be disabled");
        }
    }
    focus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceDefinition;
    use std::path::PathBuf;

    #[test]
    fn test_load_tree_defaults_to_bundled() {
        let tree = load_tree(None, &Config::default()).unwrap();
        assert!(tree.contains("Patient"));
    }

    #[test]
    fn test_load_tree_cli_path_wins() {
        let mut config = Config::default();
        config.tree.source = Some(PathBuf::from("/nonexistent/config-tree.json"));
        let err = load_tree(Some(Path::new("/nonexistent/cli-tree.json")), &config).unwrap_err();
        assert!(err.to_string().contains("cli-tree.json"));
    }

    #[test]
    fn test_resolve_focus_precedence() {
        let tree = ResourceTree::new().with_resource("Patient", ResourceDefinition::default());
        let mut config = Config::default();
        config.tree.initial_focus = Some("Observation".to_string());

        assert_eq!(resolve_focus(Some("Patient"), &config, &tree), Some("Patient"));
        assert_eq!(resolve_focus(None, &config, &tree), Some("Observation"));
        assert_eq!(resolve_focus(Some(""), &config, &tree), Some("Observation"));
        assert_eq!(resolve_focus(None, &Config::default(), &tree), None);
    }
}
