//! List command implementation

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::focus::FocusStore;
use crate::format::{format_json, format_list, FormatOptions};
use crate::view::ElementTreeView;

/// Render the list for `args` to a string.
pub fn render(args: &ListArgs, config: &Config) -> Result<String> {
    let tree = super::load_tree(args.tree.as_deref(), config)?;
    let focus = super::resolve_focus(args.focus.as_deref(), config, &tree);

    let mut store = FocusStore::new(focus);
    let view = ElementTreeView::new(tree, store.subscribe());
    let nodes = view.nodes()?;

    if args.json {
        return format_json(&nodes, true);
    }

    let options = FormatOptions::new()
        .with_elements(args.elements || config.display.show_elements)
        .with_max_depth(args.depth.unwrap_or(config.display.max_depth));

    Ok(format_list(&nodes, &options))
}

/// Run the list command
pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    tracing::info!(tree = ?args.tree, focus = ?args.focus, "Listing resources");
    let output = render(&args, config)?;
    print!("{}", output);
    if args.json {
        println!();
    }
    Ok(())
}
