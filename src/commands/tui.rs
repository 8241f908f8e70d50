//! Tui command implementation

use crate::cli::TuiArgs;
use crate::config::Config;
use crate::error::Result;
use crate::tui::{self, App};

pub fn run(args: TuiArgs, config: &Config) -> Result<()> {
    let tree = super::load_tree(args.tree.as_deref(), config)?;
    let focus = super::resolve_focus(args.focus.as_deref(), config, &tree).map(str::to_string);

    let mut app = App::new(tree, focus.as_deref())?;
    app.colors = !args.no_color && config.display.color_scheme != "none";

    tracing::info!(resources = app.view.provider().len(), "Starting picker");
    tui::run(app)
}
