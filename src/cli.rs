use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Element Tree - Browse the resources and elements available for analytic queries
#[derive(Parser, Debug)]
#[command(name = "element-tree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resource list
    List(ListArgs),

    /// Launch the interactive resource picker
    Tui(TuiArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Resource tree JSON file (defaults to the bundled tree)
    #[arg(short, long, value_name = "PATH", env = "ELEMENT_TREE_SOURCE")]
    pub tree: Option<PathBuf>,

    /// Focused resource; every other resource is shown disabled
    #[arg(short, long, value_name = "NAME")]
    pub focus: Option<String>,

    /// List the elements of each resource
    #[arg(short, long)]
    pub elements: bool,

    /// Maximum element depth to display
    #[arg(short = 'd', long, value_name = "N")]
    pub depth: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Resource tree JSON file (defaults to the bundled tree)
    #[arg(short, long, value_name = "PATH", env = "ELEMENT_TREE_SOURCE")]
    pub tree: Option<PathBuf>,

    /// Resource to focus on start
    #[arg(short, long, value_name = "NAME")]
    pub focus: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}
