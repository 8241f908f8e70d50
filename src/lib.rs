//! Element Tree - a picker for the resources and elements of a health-data
//! schema, used when building analytic queries.
//!
//! This crate provides:
//! - An ordered resource/element tree with JSON loading and a bundled default
//! - A focus store with change subscriptions
//! - A view that derives each resource's disabled state from the focus
//! - Text, JSON and interactive TUI renderings of that view

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod focus;
pub mod format;
pub mod resource;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{ElementTreeError, Result};
pub use focus::{FocusStore, FocusSubscription};
pub use resource::{ElementNode, ResourceDefinition, ResourceProvider, ResourceTree};
pub use view::{ElementTreeView, ResourceNode};
