//! Plain-text and JSON renderings of a node list.

use crate::error::Result;
use crate::resource::ElementNode;
use crate::view::ResourceNode;

/// Format options for list output
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// List elements under each resource
    pub show_elements: bool,
    /// Maximum element nesting to display
    pub max_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_elements: false,
            max_depth: 3,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(mut self, show: bool) -> Self {
        self.show_elements = show;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Render nodes as a numbered list, one resource per item.
pub fn format_list(nodes: &[ResourceNode<'_>], options: &FormatOptions) -> String {
    let mut output = String::new();

    for node in nodes {
        output.push_str(&format!("{}. {}", node.key + 1, node.name));
        if node.disabled {
            output.push_str(" (disabled)");
        }
        output.push('\n');

        if options.show_elements {
            for element in &node.resource.contains {
                format_element(element, &mut output, 1, options.max_depth);
            }
        }
    }

    output
}

fn format_element(element: &ElementNode, output: &mut String, depth: usize, max_depth: usize) {
    if depth > max_depth {
        return;
    }

    let indent = "   ".repeat(depth);
    output.push_str(&format!("{}- {}: {}\n", indent, element.name, element.type_code));

    for child in &element.contains {
        format_element(child, output, depth + 1, max_depth);
    }
}

/// Render nodes as a JSON array.
pub fn format_json(nodes: &[ResourceNode<'_>], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(nodes)?
    } else {
        serde_json::to_string(nodes)?
    };
    Ok(json)
}
