//! Application state for the TUI.

use std::collections::HashSet;

use crate::error::Result;
use crate::focus::FocusStore;
use crate::resource::{ElementNode, ResourceTree};
use crate::view::ElementTreeView;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Help overlay mode.
    Help,
}

/// What a visible row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// A resource, with its position in the tree and total element count.
    Resource { key: usize, element_count: usize },
    /// An element of the resource named by the row.
    Element { path: String, type_code: String },
}

/// A visible row in the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Name of the resource this row belongs to.
    pub resource: String,
    /// Resource or element name.
    pub label: String,
    pub kind: RowKind,
    /// Depth in the tree (0 = resource).
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    /// Inherited from the owning resource.
    pub disabled: bool,
    pub definition: String,
}

impl VisibleRow {
    /// Key into the expanded set: resource name or element path.
    pub fn expand_key(&self) -> &str {
        match &self.kind {
            RowKind::Resource { .. } => &self.resource,
            RowKind::Element { path, .. } => path,
        }
    }

    pub fn is_resource(&self) -> bool {
        matches!(self.kind, RowKind::Resource { .. })
    }
}

/// Main application state for the TUI.
pub struct App {
    /// Tree view, subscribed to `focus`.
    pub view: ElementTreeView<ResourceTree>,

    /// Owner of the focus value.
    pub focus: FocusStore,

    /// Flattened visible rows (for rendering).
    pub rows: Vec<VisibleRow>,

    /// Currently selected index in rows.
    pub selected: usize,

    /// Expanded resource names and element paths.
    pub expanded: HashSet<String>,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Render with colors.
    pub colors: bool,
}

impl App {
    /// Create a new App over `tree`, starting with `initial_focus`.
    pub fn new(tree: ResourceTree, initial_focus: Option<&str>) -> Result<Self> {
        let mut focus = FocusStore::new(initial_focus);
        let view = ElementTreeView::new(tree, focus.subscribe());

        let mut app = Self {
            view,
            focus,
            rows: Vec::new(),
            selected: 0,
            expanded: HashSet::new(),
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            colors: true,
        };

        if let Some(name) = app.focus.current().map(str::to_string) {
            app.expanded.insert(name);
        }
        app.rebuild_rows()?;
        app.select_focused();
        Ok(app)
    }

    /// Get the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&VisibleRow> {
        self.rows.get(self.selected)
    }

    /// Flatten the view's nodes and expanded elements into rows.
    pub fn rebuild_rows(&mut self) -> Result<()> {
        let nodes = self.view.nodes()?;
        let mut rows = Vec::with_capacity(nodes.len());

        for node in &nodes {
            let is_expanded = self.expanded.contains(node.name);
            rows.push(VisibleRow {
                resource: node.name.to_string(),
                label: node.name.to_string(),
                kind: RowKind::Resource {
                    key: node.key,
                    element_count: node.resource.element_count(),
                },
                depth: 0,
                has_children: !node.resource.contains.is_empty(),
                is_expanded,
                disabled: node.disabled,
                definition: node.resource.definition.clone(),
            });

            if is_expanded {
                for element in &node.resource.contains {
                    self.push_element_rows(&mut rows, node.name, element, 1, node.disabled);
                }
            }
        }

        self.rows = rows;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        Ok(())
    }

    fn push_element_rows(
        &self,
        rows: &mut Vec<VisibleRow>,
        resource: &str,
        element: &ElementNode,
        depth: usize,
        disabled: bool,
    ) {
        let is_expanded = self.expanded.contains(&element.path);
        rows.push(VisibleRow {
            resource: resource.to_string(),
            label: element.name.clone(),
            kind: RowKind::Element {
                path: element.path.clone(),
                type_code: element.type_code.clone(),
            },
            depth,
            has_children: !element.is_leaf(),
            is_expanded,
            disabled,
            definition: element.definition.clone(),
        });

        if is_expanded {
            for child in &element.contains {
                self.push_element_rows(rows, resource, child, depth + 1, disabled);
            }
        }
    }

    /// Move the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, last as isize) as usize;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn expand_selected(&mut self) -> Result<()> {
        let key = match self.selected_row() {
            Some(row) if row.has_children && !row.is_expanded => row.expand_key().to_string(),
            _ => return Ok(()),
        };
        self.expanded.insert(key);
        self.rebuild_rows()
    }

    /// Collapse the selected row, or move to its parent if it is a
    /// collapsed or leaf element.
    pub fn collapse_selected(&mut self) -> Result<()> {
        let Some(row) = self.selected_row() else {
            return Ok(());
        };

        if row.is_expanded {
            let key = row.expand_key().to_string();
            self.expanded.remove(&key);
            return self.rebuild_rows();
        }

        if row.depth > 0 {
            let depth = row.depth;
            if let Some(parent) = self.rows[..self.selected]
                .iter()
                .rposition(|candidate| candidate.depth < depth)
            {
                self.selected = parent;
            }
        }
        Ok(())
    }

    pub fn toggle_selected(&mut self) -> Result<()> {
        let is_expanded = match self.selected_row() {
            Some(row) => row.is_expanded,
            None => return Ok(()),
        };
        if is_expanded {
            self.collapse_selected()
        } else {
            self.expand_selected()
        }
    }

    /// Focus the resource owning the selected row.
    pub fn focus_selected(&mut self) -> Result<()> {
        let Some(name) = self.selected_row().map(|row| row.resource.clone()) else {
            return Ok(());
        };
        if self.focus.set(&name) {
            self.status_message = Some(format!("Focused on {}", name));
        }
        self.sync_focus()?;
        Ok(())
    }

    pub fn clear_focus(&mut self) -> Result<()> {
        if self.focus.clear() {
            self.status_message = Some("Focus cleared".to_string());
        }
        self.sync_focus()?;
        Ok(())
    }

    /// Re-render rows if the view's focus changed.
    ///
    /// Returns `true` if rows were rebuilt.
    pub fn sync_focus(&mut self) -> Result<bool> {
        if !self.view.refresh() {
            return Ok(false);
        }
        self.rebuild_rows()?;
        Ok(true)
    }

    fn select_focused(&mut self) {
        if let Some(focus) = self.view.focus() {
            if let Some(pos) = self.rows.iter().position(|row| row.resource == focus) {
                self.selected = pos;
            }
        }
    }
}
