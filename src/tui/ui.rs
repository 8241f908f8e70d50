//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, Mode, RowKind, VisibleRow};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Resource list
            Constraint::Length(4), // Details
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_tree_area(app, frame, chunks[1]);
    render_details(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    if app.mode == Mode::Help {
        render_help_overlay(app, frame);
    }
}

/// Apply `style` only when colors are enabled.
fn paint(app: &App, style: Style) -> Style {
    if app.colors {
        style
    } else {
        Style::default()
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let resource_count = app.view.provider().len();
    let focus = app.view.focus().unwrap_or("none");

    let header_text = format!(" {} resources  │  Focus: {}", resource_count, focus);

    let block = Block::default()
        .title(" Element Tree ")
        .borders(Borders::ALL)
        .border_style(paint(app, Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(paint(app, Style::default().fg(Color::White)));

    frame.render_widget(paragraph, area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(paint(app, Style::default().fg(Color::Gray)));

    if app.rows.is_empty() {
        let paragraph = Paragraph::new("No resources")
            .block(block)
            .alignment(Alignment::Center)
            .style(paint(app, Style::default().fg(Color::DarkGray)));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner_area.height as usize;
    let scroll_offset = calculate_scroll_offset(app.selected, visible_height, app.rows.len());

    for (i, row) in app
        .rows
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .enumerate()
    {
        let y = inner_area.y + i as u16;
        let is_selected = scroll_offset + i == app.selected;
        let line = row_line(app, row, is_selected);
        frame.render_widget(Paragraph::new(line), Rect::new(inner_area.x, y, inner_area.width, 1));
    }
}

fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected.saturating_sub(padding)
    }
}

fn row_line<'a>(app: &App, row: &'a VisibleRow, is_selected: bool) -> Line<'a> {
    let indent = "  ".repeat(row.depth);
    let icon = if !row.has_children {
        "  "
    } else if row.is_expanded {
        "▼ "
    } else {
        "► "
    };

    let is_focused = app.view.focus() == Some(row.resource.as_str());

    let mut spans = Vec::new();
    match &row.kind {
        RowKind::Resource { key, element_count } => {
            let name_style = if row.disabled {
                disabled_style(app, is_selected)
            } else if is_focused {
                paint(app, Style::default().fg(Color::Yellow)).bold()
            } else {
                paint(app, Style::default().fg(Color::Blue)).bold()
            };
            spans.push(Span::styled(format!("{:>3}. {}", key + 1, icon), name_style));
            spans.push(Span::styled(row.label.as_str(), name_style));
            spans.push(Span::styled(
                format!("  ({} elements)", element_count),
                muted_style(app, row.disabled, is_selected),
            ));
        }
        RowKind::Element { type_code, .. } => {
            let name_style = if row.disabled {
                disabled_style(app, is_selected)
            } else {
                paint(app, Style::default().fg(Color::White))
            };
            let type_style = if row.disabled {
                disabled_style(app, is_selected)
            } else {
                paint(app, Style::default().fg(Color::Cyan))
            };
            spans.push(Span::styled(format!("     {}{}", indent, icon), name_style));
            spans.push(Span::styled(row.label.as_str(), name_style));
            spans.push(Span::styled(format!(": {}", type_code), type_style));
        }
    }

    let line = Line::from(spans);
    if is_selected {
        line.style(paint(app, Style::default().bg(Color::DarkGray)).add_modifier(selection_modifier(app)))
    } else {
        line
    }
}

fn disabled_style(app: &App, is_selected: bool) -> Style {
    if !app.colors {
        return Style::default().add_modifier(Modifier::DIM);
    }
    // DarkGray would vanish on the selection background
    let fg = if is_selected { Color::Gray } else { Color::DarkGray };
    Style::default().fg(fg)
}

fn muted_style(app: &App, disabled: bool, is_selected: bool) -> Style {
    if disabled {
        disabled_style(app, is_selected)
    } else {
        paint(app, Style::default().fg(Color::Gray))
    }
}

fn selection_modifier(app: &App) -> Modifier {
    if app.colors {
        Modifier::empty()
    } else {
        Modifier::REVERSED
    }
}

fn render_details(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(paint(app, Style::default().fg(Color::Gray)));

    let text = match app.selected_row() {
        Some(row) => {
            let path = match &row.kind {
                RowKind::Resource { .. } => row.resource.as_str(),
                RowKind::Element { path, .. } => path.as_str(),
            };
            format!(" {}  {}", path, row.definition)
        }
        None => String::new(),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(paint(app, Style::default().fg(Color::White)));

    frame.render_widget(paragraph, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[↑↓] Navigate  [←→] Expand  [f] Focus  [u] Unfocus  [?] Help  [q] Quit",
        Mode::Help => "[Esc] Close",
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(paint(app, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_help_overlay(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let help_width = 50u16.min(area.width.saturating_sub(8));
    let help_height = 20u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k        Move up
 ↓/j        Move down
 →/l/Enter  Expand resource or element
 ←/h/Bksp   Collapse / Go to parent
 Space      Toggle expand/collapse
 g          Go to top
 G          Go to bottom

 FOCUS
 ─────────────────────────────────
 f          Focus selected resource
 u          Clear focus
 Esc        Clear focus, or quit
 ?          Toggle this help
 q          Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(paint(app, Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(paint(app, Style::default().fg(Color::White)));

    frame.render_widget(paragraph, help_area);
}
