//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode};
use crate::error::Result;

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key)?;
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Help => {
            handle_help_mode(app, key);
            Ok(())
        }
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<()> {
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        // Esc backs out of a focus before quitting
        KeyCode::Esc => {
            if app.focus.current().is_some() {
                app.clear_focus()?;
            } else {
                app.should_quit = true;
            }
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.selected = 0,
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::PageUp => app.move_selection(-20),
        KeyCode::PageDown => app.move_selection(20),

        // Expand/Collapse
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => app.expand_selected()?,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => app.collapse_selected()?,
        KeyCode::Char(' ') => app.toggle_selected()?,

        // Focus
        KeyCode::Char('f') => app.focus_selected()?,
        KeyCode::Char('u') => app.clear_focus()?,

        KeyCode::Char('?') => app.mode = Mode::Help,

        _ => {}
    }
    Ok(())
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}
