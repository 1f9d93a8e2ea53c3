use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::{App, InputMode};

/// Handle terminal events
/// Returns true if the app should quit
pub fn handle_events(app: &mut App) -> Result<bool> {
    // Poll for events with a timeout
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        match app.input_mode() {
            InputMode::Browse => handle_browse(app, key),
            InputMode::Search => handle_search(app, key),
            InputMode::Dialog => handle_dialog(app, key),
        }
    }

    Ok(app.should_quit())
}

fn handle_browse(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => {
            app.request_quit();
        }
        // Focus the search field
        KeyCode::Char('/') => {
            app.enter_search();
        }
        // Grid navigation
        KeyCode::Left | KeyCode::Char('h') => {
            app.select_left();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.select_right();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_down();
        }
        // Score the selected student
        KeyCode::Char('+' | '=') => {
            app.add_point_selected();
        }
        KeyCode::Char('-' | '_') => {
            app.remove_point_selected();
        }
        // Score the whole class
        KeyCode::Char('a') => {
            app.add_point_to_all();
        }
        KeyCode::Char('x') => {
            app.remove_point_from_all();
        }
        // Roster lifecycle
        KeyCode::Char('n') => {
            app.open_add_dialog();
        }
        KeyCode::Char('r') => {
            app.open_rename_dialog();
        }
        KeyCode::Char('s') => {
            app.open_set_score_dialog();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('0') => {
            app.reset_all_points();
        }
        _ => {}
    }
}

// While a text field has focus, `/` inserts a literal slash; the search
// shortcut only applies in browse mode.
fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Back to browsing; the filter text stays in effect
        KeyCode::Esc | KeyCode::Enter => {
            app.leave_search();
        }
        KeyCode::Backspace => {
            app.search_backspace();
        }
        KeyCode::Left => {
            app.search_left();
        }
        KeyCode::Right => {
            app.search_right();
        }
        KeyCode::Home => {
            app.search_home();
        }
        KeyCode::End => {
            app.search_end();
        }
        // Clear line
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_clear();
        }
        KeyCode::Char(c) => {
            app.search_push(c);
        }
        _ => {}
    }
}

fn handle_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_dialog();
        }
        KeyCode::Enter => {
            app.submit_dialog();
        }
        KeyCode::Backspace => {
            app.dialog_backspace();
        }
        KeyCode::Left => {
            app.dialog_left();
        }
        KeyCode::Right => {
            app.dialog_right();
        }
        KeyCode::Home => {
            app.dialog_home();
        }
        KeyCode::End => {
            app.dialog_end();
        }
        // Clear line
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dialog_clear();
        }
        KeyCode::Char(c) => {
            app.dialog_push(c);
        }
        _ => {}
    }
}
