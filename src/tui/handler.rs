//! Event handler for the TUI
//!
//! Routes keyboard events to app actions based on the input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(width, _) => {
            app.resize(width);
            Ok(())
        }
        Event::Tick => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('/') => app.start_search(),

        // Filters
        KeyCode::Char('y') => app.cycle_year(),
        KeyCode::Char('d') => app.cycle_department(),
        KeyCode::Char('p') => app.cycle_program(),
        KeyCode::Char('r') => app.reset_filters(),

        // Sort by column 1-8
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            app.sort_by_index(index);
        }

        // Pagination
        KeyCode::Char(']') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('[') | KeyCode::PageUp => app.prev_page(),

        KeyCode::Char('c') => app.toggle_chart(),

        // Offenders carousel
        KeyCode::Char('h') | KeyCode::Left => app.carousel_prev(),
        KeyCode::Char('l') | KeyCode::Right => app.carousel_next(),

        KeyCode::Char('e') => match app.export_view() {
            Ok(rows) => {
                let message = format!("Exported {} records to {}", rows, app.export_path.display());
                app.set_status(message);
            }
            Err(e) => app.set_status(e.to_string()),
        },

        _ => {}
    }

    Ok(())
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.commit_search(),
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.apply_search_input();
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.apply_search_input();
        }
        KeyCode::Delete => {
            app.search_input.delete();
            app.apply_search_input();
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),
        _ => {}
    }

    Ok(())
}
