//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, and installs a panic hook
//! so a crash still leaves the terminal usable.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::{EdubudgetPaths, Settings};
use crate::dashboard::Dashboard;
use crate::error::EdubudgetError;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive dashboard until the user quits
pub fn run_tui(dashboard: Dashboard, settings: &Settings, paths: &EdubudgetPaths) -> Result<()> {
    let (width, _) = terminal::size()?;
    let mut terminal = init_terminal()?;
    let mut app = App::new(dashboard, settings, paths, width);
    let events = EventHandler::default();

    let outcome = event_loop(&mut terminal, &mut app, &events);
    restore_terminal()?;
    outcome
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events
            .next()
            .map_err(|_| EdubudgetError::Tui("terminal event stream closed".to_string()))?;
        handle_event(app, event)?;
    }
    Ok(())
}
