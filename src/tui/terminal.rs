//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;

use tracing::info;

use crate::config::Settings;
use crate::data::MockDataProvider;
use crate::navigation::Route;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before any panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application, starting on `start`
pub fn run_tui(settings: Settings, start: Route) -> Result<()> {
    let tick_rate = settings.tick_rate();
    let mut terminal = init_terminal()?;

    let mut app = App::new(MockDataProvider::new(), settings, start, Instant::now());
    info!(route = %start, "TUI started");

    let events = EventHandler::new(tick_rate);

    // Loop errors are returned after the terminal is restored
    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| super::views::render(frame, &app))?;

            let event = events.next()?;
            handle_event(&mut app, event, Instant::now())?;

            if app.should_quit {
                return Ok(());
            }
        }
    })();

    restore_terminal()?;
    info!("TUI stopped");

    result
}
