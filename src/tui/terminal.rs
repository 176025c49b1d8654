//! Terminal setup and teardown
//!
//! Handles raw mode and the alternate screen, installs a panic hook that
//! restores the terminal on crash, and runs the main render/event loop.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::flow::Profile;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
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

/// Run the onboarding flow.
///
/// Returns the completed profile, or `None` when the user abandoned the
/// flow. The draft never leaves this function in either case.
pub fn run_flow(settings: Settings) -> Result<Option<Profile>> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(settings);
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::screens::render(frame, &mut app);
        })?;

        let event = events.next()?;
        handle_event(&mut app, event)?;

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(app.outcome.take())
}
