//! Terminal lifecycle wrapper.
//!
//! Owns the ratatui terminal and the raw-mode/alternate-screen transitions.
//! The panic hook in `main` performs the same restore sequence so a crash
//! never leaves the terminal unusable.

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

/// Wrapper around the terminal with enter/exit lifecycle management.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Poll for the next input event, returning `None` on timeout.
    ///
    /// The timeout doubles as the UI tick: spinner frames advance and the
    /// fetch handle is polled once per expiry.
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}
