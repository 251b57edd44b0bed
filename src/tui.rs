use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Puts the terminal back the way it was when dropped, whatever path we leave by.
pub struct TerminalGuard {
    pub terminal: Terminal,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        if let Err(err) = restore() {
            tracing::error!(%err, "failed to restore terminal");
        }
    }
}

/// Initialise the terminal: enter raw mode + alternate screen + mouse capture.
pub fn init() -> Result<TerminalGuard> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err).context("failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = match ratatui::Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore();
            return Err(err.into());
        }
    };
    Ok(TerminalGuard { terminal })
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}
