use std::io::{self, Write};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};

/// Raw mode + alternate screen for the lifetime of the guard.
///
/// Dropping the guard restores the terminal, so an early `?` between setup
/// and the event loop cannot leave the shell in raw mode.
pub struct TerminalGuard {
    armed: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { armed: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Restore now and report failures, instead of swallowing them on drop.
    pub fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        restore_terminal(&mut io::stdout())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = restore_terminal(&mut io::stdout());
        }
    }
}

/// Leave raw mode and the alternate screen and show the cursor again.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)?;
    Ok(())
}
