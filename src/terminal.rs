use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal;
use tracing::warn;

/// Puts the terminal in the state the driver draws in, and puts it back when dropped.
///
/// Restoring runs every step even when an earlier one fails, so the terminal is never left in
/// raw mode because the alternate screen couldn't be left.
pub struct TerminalGuard<W: Write> {
    out: W,

    /// Whether this guard turned raw mode on, and so has to turn it off
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enable raw mode, switch to the alternate screen and hide the cursor
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut guard = Self { out, raw: true };

        // on failure, dropping the guard undoes raw mode
        guard.enter_screen()?;

        Ok(guard)
    }

    /// Switch to the alternate screen and hide the cursor, leaving raw mode alone
    pub fn enter_screen_only(out: W) -> io::Result<Self> {
        let mut guard = Self { out, raw: false };
        guard.enter_screen()?;

        Ok(guard)
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::EnterAlternateScreen, cursor::Hide)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show) {
            warn!("Failed to leave the alternate screen: {e}");
        }

        if self.raw {
            if let Err(e) = terminal::disable_raw_mode() {
                warn!("Failed to disable raw mode: {e}");
            }
        }
    }
}
