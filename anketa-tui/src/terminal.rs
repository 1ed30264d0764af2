//! Terminal management
//!
//! Puts the terminal into the state the form needs and gives it back on exit
//! or panic. The form draws its own text cursor, so the hardware cursor stays
//! hidden while the form is up.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, hidden cursor
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}

/// Restore terminal to normal mode
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    leave(terminal.backend_mut())?;
    Ok(())
}

/// Install panic hook to restore terminal on panic
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = leave(&mut io::stdout());
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_writes_restore_sequences() {
        let mut out = Vec::new();
        // Raw mode may be unavailable without a tty; only the escape codes matter
        let _ = leave(&mut out);
        assert!(!out.is_empty());
    }
}
