//! Terminal console - plain stdout narration and line-based stdin input
//!
//! The game only ever needs whole lines from the player, so input is read
//! with blocking `read_line` calls and no raw-mode terminal handling.

use crate::console_trait::{trim_line_ending, Console, ConsoleError};
use log::debug;
use std::io::{self, BufRead, Write};

pub struct TerminalConsole {
    /// Input buffer for building lines
    buffer: String,
    /// Echo consumed input back to stdout
    echo_input: bool,
}

impl TerminalConsole {
    /// With `echo_piped_input`, lines read from a pipe or file are echoed so
    /// a transcript reads like an interactive session. A tty already shows
    /// what was typed.
    pub fn new(echo_piped_input: bool) -> Self {
        let echo_input = echo_piped_input && !atty::is(atty::Stream::Stdin);
        debug!("Terminal console: echo_input={}", echo_input);
        TerminalConsole {
            buffer: String::new(),
            echo_input,
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Console for TerminalConsole {
    fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        io::stdout().write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ConsoleError> {
        io::stdout().flush()?;
        Ok(())
    }

    /// Read one line from stdin.
    ///
    /// `read_line` reports EOF as `Ok(0)`; that is surfaced as `None` so the
    /// caller can finish the phase instead of spinning on empty input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        self.buffer.clear();
        let bytes_read = io::stdin().lock().read_line(&mut self.buffer)?;

        if bytes_read == 0 {
            debug!("Terminal input: EOF detected (stdin closed)");
            return Ok(None);
        }

        trim_line_ending(&mut self.buffer);
        let line = self.buffer.clone();

        if self.echo_input {
            self.println(&line)?;
        }

        debug!("Terminal input received: '{}'", line);
        Ok(Some(line))
    }
}
