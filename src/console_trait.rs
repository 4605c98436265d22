//! Core console trait for the game's text I/O
//!
//! Every phase of the game talks to the player through this trait, whether
//! the other end is a real terminal or a scripted headless console in tests.

use log::debug;
use std::fmt;

/// Core trait for console operations
pub trait Console {
    /// Print text without a trailing newline
    fn print(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Print text followed by a newline
    fn println(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.print(text)?;
        self.print("\n")
    }

    /// Print a prompt and make sure it is visible before blocking on input
    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.print(text)?;
        self.flush()
    }

    /// Read one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted (stdin closed, pipe drained,
    /// script consumed).
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;

    /// Force pending output out
    fn flush(&mut self) -> Result<(), ConsoleError> {
        Ok(())
    }
}

/// Console error type
#[derive(Debug, Clone)]
pub struct ConsoleError {
    pub message: String,
}

impl ConsoleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Console error: {}", self.message)
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

/// Strip a trailing `\n` or `\r\n` in place
pub fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Player input read the way `scanf(" %c")` and `scanf(" %[^\n]")` read it.
///
/// Whatever is left of a line after a read stays pending for the next one,
/// across game phases, so `ed` is two choices and `s Carlos` is a choice
/// followed by an accusation. Whitespace, line breaks included, is skipped
/// before every read.
#[derive(Debug, Default)]
pub struct InputCursor {
    pending: String,
}

impl InputCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip whitespace, pulling new lines until something is pending.
    /// Returns false once input is exhausted.
    fn fill(&mut self, console: &mut dyn Console) -> Result<bool, ConsoleError> {
        loop {
            let skip = self.pending.len() - self.pending.trim_start().len();
            self.pending.drain(..skip);
            if !self.pending.is_empty() {
                return Ok(true);
            }
            match console.read_line()? {
                Some(line) => self.pending = line,
                None => return Ok(false),
            }
        }
    }

    /// Next non-whitespace character
    pub fn next_char(
        &mut self,
        console: &mut dyn Console,
    ) -> Result<Option<char>, ConsoleError> {
        if !self.fill(console)? {
            return Ok(None);
        }
        let c = self.pending.remove(0);
        debug!("Input cursor: char {:?}, pending {:?}", c, self.pending);
        Ok(Some(c))
    }

    /// Rest of the current line, starting at its next non-whitespace character
    pub fn rest_of_line(
        &mut self,
        console: &mut dyn Console,
    ) -> Result<Option<String>, ConsoleError> {
        if !self.fill(console)? {
            return Ok(None);
        }
        Ok(Some(std::mem::take(&mut self.pending)))
    }

    /// Text read but not consumed yet
    pub fn pending(&self) -> &str {
        &self.pending
    }
}
