//! Headless console implementation for testing and scripted runs
//!
//! Input comes from a prepared script of lines and all output is collected
//! into a line buffer instead of being written anywhere.

use crate::console_trait::{Console, ConsoleError};
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct HeadlessConsole {
    script: VecDeque<String>,
    buffer: Vec<String>,
    current_line: String,
}

impl HeadlessConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that will answer reads with the given lines, in order
    pub fn with_script<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Completed output lines (for testing)
    pub fn get_buffer(&self) -> &[String] {
        &self.buffer
    }

    /// Get all output as a single string
    pub fn get_output(&self) -> String {
        let mut output = self.buffer.join("\n");
        if !self.current_line.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&self.current_line);
        }
        output
    }

    /// Number of scripted lines not read yet
    pub fn remaining_input(&self) -> usize {
        self.script.len()
    }

    fn flush_line(&mut self) {
        self.buffer.push(std::mem::take(&mut self.current_line));
    }
}

impl Console for HeadlessConsole {
    fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            self.current_line.push_str(line);
            if lines.peek().is_some() {
                self.flush_line();
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let line = self.script.pop_front();
        debug!("Headless: read_line -> {:?}", line);
        Ok(line)
    }
}
