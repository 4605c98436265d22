// Game Error Handling

use crate::console_trait::ConsoleError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum GameError {
    // Console I/O failed (stdout closed, stdin unreadable)
    Console(String),

    // Settings file could not be parsed
    Config(String),

    // Room records reference a room that does not exist
    InvalidMap(String),

    // IO errors outside the console (reading the settings file)
    Io(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Console(msg) => write!(f, "Console failure: {}", msg),
            GameError::Config(msg) => write!(f, "Invalid settings: {}", msg),
            GameError::InvalidMap(msg) => write!(f, "Invalid mansion map: {}", msg),
            GameError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ConsoleError> for GameError {
    fn from(error: ConsoleError) -> Self {
        GameError::Console(error.message)
    }
}

impl From<std::io::Error> for GameError {
    fn from(error: std::io::Error) -> Self {
        GameError::Io(error.to_string())
    }
}

impl From<toml::de::Error> for GameError {
    fn from(error: toml::de::Error) -> Self {
        GameError::Config(error.to_string())
    }
}
