//! Detective Quest - a small mansion mystery played on the console
//!
//! The player walks a fixed binary tree of rooms, collecting one clue per
//! room, then accuses a suspect. The accusation stands when enough of the
//! collected clues point at that suspect.
//!
//! - `suspects` - clue → suspect lookup table (bucket chains)
//! - `clues` - collected clues in a binary search tree
//! - `mansion` - room arena and builder
//! - `exploration` / `verdict` - the two phases of play
//! - `console_*` - console trait plus terminal and headless implementations

pub mod case_file;
pub mod clues;
pub mod console_headless;
pub mod console_terminal;
pub mod console_trait;
pub mod error;
pub mod exploration;
pub mod game;
pub mod mansion;
pub mod settings;
pub mod suspects;
pub mod verdict;

pub use error::GameError;
pub use game::{Game, Outcome};
pub use settings::Settings;
