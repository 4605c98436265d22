//! Game settings, optionally loaded from a TOML file
//!
//! ```toml
//! accusation_threshold = 2
//! show_banner = true
//! list_suspects = false
//! echo_input = false
//! ```

use crate::error::GameError;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Minimum number of matching clues for an accusation to stand
pub const DEFAULT_ACCUSATION_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub accusation_threshold: usize,
    pub show_banner: bool,
    /// Print the suspect roster before asking for the accusation
    pub list_suspects: bool,
    /// Echo piped stdin lines to stdout after the prompt
    pub echo_input: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            accusation_threshold: DEFAULT_ACCUSATION_THRESHOLD,
            show_banner: true,
            list_suspects: false,
            echo_input: false,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Settings, GameError> {
        let settings: Settings = toml::from_str(text)?;
        if settings.accusation_threshold == 0 {
            return Err(GameError::Config(
                "accusation_threshold must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Settings, GameError> {
        debug!("Loading settings from {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::Io(format!("{}: {}", path.display(), e)))?;
        let settings = Settings::from_toml(&text)?;
        debug!("Settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
        assert_eq!(Settings::default().accusation_threshold, 2);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml("accusation_threshold = 3\n").unwrap();
        assert_eq!(settings.accusation_threshold, 3);
        assert!(settings.show_banner);
        assert!(!settings.list_suspects);
        assert!(!settings.echo_input);
    }

    #[test]
    fn test_echo_input_is_opt_in() {
        assert!(!Settings::default().echo_input);
        let settings = Settings::from_toml("echo_input = true\n").unwrap();
        assert!(settings.echo_input);
        assert_eq!(settings.accusation_threshold, DEFAULT_ACCUSATION_THRESHOLD);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Settings::from_toml("suspects = [\"Carlos\"]\n").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        assert!(Settings::from_toml("accusation_threshold = 0").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/detective.toml")).unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}
