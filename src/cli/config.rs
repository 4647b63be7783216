//! Settings for interactive play

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Interactive play configuration.
///
/// Read from an optional JSON file; fields missing from the file keep their
/// defaults, and command-line flags are applied on top.
///
/// ```
/// use oxo::{Player, cli::config::PlayConfig};
///
/// let config: PlayConfig = serde_json::from_str(r#"{ "human": "O" }"#).unwrap();
/// assert_eq!(config.human, Player::O);
/// assert!(config.spinner);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark controlled by the human
    pub human: Player,

    /// Print value and tied moves after each computer move
    pub show_analysis: bool,

    /// Show a spinner while the computer searches
    pub spinner: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Player::X,
            show_analysis: false,
            spinner: true,
        }
    }
}

impl PlayConfig {
    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an IO error when the file cannot be read and
    /// [`crate::Error::Config`] when it is not valid JSON for this type.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| crate::Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_analysis(mut self, show: bool) -> Self {
        self.show_analysis = show;
        self
    }

    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }
}
