//! Subcommands of the `oxo` binary

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub mod best;
pub mod play;
pub mod self_play;

/// Parse a `--human`-style flag value into a player
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("X", "--human").unwrap(), Player::X);
        assert_eq!(parse_player_token(" o ", "--human").unwrap(), Player::O);
        assert_eq!(parse_player_token("second", "--human").unwrap(), Player::O);

        let err = parse_player_token("z", "--human").unwrap_err();
        assert!(err.to_string().contains("--human"));
    }
}
