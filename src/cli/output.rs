//! Output formatting and spinners for the CLI

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Action, Outcome};

/// Create a spinner for a running search
pub fn create_spinner(message: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Write a section header
pub fn write_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// Write a key-value pair
pub fn write_kv<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:18} {}", format!("{}:", key), value)
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

pub fn format_actions(actions: &[Action]) -> String {
    actions
        .iter()
        .map(Action::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line description of a game result
pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("{player} wins"),
        Outcome::Draw => "Draw".to_string(),
        Outcome::Ongoing => "Game in progress".to_string(),
    }
}

/// Value from X's perspective in words
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(549_946), "549,946");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_actions() {
        let actions = [Action::new(0, 0), Action::new(2, 1)];
        assert_eq!(format_actions(&actions), "(0, 0) (2, 1)");
    }

    #[test]
    fn test_write_kv_aligns_values() {
        let mut out = Vec::new();
        write_kv(&mut out, "Best move", "(0, 2)").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  Best move:         (0, 2)\n");
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(Outcome::Win(Player::O)), "O wins");
        assert_eq!(describe_outcome(Outcome::Draw), "Draw");
    }
}
