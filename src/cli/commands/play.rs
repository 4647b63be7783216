//! Play command - interactive game against the engine

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::{
        config::PlayConfig,
        output::{create_spinner, describe_outcome, describe_value, format_actions},
    },
    search::{Analysis, analyze},
    tictactoe::{Action, Board, Game, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Mark you play (`x` moves first, `o` second)
    #[arg(long)]
    pub human: Option<String>,

    /// JSON file with play settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show the engine's evaluation after each of its moves
    #[arg(long)]
    pub analysis: bool,

    /// Do not show a spinner while the engine searches
    #[arg(long)]
    pub no_spinner: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!(human = %config.human, "starting interactive game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run(&config, &mut stdin.lock(), &mut stdout.lock())?;

    info!(outcome = ?outcome, "game finished");
    Ok(())
}

/// File settings first, then command-line flags on top
fn resolve_config(args: &PlayArgs) -> Result<PlayConfig> {
    let mut config = match &args.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };

    if let Some(value) = &args.human {
        config = config.with_human(super::parse_player_token(value, "--human")?);
    }
    if args.analysis {
        config = config.with_analysis(true);
    }
    if args.no_spinner {
        config = config.with_spinner(false);
    }
    Ok(config)
}

/// Run one game, reading human moves from `input`.
///
/// Returns the final outcome, or [`Outcome::Ongoing`] if `input` ends before
/// the game does.
pub fn run<R: BufRead, W: Write>(
    config: &PlayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let mut game = Game::new();
    let mut board = game.current()?;

    writeln!(
        output,
        "You play {}. Enter moves as 'row col', e.g. '1 1' for the center.",
        config.human
    )?;

    while !board.is_terminal() {
        writeln!(output, "\n{}", board.render())?;
        let player = board.current_player();

        if player == config.human {
            let Some(next) = human_turn(&mut game, &board, input, output)? else {
                writeln!(output, "\nInput closed, leaving the game.")?;
                return Ok(Outcome::Ongoing);
            };
            board = next;
        } else {
            let analysis = engine_turn(&board, config)?;
            writeln!(output, "Computer ({player}) plays {}", analysis.action)?;
            if config.show_analysis {
                writeln!(
                    output,
                    "  {} ({} positions searched); optimal: {}",
                    describe_value(analysis.value),
                    analysis.nodes,
                    format_actions(&analysis.optimal_actions)
                )?;
            }
            board = game.play(analysis.action)?;
        }
    }

    let outcome = board.outcome();
    writeln!(output, "\n{}", board.render())?;
    writeln!(output, "{}", describe_outcome(outcome))?;
    Ok(outcome)
}

/// Prompt until the human enters a legal move; `None` on end of input
fn human_turn<R: BufRead, W: Write>(
    game: &mut Game,
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Board>> {
    loop {
        write!(output, "Your move ({}): ", board.current_player())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading move")? == 0 {
            return Ok(None);
        }

        let action = match Action::parse(line.trim()) {
            Ok(action) => action,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match game.play(action) {
            Ok(next) => return Ok(Some(next)),
            Err(err @ crate::Error::InvalidAction { .. }) => {
                debug!(%action, "rejected human move");
                writeln!(output, "{err}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn engine_turn(board: &Board, config: &PlayConfig) -> Result<Analysis> {
    let spinner = if config.spinner {
        let pb = create_spinner("Thinking...")?;
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let analysis = analyze(board);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    analysis.ok_or_else(|| anyhow!("engine asked to move on a finished board"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::tictactoe::Player;

    fn quiet(human: Player) -> PlayConfig {
        PlayConfig::default().with_human(human).with_spinner(false)
    }

    #[test]
    fn test_engine_wins_when_human_blunders() {
        // Human as O always takes the first free cell and never blocks
        let mut input = Cursor::new("0 1\n0 2\n1 2\n");
        let mut output = Vec::new();

        let outcome = run(&quiet(Player::O), &mut input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Win(Player::X));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Computer (X) plays (0, 0)"));
        assert!(text.contains("Computer (X) plays (2, 0)"));
        assert!(text.ends_with("X wins\n"));
    }

    #[test]
    fn test_invalid_input_is_reprompted() {
        let mut input = Cursor::new("banana\n3 3\n");
        let mut output = Vec::new();

        let outcome = run(&quiet(Player::X), &mut input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Ongoing);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Your move (X): ").count(), 3);
        assert!(text.contains("invalid action 'banana'"));
        assert!(text.contains("Input closed"));
    }

    #[test]
    fn test_occupied_cell_is_reprompted() {
        // X takes the center, the engine answers in the corner, X retries it
        let mut input = Cursor::new("1 1\n0 0\n");
        let mut output = Vec::new();

        run(&quiet(Player::X), &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Computer (O) plays (0, 0)"));
        assert!(text.contains("cell is already occupied"));
    }

    #[test]
    fn test_resolve_config_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "human": "O", "spinner": true }}"#).unwrap();

        let args = PlayArgs {
            human: Some("x".to_string()),
            config: Some(file.path().to_path_buf()),
            analysis: true,
            no_spinner: true,
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.human, Player::X);
        assert!(config.show_analysis);
        assert!(!config.spinner);
    }
}
