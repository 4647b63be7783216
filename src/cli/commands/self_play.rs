//! Self-play command - the engine plays both sides

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    cli::output::{describe_outcome, write_section},
    search::principal_variation,
    tictactoe::{Board, Outcome, initial_state},
};

#[derive(Parser, Debug)]
#[command(about = "Let the engine play itself from a position")]
pub struct SelfPlayArgs {
    /// Starting board (defaults to the empty board)
    #[arg(long)]
    pub board: Option<String>,

    /// Only print the final position and result
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())?;
    Ok(())
}

/// Play out the position in `args`, writing each ply to `out`
pub fn run<W: Write>(args: &SelfPlayArgs, out: &mut W) -> Result<Outcome> {
    let start = match &args.board {
        Some(s) => {
            let board = Board::from_string(s)?;
            board.check_reachable()?;
            board
        }
        None => initial_state(),
    };

    write_section(out, "Self-play")?;
    if !args.quiet {
        writeln!(out, "{}", start.render())?;
    }

    let line = principal_variation(&start);
    let mut previous = start;
    for (ply, (action, board)) in line.iter().enumerate() {
        if !args.quiet {
            writeln!(out, "{}. {} plays {action}", ply + 1, previous.current_player())?;
            writeln!(out, "{}", board.render())?;
        }
        previous = *board;
    }

    let last = previous;
    if args.quiet {
        writeln!(out, "{}", last.render())?;
    }
    let outcome = last.outcome();
    info!(plies = line.len(), outcome = ?outcome, "self-play finished");
    writeln!(out, "Result: {}", describe_outcome(outcome))?;
    Ok(outcome)
}
