//! Best command - minimax analysis of a single position

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::output::{
        describe_outcome, describe_value, format_actions, format_number, write_kv, write_section,
    },
    search::{Analysis, analyze},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct BestArgs {
    /// Board as nine cells in row-major order, e.g. "XX.|OO.|..." (`.` is empty)
    pub board: String,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct BestMoveReport<'a> {
    board: String,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

pub fn execute(args: BestArgs) -> Result<()> {
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

/// Analyse the position in `args` and write the report to `out`
pub fn run<W: Write>(args: &BestArgs, out: &mut W) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    board.check_reachable()?;

    let Some(analysis) = analyze(&board) else {
        writeln!(out, "{board}")?;
        writeln!(out, "Game is already over: {}", describe_outcome(board.outcome()))?;
        return Ok(());
    };
    info!(nodes = analysis.nodes, "position analysed");

    if args.json {
        let report = BestMoveReport {
            board: board.cells.iter().map(|c| c.to_char()).collect(),
            analysis: &analysis,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    write_section(out, "Minimax analysis")?;
    writeln!(out, "{}", board.render())?;
    write_kv(out, "To move", &analysis.player.to_string())?;
    write_kv(out, "Best move", &analysis.action.to_string())?;
    write_kv(
        out,
        "Value",
        &format!("{:+} ({})", analysis.value, describe_value(analysis.value)),
    )?;
    write_kv(out, "Optimal moves", &format_actions(&analysis.optimal_actions))?;
    write_kv(out, "Positions searched", &format_number(analysis.nodes))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(board: &str, json: bool) -> Result<String> {
        let args = BestArgs {
            board: board.to_string(),
            json,
        };
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_unreachable_board_is_rejected() {
        let err = best("XX.......", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::UnreachableBoard { .. })
        ));
    }

    #[test]
    fn test_malformed_board_is_rejected() {
        let err = best("XX.OO....XOZ", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::InvalidBoardLength { .. })
        ));
    }

    #[test]
    fn test_finished_board_is_reported() {
        let text = best("XXX|OO.|...", false).unwrap();
        assert!(text.contains("Game is already over: X wins"));
    }

    #[test]
    fn test_text_report() {
        let text = best("XX.|OO.|...", false).unwrap();
        assert!(text.contains("Minimax analysis"));
        assert!(text.contains("Best move:         (0, 2)"));
        assert!(text.contains("+1 (X wins with best play)"));
    }

    #[test]
    fn test_json_report() {
        let text = best("XX.|OO.|...", true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["board"], "XX.OO....");
        assert_eq!(json["player"], "X");
        assert_eq!(json["action"]["row"], 0);
        assert_eq!(json["action"]["col"], 2);
        assert_eq!(json["value"], 1);
        assert_eq!(json["optimal_actions"][0]["col"], 2);
        assert!(json["nodes"].as_u64().unwrap() > 1);
    }
}
