//! Three-in-a-row detection

use super::{Cell, Player};

/// Winning line indices on the row-major 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for checking winning lines on a board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_lines(cells, player).next().is_some()
    }

    /// All lines fully occupied by the player
    pub fn completed_lines(
        cells: &[Cell; 9],
        player: Player,
    ) -> impl Iterator<Item = &'static [usize; 3]> + '_ {
        let target = player.to_cell();
        let lines: &'static [[usize; 3]; 8] = &WINNING_LINES;
        lines
            .iter()
            .filter(move |line| line.iter().all(|&idx| cells[idx] == target))
    }
}
