//! Common test utilities for the oxo test suite.
//!
//! Enumerates the positions that legal play can reach from the empty board.

#![allow(dead_code)]

use std::collections::HashSet;

use oxo::{Board, initial_state};

/// Every board reachable from the empty board, terminal ones included.
///
/// Play stops at terminal boards, so won positions never get extra marks.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.is_terminal() {
            continue;
        }
        for action in board.legal_actions() {
            stack.push(board.apply(action).expect("legal action must apply"));
        }
    }

    seen
}

/// Reachable boards where the game is still running
pub fn ongoing_boards() -> Vec<Board> {
    let mut boards: Vec<_> = reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal())
        .collect();
    boards.sort_by_key(|board| board.to_string());
    boards
}
