//! Full-depth minimax over the Tic-Tac-Toe game tree.
//!
//! X maximises [`Board::utility`], O minimises it. Every call walks the
//! complete subtree below the given board; there is no pruning and no
//! memoisation, and the search is a pure function of the board.

use serde::Serialize;
use tracing::debug;

use crate::tictactoe::{Action, Board, Player};

/// Result of searching one non-terminal position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Player to move
    pub player: Player,
    /// First optimal action in enumeration order
    pub action: Action,
    /// Guaranteed value of the position under optimal play
    pub value: i32,
    /// Every action that achieves `value`, in enumeration order
    pub optimal_actions: Vec<Action>,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Optimal action for the side to move, `None` once the game is over.
///
/// Ties go to the first action in row-major order: all tied actions have the
/// same game value, so the choice only depends on enumeration order.
pub fn best_move(board: &Board) -> Option<Action> {
    analyze(board).map(|analysis| analysis.action)
}

/// Minimax value of any board; the utility itself when terminal
pub fn value(board: &Board) -> i32 {
    let mut nodes = 0;
    minimax_value(board, &mut nodes)
}

/// Search every root action and report the optimal ones
pub fn analyze(board: &Board) -> Option<Analysis> {
    if board.is_terminal() {
        return None;
    }

    let player = board.current_player();
    let mut nodes = 1;
    let mut best_value = None;
    let mut optimal_actions = Vec::new();

    for (action, child) in board.successors() {
        let child_value = minimax_value(&child, &mut nodes);
        match best_value {
            Some(current) if child_value == current => optimal_actions.push(action),
            Some(current) if !improves(player, child_value, current) => {}
            _ => {
                best_value = Some(child_value);
                optimal_actions = vec![action];
            }
        }
    }

    let value = best_value?;
    let action = *optimal_actions.first()?;

    debug!(
        player = %player,
        action = %action,
        value,
        optimal = optimal_actions.len(),
        nodes,
        "minimax search complete"
    );

    Some(Analysis {
        player,
        action,
        value,
        optimal_actions,
        nodes,
    })
}

/// Line of play when both sides follow [`best_move`] until the game ends.
///
/// Each entry is the action taken and the board it produced.
pub fn principal_variation(board: &Board) -> Vec<(Action, Board)> {
    let mut line = Vec::new();
    let mut current = *board;
    while let Some(action) = best_move(&current) {
        // best_move picks from the successors, so the lookup always hits
        let Some(step) = current.successors().find(|&(candidate, _)| candidate == action) else {
            break;
        };
        current = step.1;
        line.push(step);
    }
    line
}

/// Strictly better for `player` than the current best
fn improves(player: Player, candidate: i32, best: i32) -> bool {
    match player {
        Player::X => candidate > best,
        Player::O => candidate < best,
    }
}

fn minimax_value(board: &Board, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if board.is_terminal() {
        return board.utility();
    }

    let children = board
        .successors()
        .map(|(_, child)| minimax_value(&child, nodes));

    let best = match board.current_player() {
        Player::X => children.max(),
        Player::O => children.min(),
    };
    // Non-terminal boards always have a successor.
    best.unwrap_or_else(|| board.utility())
}
