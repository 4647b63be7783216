//! Tic-Tac-Toe rules

pub mod board;
pub mod engine;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Action, Board, Cell, Player};
pub use engine::{Outcome, initial_state};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
