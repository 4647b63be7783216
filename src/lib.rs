//! Optimal Tic-Tac-Toe by exhaustive minimax
//!
//! This crate provides:
//! - A stateless Tic-Tac-Toe engine: turn derivation, legal actions,
//!   copy-on-apply transitions and terminal detection
//! - Full-depth minimax search selecting an optimal move
//! - A command-line shell for playing against the engine

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Analysis, analyze, best_move};
pub use tictactoe::{Action, Board, Cell, Outcome, Player, initial_state};
