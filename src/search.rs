//! Exhaustive game-tree search

pub mod minimax;

pub use minimax::{Analysis, analyze, best_move, principal_variation, value};
