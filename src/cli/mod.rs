//! Command-line shell around the engine
//!
//! The shell owns everything the engine leaves out: rendering, reading
//! human moves, and looping until the game is over.

pub mod commands;
pub mod config;
pub mod output;
