//! oxo CLI - optimal Tic-Tac-Toe
//!
//! - Play against the minimax engine
//! - Ask for the optimal move in any position
//! - Watch the engine play itself

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Optimal Tic-Tac-Toe by exhaustive minimax", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Show the optimal move for a position
    Best(oxo::cli::commands::best::BestArgs),

    /// Let the engine play both sides
    SelfPlay(oxo::cli::commands::self_play::SelfPlayArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Best(args) => oxo::cli::commands::best::execute(args),
        Commands::SelfPlay(args) => oxo::cli::commands::self_play::execute(args),
    }
}
