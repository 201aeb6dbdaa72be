mod commands;

use clap::{Parser, Subcommand};
use commands::analyse::{analyse, AnalyseCommand};
use commands::play::{play, PlayCommand};
use commands::uci::{uci, UciCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Fixed-depth alpha-beta chess engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Searches a single position and prints the score and best move
    Analyse(AnalyseCommand),
    /// Plays a game against the engine in the terminal
    Play(PlayCommand),
    /// Speaks UCI on stdin/stdout
    Uci(UciCommand),
}

fn main() -> anyhow::Result<()> {
    // logs go to stderr, stdout is reserved for the protocol / the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.command {
        Commands::Analyse(cmd) => analyse(cmd),
        Commands::Play(cmd) => play(cmd),
        Commands::Uci(cmd) => uci(cmd),
    }
}
