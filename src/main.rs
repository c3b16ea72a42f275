//! Console blackjack: you against a dealer who stands on 17.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use twentyone::{Session, SessionOptions};

#[derive(Debug, Parser)]
#[command(name = "twentyone", version, about)]
struct Cli {
    /// Seed the shuffle for a reproducible sequence of deals.
    #[arg(long)]
    seed: Option<u64>,
    /// Colour card suits with ANSI escapes.
    #[arg(long)]
    color: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let options = SessionOptions::default()
        .with_seed(cli.seed)
        .with_color(cli.color);
    let mut session = Session::new(options.rng(), io::stdin().lock(), io::stdout().lock(), options);

    match session.run() {
        Ok(summary) => {
            tracing::info!(
                rounds = summary.rounds,
                player_wins = summary.player_wins,
                dealer_wins = summary.dealer_wins,
                void_rounds = summary.void_rounds,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            eprintln!("twentyone: {err}");
            ExitCode::FAILURE
        }
    }
}
