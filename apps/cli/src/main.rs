//! flashcards — interactive flashcard study tool.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flashcards_cli::import::TriviaImporter;
use flashcards_cli::session::Session;

#[derive(Parser)]
#[command(name = "flashcards", version, about = "Interactive flashcard study tool")]
struct Cli {
    /// Storage file for the card collection
    #[arg(long, default_value = "flashcards.csv")]
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut session = Session::new(cli.file, TriviaImporter::new());
    session.run(&mut input, &mut out)?;

    Ok(())
}
