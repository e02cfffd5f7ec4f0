//! quizclock CLI - the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "quizclock", version, about = "Timed command-line quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz against the clock
    Play {
        /// CSV file with question,answer rows
        #[arg(short = 'f', long)]
        filename: Option<PathBuf>,

        /// Time limit for the whole quiz in seconds
        #[arg(short = 'l', long)]
        limit: Option<u64>,

        /// Print the final report as JSON after the quiz
        #[arg(long)]
        json: bool,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question file without playing it
    Validate {
        /// CSV file with question,answer rows
        #[arg(short = 'f', long)]
        filename: Option<PathBuf>,

        /// Print every question in a table
        #[arg(long)]
        list: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and question file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizclock=warn".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            filename,
            limit,
            json,
            no_color,
            config,
        } => commands::play::execute(filename, limit, json, no_color, config).await,
        Commands::Validate {
            filename,
            list,
            config,
        } => commands::validate::execute(filename, list, config),
        Commands::Init => commands::init::execute(),
    };

    let code = match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    // An abandoned stdin read can't be cancelled; don't wait for it on runtime shutdown
    process::exit(code);
}
