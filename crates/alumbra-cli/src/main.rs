mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alumbra", about = "AI risk analysis of conversations for emotional abuse")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize alumbra: create ~/.alumbra/ and the default config
    Init,
    /// Analyze a conversation transcript (from a file, --text, or stdin)
    Analyze {
        /// File containing the transcript; omit to read from stdin
        file: Option<PathBuf>,
        /// Transcript passed inline instead of a file
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Print the raw analysis result as JSON
        #[arg(long)]
        json: bool,
        /// Print internal error detail and token usage to stderr
        #[arg(long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Analyze {
            file,
            text,
            json,
            verbose,
        } => commands::analyze::run(file, text, json, verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
