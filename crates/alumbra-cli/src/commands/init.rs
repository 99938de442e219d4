use alumbra_core::config::{Config, alumbra_dir};
use anyhow::{Context, Result};
use colored::Colorize;

pub fn run() -> Result<()> {
    let dir = alumbra_dir();

    std::fs::create_dir_all(&dir).context("creating ~/.alumbra/")?;

    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} {}", "Created".green(), config_path.display());
    } else {
        println!("  {} {}", "Exists".yellow(), config_path.display());
    }

    if std::env::var("GEMINI_API_KEY").is_err() {
        println!(
            "  {} GEMINI_API_KEY is not set; export it before running analyses",
            "Note".dimmed()
        );
    }

    println!();
    println!("{}", "alumbra initialized successfully".green().bold());
    println!(
        "  Run {} to analyze a transcript",
        "alumbra analyze <file>".cyan()
    );

    Ok(())
}
