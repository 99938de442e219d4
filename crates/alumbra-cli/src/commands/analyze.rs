use std::path::PathBuf;

use alumbra_core::analysis::gemini::GeminiBackend;
use alumbra_core::analysis::{self, MIN_CONVERSATION_CHARS};
use alumbra_core::config::{self, Config, alumbra_dir};
use alumbra_core::models::RiskBand;
use anyhow::Result;
use colored::Colorize;

pub fn run(
    file: Option<PathBuf>,
    text: Option<String>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let conversation = super::read_transcript(file, text)?;

    // Reject too-short input up front, before touching config or the network.
    if conversation.trim().chars().count() < MIN_CONVERSATION_CHARS {
        anyhow::bail!("El texto de la conversación es demasiado corto para el análisis.");
    }

    let config_path = alumbra_dir().join("config.toml");
    let config = Config::load(&config_path)?;
    let api_key = config::api_key_from_env()?;
    let backend = GeminiBackend::new(&config.ai, &api_key)?;

    if verbose {
        eprintln!("[verbose] model: {}", config.ai.model);
        eprintln!("[verbose] timeout: {}s", config.ai.timeout_secs);
        eprintln!(
            "[verbose] transcript: {} chars",
            conversation.chars().count()
        );
    }

    if !json {
        println!("{}", "Analyzing conversation...".cyan());
        println!("  {}", "This may take a moment (AI-powered analysis)...".dimmed());
    }

    let outcome = match analysis::analyze(&backend, &conversation) {
        Ok(outcome) => outcome,
        Err(e) => {
            if verbose {
                eprintln!("[verbose] {e}");
            }
            anyhow::bail!("{}", e.user_message());
        }
    };

    if verbose {
        eprintln!(
            "[verbose] tokens: {} in / {} out",
            outcome.input_tokens, outcome.output_tokens
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.analysis)?);
        return Ok(());
    }

    let result = &outcome.analysis;
    let score = result.risk_assessment.risk_score;
    let Some(band) = RiskBand::from_score(score) else {
        anyhow::bail!("invalid risk score {score} in validated result");
    };
    let score_display = format!("{score}/10 ({band})");
    let colored_score = match band {
        RiskBand::Low => score_display.green(),
        RiskBand::Medium => score_display.yellow(),
        RiskBand::High => score_display.red(),
        RiskBand::VeryHigh => score_display.red().bold(),
    };

    println!();
    println!("{}", "Análisis completado".green().bold());
    println!("  {} {}", "Puntuación de riesgo:".white(), colored_score);
    println!();
    println!("{}", "Resumen".white().bold());
    println!("  {}", result.risk_assessment.risk_summary);

    if !result.detected_categories.is_empty() {
        println!();
        println!("{}", "Categorías detectadas".white().bold());
        for category in &result.detected_categories {
            println!("  {} {}", "-".dimmed(), category.yellow());
        }
    }

    if !result.relevant_examples.is_empty() {
        println!();
        println!("{}", "Ejemplos relevantes".white().bold());
        for example in &result.relevant_examples {
            println!("  {} \u{201c}{}\u{201d}", "-".dimmed(), example);
        }
    }

    println!();
    println!("{}", "Recomendaciones".white().bold());
    for line in result.recommendations.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {} {}", "-".dimmed(), line.trim());
    }

    Ok(())
}
