pub mod analyze;
pub mod init;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Read the transcript from an inline flag, a file, or stdin, in that order
/// of preference.
pub fn read_transcript(file: Option<PathBuf>, text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("reading transcript from {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading transcript from stdin")?;
    Ok(buf)
}
