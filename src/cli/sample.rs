//! Synthesize rank arguments for interactive testing

use super::CliError;
use crate::sampler::{Difficulty, sample_ranks};

/// Generate `count` random rank values for a named difficulty preset,
/// space-separated for easy reuse as `--arg` values.
pub fn execute_sample(difficulty: &str, count: usize) -> Result<String, CliError> {
    let preset = Difficulty::parse(difficulty)
        .ok_or_else(|| CliError::UnknownDifficulty(difficulty.to_string()))?;

    let rendered: Vec<String> = sample_ranks(preset, count)
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok(rendered.join(" "))
}
