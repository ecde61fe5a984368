use rand::Rng;

/// Difficulty presets for synthesized rank arguments.
///
/// Each preset fixes a `(step, offset)` pair; sampled ranks land on
/// `offset + bucket * step`. Higher difficulties push the rank floor
/// upward, which in the similar-artist pipelines means drawing from
/// deeper, more obscure parts of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Buckets per preset; ranks span `offset .. offset + BUCKETS * step`.
const BUCKETS: i64 = 4;

impl Difficulty {
    /// Parse a preset name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Difficulty> {
        match raw.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// The preset's fixed `(step, offset)` pair.
    pub fn step_offset(&self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (10, 0),
            Difficulty::Medium => (10, 30),
            Difficulty::Hard => (10, 60),
        }
    }
}

/// Produce `count` pseudo-random integer rank values bucketed by the
/// preset. Only used to synthesize plausible arguments for interactive
/// testing; not part of the transformer's contract.
pub fn sample_ranks(difficulty: Difficulty, count: usize) -> Vec<i64> {
    let (step, offset) = difficulty.step_offset();
    let mut rng = rand::rng();

    (0..count)
        .map(|_| offset + rng.random_range(0..BUCKETS) * step)
        .collect()
}
