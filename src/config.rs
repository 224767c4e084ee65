use std::fmt;
use std::str::FromStr;

use crate::complementarity::MIN_LOOP_LENGTH;
use crate::error::RnaFoldError;

/// Order in which the score matrix is filled.
///
/// Both strategies yield the same score for every window they compute, so the
/// traceback is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStrategy {
    /// Iterate windows by increasing length. Every non-trivial entry is filled.
    #[default]
    BottomUp,
    /// Start from the whole-sequence window and compute only the windows it
    /// depends on. Entries never reached stay unset.
    Memoized,
}

impl FromStr for FillStrategy {
    type Err = RnaFoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-up" | "bottomup" => Ok(FillStrategy::BottomUp),
            "memoized" | "memo" => Ok(FillStrategy::Memoized),
            _ => Err(RnaFoldError::InvalidStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStrategy::BottomUp => write!(f, "bottom-up"),
            FillStrategy::Memoized => write!(f, "memoized"),
        }
    }
}

/// Folding parameters.
///
/// ```rust
/// use rnafold::config::{FillStrategy, FoldConfig};
///
/// let config = FoldConfig {
///     strategy: FillStrategy::Memoized,
///     ..Default::default()
/// };
/// assert_eq!(config.min_loop_length, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Minimum number of positions between two paired bases.
    pub min_loop_length: usize,
    pub strategy: FillStrategy,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            min_loop_length: MIN_LOOP_LENGTH,
            strategy: FillStrategy::default(),
        }
    }
}

/// What the command-line tool prints besides the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    pub print_matrix: bool,
    pub show_score: bool,
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FoldConfig::default();
        assert_eq!(config.min_loop_length, 4);
        assert_eq!(config.strategy, FillStrategy::BottomUp);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("memo".parse::<FillStrategy>().unwrap(), FillStrategy::Memoized);
        assert_eq!("bottom-up".parse::<FillStrategy>().unwrap(), FillStrategy::BottomUp);
        assert!(matches!(
            "greedy".parse::<FillStrategy>(),
            Err(RnaFoldError::InvalidStrategy(_))
        ));
        assert_eq!(FillStrategy::Memoized.to_string(), "memoized");
    }
}
