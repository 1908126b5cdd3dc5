//! Match strategies for combining posting sets.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::JavelinError;

/// The boolean combination rule applied across the posting sets of a
/// query's terms.
///
/// The interactive boundary parses the exact tokens `ALL`, `ANY` and
/// `NONE` (case-sensitive) via [`FromStr`]; anything else is rejected
/// with a query error rather than silently matching nothing.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStrategy {
    /// A line matches only if it contains every query term.
    All,
    /// A line matches if it contains at least one query term.
    Any,
    /// A line matches if it contains none of the query terms.
    None,
}

impl MatchStrategy {
    /// The exact strategy token as used at the interactive boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::All => "ALL",
            MatchStrategy::Any => "ANY",
            MatchStrategy::None => "NONE",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = JavelinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(MatchStrategy::All),
            "ANY" => Ok(MatchStrategy::Any),
            "NONE" => Ok(MatchStrategy::None),
            _ => Err(JavelinError::query(format!(
                "unknown match strategy: {s} (expected ALL, ANY or NONE)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy_tokens() {
        assert_eq!("ALL".parse::<MatchStrategy>().unwrap(), MatchStrategy::All);
        assert_eq!("ANY".parse::<MatchStrategy>().unwrap(), MatchStrategy::Any);
        assert_eq!(
            "NONE".parse::<MatchStrategy>().unwrap(),
            MatchStrategy::None
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("all".parse::<MatchStrategy>().is_err());
        assert!("Any".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_unknown_strategy_is_an_error() {
        let err = "SOME".parse::<MatchStrategy>().unwrap_err();
        assert!(err.to_string().contains("unknown match strategy"));
    }

    #[test]
    fn test_display_round_trips() {
        for strategy in [MatchStrategy::All, MatchStrategy::Any, MatchStrategy::None] {
            let parsed: MatchStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }
}
