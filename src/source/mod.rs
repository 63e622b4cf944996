//! Puzzle sources
//!
//! The renderer never generates puzzles itself. A [`PuzzleSource`] hands it a
//! batch of validated puzzle strings, either from an external generator
//! process or from a file prepared earlier.

pub mod file;
pub mod qqwing;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::puzzle::{Puzzle, PuzzleError};

pub use file::FileSource;
pub use qqwing::QqwingSource;

/// Requested puzzle difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(try_from = "String")]
pub enum Difficulty {
    Simple,
    Easy,
    Intermediate,
    Expert,
    #[default]
    Any,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
            Difficulty::Any => "any",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Difficulty::Simple),
            "easy" => Ok(Difficulty::Easy),
            "intermediate" => Ok(Difficulty::Intermediate),
            "expert" => Ok(Difficulty::Expert),
            "any" => Ok(Difficulty::Any),
            _ => Err(SourceError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = SourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Errors raised while obtaining puzzles
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid difficulty '{0}' (expected one of simple, easy, intermediate, expert, any)")]
    InvalidDifficulty(String),

    /// The generator program could not be started
    #[error("puzzle generator '{program}' is unavailable: {source}")]
    GeneratorUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator ran but reported failure
    #[error("puzzle generator '{program}' failed ({status}): {stderr}")]
    GeneratorExecution {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("requested {requested} puzzles but only {produced} were produced")]
    ShortOutput { requested: usize, produced: usize },

    #[error("malformed puzzle on line {line}: {source}")]
    Puzzle {
        line: usize,
        #[source]
        source: PuzzleError,
    },

    #[error("failed to read puzzles from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Capability that produces puzzle strings
pub trait PuzzleSource {
    /// Produce exactly `count` puzzles of the requested difficulty
    fn generate(&mut self, count: usize, difficulty: Difficulty) -> Result<Vec<Puzzle>, SourceError>;
}

/// Parse one puzzle per non-empty line, keeping the first `count`.
///
/// Lines starting with `#` are comments. A malformed line is fatal; fewer
/// than `count` puzzles is [`SourceError::ShortOutput`].
pub fn parse_puzzle_lines(text: &str, count: usize) -> Result<Vec<Puzzle>, SourceError> {
    let mut puzzles = Vec::with_capacity(count);
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let puzzle = Puzzle::parse(line).map_err(|source| SourceError::Puzzle {
            line: index + 1,
            source,
        })?;
        puzzles.push(puzzle);
    }

    if puzzles.len() < count {
        return Err(SourceError::ShortOutput {
            requested: count,
            produced: puzzles.len(),
        });
    }
    if puzzles.len() > count {
        warn!(
            requested = count,
            produced = puzzles.len(),
            "discarding surplus puzzles"
        );
        puzzles.truncate(count);
    }
    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: &str =
        "4...3.......6..8..........1....5..9..8....6...7.2........1.27..5.3....4.9........";
    const P2: &str =
        "52...6.........7.13...........4..8..6......5...........418.........3..2...87.....";

    #[test]
    fn test_difficulty_case_insensitive() {
        assert_eq!("EXPERT".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!("Simple".parse::<Difficulty>().unwrap(), Difficulty::Simple);
        assert!(matches!(
            "hard".parse::<Difficulty>(),
            Err(SourceError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn test_difficulty_display_round_trip() {
        for d in [
            Difficulty::Simple,
            Difficulty::Easy,
            Difficulty::Intermediate,
            Difficulty::Expert,
            Difficulty::Any,
        ] {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }

    #[test]
    fn test_parse_lines_skips_blank_and_comments() {
        let text = format!("# batch\n{}\n\n  {}  \n", P1, P2);
        let puzzles = parse_puzzle_lines(&text, 2).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[1].as_str(), P2);
    }

    #[test]
    fn test_parse_lines_short() {
        let err = parse_puzzle_lines(P1, 2).unwrap_err();
        assert!(matches!(
            err,
            SourceError::ShortOutput {
                requested: 2,
                produced: 1
            }
        ));
    }

    #[test]
    fn test_parse_lines_truncates_surplus() {
        let text = format!("{}\n{}\n", P1, P2);
        let puzzles = parse_puzzle_lines(&text, 1).unwrap();
        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].as_str(), P1);
    }

    #[test]
    fn test_parse_lines_malformed_is_fatal() {
        let text = format!("{}\nnot a puzzle\n", P1);
        let err = parse_puzzle_lines(&text, 2).unwrap_err();
        assert!(matches!(err, SourceError::Puzzle { line: 2, .. }));
    }
}
