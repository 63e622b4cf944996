//! External generator process (qqwing or a compatible program)

use std::process::Command;

use tracing::{debug, info};

use super::{parse_puzzle_lines, Difficulty, PuzzleSource, SourceError};
use crate::puzzle::Puzzle;

/// Default generator program name
pub const DEFAULT_PROGRAM: &str = "qqwing";

/// Runs `<program> [base args] --generate <n> --one-line --difficulty <d>`
/// and reads one puzzle per output line.
#[derive(Debug, Clone)]
pub struct QqwingSource {
    program: String,
    base_args: Vec<String>,
}

impl Default for QqwingSource {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl QqwingSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            base_args: Vec::new(),
        }
    }

    /// Arguments placed before the generator flags
    pub fn with_base_args(mut self, args: Vec<String>) -> Self {
        self.base_args = args;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, count: usize, difficulty: Difficulty) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args)
            .arg("--generate")
            .arg(count.to_string())
            .arg("--one-line")
            .arg("--difficulty")
            .arg(difficulty.as_str());
        cmd
    }
}

impl PuzzleSource for QqwingSource {
    fn generate(&mut self, count: usize, difficulty: Difficulty) -> Result<Vec<Puzzle>, SourceError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut cmd = self.command(count, difficulty);
        debug!(command = ?cmd, "running puzzle generator");

        let output = cmd
            .output()
            .map_err(|source| SourceError::GeneratorUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::GeneratorExecution {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let puzzles = parse_puzzle_lines(&stdout, count)?;
        info!(count = puzzles.len(), %difficulty, program = %self.program, "generated puzzles");
        Ok(puzzles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: &str =
        "4...3.......6..8..........1....5..9..8....6...7.2........1.27..5.3....4.9........";

    #[test]
    fn test_command_line() {
        let source = QqwingSource::default();
        let cmd = source.command(6, Difficulty::Expert);
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(cmd.get_program(), "qqwing");
        assert_eq!(
            args,
            vec!["--generate", "6", "--one-line", "--difficulty", "expert"]
        );
    }

    #[test]
    fn test_zero_count_skips_process() {
        let mut source = QqwingSource::new("definitely-not-a-sudoku-generator");
        assert!(source.generate(0, Difficulty::Any).unwrap().is_empty());
    }

    #[test]
    fn test_missing_program_unavailable() {
        let mut source = QqwingSource::new("definitely-not-a-sudoku-generator");
        let err = source.generate(1, Difficulty::Any).unwrap_err();
        assert!(matches!(err, SourceError::GeneratorUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_reports_execution_error() {
        let mut source = QqwingSource::new("sh")
            .with_base_args(vec!["-c".into(), "echo broken >&2; exit 3".into(), "qqwing".into()]);
        let err = source.generate(1, Difficulty::Easy).unwrap_err();
        match err {
            SourceError::GeneratorExecution { stderr, .. } => assert_eq!(stderr, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_reads_one_puzzle_per_line() {
        let script = format!("printf '%s\\n' {P1} {P1}");
        let mut source =
            QqwingSource::new("sh").with_base_args(vec!["-c".into(), script, "qqwing".into()]);
        let puzzles = source.generate(2, Difficulty::Any).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].as_str(), P1);
    }

    #[cfg(unix)]
    #[test]
    fn test_short_output_is_fatal() {
        let script = format!("echo {P1}");
        let mut source =
            QqwingSource::new("sh").with_base_args(vec!["-c".into(), script, "qqwing".into()]);
        assert!(matches!(
            source.generate(3, Difficulty::Any),
            Err(SourceError::ShortOutput {
                requested: 3,
                produced: 1
            })
        ));
    }
}
