use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// How the morph executable is attached when it runs.
///
/// - `Pty`: stdin/stdout/stderr are a pseudo-terminal, so the child sees an
///   interactive terminal (default on unix, matches the original scripts).
/// - `Pipe`: plain pipes; stdout is captured, stderr is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RunnerKind {
    Pty,
    Pipe,
}

impl Default for RunnerKind {
    fn default() -> Self {
        if cfg!(unix) {
            RunnerKind::Pty
        } else {
            RunnerKind::Pipe
        }
    }
}

impl fmt::Display for RunnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerKind::Pty => f.write_str("pty"),
            RunnerKind::Pipe => f.write_str("pipe"),
        }
    }
}

/// What to do when the morph executable exits with a non-zero status.
///
/// A missing executable always aborts regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitStatusPolicy {
    /// Write whatever was captured and carry on without reporting.
    #[default]
    Ignore,
    /// Write whatever was captured, log a warning, list it in the summary.
    Warn,
    /// Abort the run before writing the failed block.
    Fail,
}

/// Whether chunk arguments are wrapped in single quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    /// Quote when the pass groups more than one word per chunk.
    #[default]
    Auto,
    Always,
    Never,
}

impl QuoteMode {
    pub fn should_quote(self, group_size: usize) -> bool {
        match self {
            QuoteMode::Auto => group_size > 1,
            QuoteMode::Always => true,
            QuoteMode::Never => false,
        }
    }
}

/// Where the blank-line separator goes relative to each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparatorMode {
    /// After every pass, including the last one.
    #[default]
    AfterEach,
    /// Only between two passes.
    Between,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_quoting_depends_on_group_size() {
        assert!(!QuoteMode::Auto.should_quote(1));
        assert!(QuoteMode::Auto.should_quote(2));
        assert!(QuoteMode::Always.should_quote(1));
        assert!(!QuoteMode::Never.should_quote(4));
    }

    #[test]
    fn defaults_match_the_original_behaviour() {
        assert_eq!(ExitStatusPolicy::default(), ExitStatusPolicy::Ignore);
        assert_eq!(QuoteMode::default(), QuoteMode::Auto);
        assert_eq!(SeparatorMode::default(), SeparatorMode::AfterEach);
    }

    #[test]
    fn runner_kind_displays_config_spelling() {
        assert_eq!(RunnerKind::Pty.to_string(), "pty");
        assert_eq!(RunnerKind::Pipe.to_string(), "pipe");
    }
}
