// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::Preset;
use crate::types::RunnerKind;

/// Command-line arguments for `morphpoem`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "morphpoem",
    version,
    about = "Build a poem by morphing consecutive chunks of a phrase with an external program.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Morph.toml` in the current working directory.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub config: Option<String>,

    /// Use a built-in configuration instead of a config file.
    #[arg(long, value_enum, value_name = "NAME")]
    pub preset: Option<Preset>,

    /// Write the poem here instead of `[output].path`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Override `[run].runner`.
    #[arg(long, value_enum, value_name = "KIND")]
    pub runner: Option<RunnerKind>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MORPHPOEM_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print every command that would run, but don't spawn anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_and_overrides_parse() {
        let args = CliArgs::try_parse_from([
            "morphpoem",
            "--preset",
            "poem-es-end",
            "--runner",
            "pipe",
            "--output",
            "out.txt",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(args.preset, Some(Preset::PoemEsEnd));
        assert_eq!(args.runner, Some(RunnerKind::Pipe));
        assert_eq!(args.output.as_deref(), Some("out.txt"));
        assert!(args.dry_run);
        assert!(args.config.is_none());
    }

    #[test]
    fn config_conflicts_with_preset() {
        let res = CliArgs::try_parse_from([
            "morphpoem",
            "--config",
            "Morph.toml",
            "--preset",
            "poem-two",
        ]);
        assert!(res.is_err());
    }
}
