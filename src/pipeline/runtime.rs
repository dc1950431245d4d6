// src/pipeline/runtime.rs

use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::ConfigFile;
use crate::errors::{MorphError, Result};
use crate::exec::builder::MorphCommand;
use crate::exec::runner::{CapturedOutput, ProcessRunner};
use crate::exec::shell::COMMAND_NOT_FOUND;
use crate::output::OutputWriter;
use crate::pipeline::plan::pass_commands;
use crate::types::{ExitStatusPolicy, SeparatorMode};

/// A command whose exit status was non-zero but did not abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedCommand {
    pub command: String,
    pub exit_code: Option<i32>,
}

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passes: usize,
    pub commands: usize,
    /// Only populated under [`ExitStatusPolicy::Warn`].
    pub failures: Vec<FailedCommand>,
}

/// Drives segmenter → builder → runner → writer for every configured pass.
///
/// Commands run strictly one after another: the next command is not built
/// until the previous one's output has been written and flushed.
pub struct Pipeline<'a, R: ProcessRunner, W: Write> {
    config: &'a ConfigFile,
    runner: R,
    writer: OutputWriter<W>,
}

impl<'a, R: ProcessRunner, W: Write> Pipeline<'a, R, W> {
    pub fn new(config: &'a ConfigFile, runner: R, writer: OutputWriter<W>) -> Self {
        Self {
            config,
            runner,
            writer,
        }
    }

    pub async fn run(&mut self) -> Result<RunSummary> {
        let config = self.config;
        let mut summary = RunSummary::default();

        for (index, &group_size) in config.group_sizes.iter().enumerate() {
            if index > 0 && config.output.separator == SeparatorMode::Between {
                self.writer.write_separator()?;
            }

            info!(group_size = group_size.get(), "starting pass");

            for command in pass_commands(config, group_size) {
                println!("running {command}");
                debug!(cmd = %command, group_size = group_size.get(), "running command");

                let captured = self.runner.run(&command).await?;
                if let Some(failure) = check_exit_status(config.exit_status, &command, &captured)? {
                    summary.failures.push(failure);
                }

                let text = if config.output.trim {
                    captured.text.trim()
                } else {
                    captured.text.as_str()
                };
                self.writer.write(text)?;
                summary.commands += 1;
            }

            if config.output.separator == SeparatorMode::AfterEach {
                self.writer.write_separator()?;
            }
            summary.passes += 1;
        }

        info!(
            passes = summary.passes,
            commands = summary.commands,
            failures = summary.failures.len(),
            "run complete"
        );

        Ok(summary)
    }

    pub fn writer(&self) -> &OutputWriter<W> {
        &self.writer
    }

    pub fn into_writer(self) -> OutputWriter<W> {
        self.writer
    }
}

/// Apply the exit-status policy to one captured result.
///
/// A shell "command not found" always aborts.
pub fn check_exit_status(
    policy: ExitStatusPolicy,
    command: &MorphCommand,
    captured: &CapturedOutput,
) -> Result<Option<FailedCommand>> {
    match captured.exit_code {
        Some(0) => Ok(None),
        Some(COMMAND_NOT_FOUND) => Err(MorphError::ExecutableNotFound {
            command: command.line().to_string(),
        }),
        code => match policy {
            ExitStatusPolicy::Ignore => {
                debug!(cmd = %command, exit_code = ?code, "ignoring non-zero exit");
                Ok(None)
            }
            ExitStatusPolicy::Warn => {
                warn!(cmd = %command, exit_code = ?code, "command exited unsuccessfully");
                Ok(Some(FailedCommand {
                    command: command.line().to_string(),
                    exit_code: code,
                }))
            }
            ExitStatusPolicy::Fail => Err(MorphError::ChildNonZeroExit {
                command: command.line().to_string(),
                code,
            }),
        },
    }
}
