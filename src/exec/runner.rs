// src/exec/runner.rs

//! Pluggable process runner abstraction.
//!
//! The pipeline talks to a `ProcessRunner` instead of spawning processes
//! itself. Production code picks [`PtyRunner`](super::PtyRunner) or
//! [`PipeRunner`](super::PipeRunner) from the configured [`RunnerKind`];
//! tests provide a scripted fake that never touches the OS.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::builder::MorphCommand;
use crate::types::RunnerKind;

/// Everything read from one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapturedOutput {
    /// Output read until end-of-stream, decoded lossily as UTF-8.
    pub text: String,
    /// Exit code, or `None` if the child was killed by a signal.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    pub fn new(text: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            text: text.into(),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait abstracting how a single command is executed.
///
/// Implementations block the pipeline until the child's output stream is
/// exhausted; no two commands ever run at the same time.
pub trait ProcessRunner: Send {
    fn run<'a>(
        &'a mut self,
        command: &'a MorphCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for Box<R> {
    fn run<'a>(
        &'a mut self,
        command: &'a MorphCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>> {
        (**self).run(command)
    }
}

/// Construct the production runner for `kind`.
pub fn runner_for(kind: RunnerKind) -> Result<Box<dyn ProcessRunner>> {
    match kind {
        RunnerKind::Pipe => Ok(Box::new(super::PipeRunner::new())),
        #[cfg(unix)]
        RunnerKind::Pty => Ok(Box::new(super::PtyRunner::new())),
        #[cfg(not(unix))]
        RunnerKind::Pty => Err(crate::errors::MorphError::ConfigError(
            "the pty runner requires a unix platform; use runner = \"pipe\"".to_string(),
        )),
    }
}
