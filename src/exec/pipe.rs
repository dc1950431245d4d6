// src/exec/pipe.rs

//! Plain-pipe process runner.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::Stdio;

use tracing::{debug, info};

use crate::errors::{MorphError, Result};
use crate::exec::builder::MorphCommand;
use crate::exec::runner::{CapturedOutput, ProcessRunner};
use crate::exec::shell::shell_command;

/// Runs commands with stdout and stderr attached to pipes.
///
/// Stdout becomes the captured text; stderr is only logged at debug level.
#[derive(Debug, Clone, Default)]
pub struct PipeRunner;

impl PipeRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for PipeRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a MorphCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>> {
        Box::pin(run_piped(command))
    }
}

async fn run_piped(command: &MorphCommand) -> Result<CapturedOutput> {
    let mut cmd = shell_command(command.line());
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| spawn_error(command, e))?;
    let output = child.wait_with_output().await?;

    for line in String::from_utf8_lossy(&output.stderr).lines() {
        debug!(cmd = %command, "stderr: {}", line);
    }

    let captured = CapturedOutput::new(
        String::from_utf8_lossy(&output.stdout),
        output.status.code(),
    );

    info!(
        cmd = %command,
        exit_code = ?captured.exit_code,
        bytes = output.stdout.len(),
        "piped process exited"
    );

    Ok(captured)
}

pub(crate) fn spawn_error(command: &MorphCommand, err: io::Error) -> MorphError {
    if err.kind() == io::ErrorKind::NotFound {
        MorphError::ExecutableNotFound {
            command: command.line().to_string(),
        }
    } else {
        MorphError::IoError(err)
    }
}
