// src/exec/pty.rs

//! Pseudo-terminal process runner.
//!
//! Some morph binaries only flush per line when they believe they are
//! talking to a terminal, so by default the child gets a pty as its
//! stdin/stdout/stderr. The parent keeps only the master side and reads it
//! until the last slave handle is closed.

use std::fs::File;
use std::future::Future;
use std::io::{self, Read};
use std::pin::Pin;
use std::process::Stdio;

use nix::errno::Errno;
use nix::pty::{openpty, OpenptyResult, Winsize};
use nix::sys::termios::{self, OutputFlags, SetArg, Termios};
use tracing::{debug, info};

use crate::errors::{MorphError, Result};
use crate::exec::builder::MorphCommand;
use crate::exec::pipe::spawn_error;
use crate::exec::runner::{CapturedOutput, ProcessRunner};
use crate::exec::shell::shell_command;

const READ_CHUNK: usize = 4096;

// `TIOCSCTTY` makes the given terminal the caller's controlling tty.
nix::ioctl_write_int_bad!(set_controlling_tty, nix::libc::TIOCSCTTY);

/// Runs commands attached to a freshly allocated pseudo-terminal.
#[derive(Debug, Clone, Default)]
pub struct PtyRunner;

impl PtyRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for PtyRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a MorphCommand,
    ) -> Pin<Box<dyn Future<Output = Result<CapturedOutput>> + Send + 'a>> {
        Box::pin(run_in_pty(command))
    }
}

async fn run_in_pty(command: &MorphCommand) -> Result<CapturedOutput> {
    let OpenptyResult { master, slave } = open_raw_pty()?;

    let mut child = {
        let mut cmd = shell_command(command.line());
        cmd.stdin(Stdio::from(slave.try_clone()?))
            .stdout(Stdio::from(slave.try_clone()?))
            .stderr(Stdio::from(slave))
            .kill_on_drop(true);

        // SAFETY: `setsid` and `ioctl` are async-signal-safe and touch no
        // parent state. fd 0 is the pty slave at this point.
        unsafe {
            cmd.pre_exec(|| {
                nix::unistd::setsid().map_err(io::Error::from)?;
                set_controlling_tty(0, 0).map_err(io::Error::from)?;
                Ok(())
            });
        }

        cmd.spawn().map_err(|e| spawn_error(command, e))?
        // `cmd` drops here, closing the parent's copies of the slave.
    };

    debug!(cmd = %command, pid = ?child.id(), "spawned child on pty");

    let reader = tokio::task::spawn_blocking(move || drain_master(File::from(master)));

    let status = child.wait().await?;
    let bytes = reader
        .await
        .map_err(|e| MorphError::Other(anyhow::anyhow!("pty reader task failed: {e}")))??;

    let captured = CapturedOutput::new(String::from_utf8_lossy(&bytes), status.code());

    info!(
        cmd = %command,
        exit_code = ?captured.exit_code,
        bytes = bytes.len(),
        "pty process exited"
    );

    Ok(captured)
}

/// Allocate a pty whose line discipline leaves `\n` alone on output.
fn open_raw_pty() -> Result<OpenptyResult> {
    let pty = openpty(None::<&Winsize>, None::<&Termios>)?;

    let mut attrs = termios::tcgetattr(&pty.slave)?;
    attrs.output_flags.remove(OutputFlags::ONLCR);
    termios::tcsetattr(&pty.slave, SetArg::TCSANOW, &attrs)?;

    Ok(pty)
}

/// Read the master side until every slave handle is closed.
///
/// Linux reports `EIO` rather than a zero-length read once the slave side
/// hangs up; both count as end-of-stream.
fn drain_master(mut master: File) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut buf = [0u8; READ_CHUNK];
    loop {
        match master.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if e.raw_os_error() == Some(Errno::EIO as i32) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}
