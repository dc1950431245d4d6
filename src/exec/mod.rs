// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`builder`] renders chunk pairs into `MorphCommand`s (pure).
//! - [`runner`] defines the `ProcessRunner` trait the pipeline depends on,
//!   plus `CapturedOutput`.
//! - [`pty`] runs commands on a pseudo-terminal (unix only).
//! - [`pipe`] runs commands on plain pipes.
//! - [`shell`] wraps a command line in the platform shell.

pub mod builder;
pub mod pipe;
#[cfg(unix)]
pub mod pty;
pub mod runner;
pub mod shell;

pub use builder::{build, MorphCommand};
pub use pipe::PipeRunner;
#[cfg(unix)]
pub use pty::PtyRunner;
pub use runner::{runner_for, CapturedOutput, ProcessRunner};
