// src/pipeline/mod.rs

//! Run orchestration.
//!
//! - [`plan`] computes the commands of each pass without touching the OS,
//!   so dry runs and tests see exactly what a real run would execute.
//! - [`runtime`] is the IO shell: it feeds each planned command to a
//!   `ProcessRunner` and each result to the `OutputWriter`, in order.

pub mod plan;
pub mod runtime;

pub use plan::{pass_commands, plan};
pub use runtime::{check_exit_status, FailedCommand, Pipeline, RunSummary};
