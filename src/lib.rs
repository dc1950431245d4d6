// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod segment;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{default_config_path, load_and_validate, ConfigFile};
use crate::exec::runner_for;
use crate::output::OutputWriter;
use crate::pipeline::{plan, Pipeline};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file or preset) and CLI overrides
/// - the process runner for the configured transport
/// - the output file
/// - the pipeline itself
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(&args)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let runner = runner_for(cfg.runner)?;
    let writer = OutputWriter::open(&cfg.output.path, cfg.output.append)?;
    info!(
        output = %cfg.output.path,
        runner = %cfg.runner,
        words = cfg.phrase.len(),
        "starting run"
    );

    let mut pipeline = Pipeline::new(&cfg, runner, writer);
    let summary = pipeline.run().await?;

    for failure in &summary.failures {
        warn!(
            cmd = %failure.command,
            exit_code = ?failure.exit_code,
            "command failed during run"
        );
    }
    println!(
        "wrote {} block(s) in {} pass(es) to {}",
        summary.commands, summary.passes, cfg.output.path
    );

    Ok(())
}

/// Pick the config source and apply CLI overrides.
fn resolve_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut cfg = match (&args.preset, &args.config) {
        (Some(preset), _) => preset.config()?,
        (None, Some(path)) => load_and_validate(PathBuf::from(path))?,
        (None, None) => load_and_validate(default_config_path())?,
    };

    if let Some(ref output) = args.output {
        cfg.output.path = output.clone();
    }
    if let Some(runner) = args.runner {
        cfg.runner = runner;
    }

    Ok(cfg)
}

/// Simple dry-run output: print settings and every command line.
fn print_dry_run(cfg: &ConfigFile) {
    println!("morphpoem dry-run");
    println!("  phrase = {:?}", cfg.phrase.to_string());
    println!("  executable = {}", cfg.command.executable);
    if !cfg.command.extra_args.is_empty() {
        println!("  extra_args = {:?}", cfg.command.extra_args);
    }
    println!("  runner = {}", cfg.runner);
    println!("  exit_status = {:?}", cfg.exit_status);
    println!(
        "  output = {} (trim: {}, separator: {:?}, append: {})",
        cfg.output.path, cfg.output.trim, cfg.output.separator, cfg.output.append
    );
    println!();

    for (group_size, commands) in plan(cfg) {
        println!("pass group_size={group_size} ({} commands):", commands.len());
        for command in commands {
            println!("  {command}");
        }
    }

    debug!("dry-run complete (no execution)");
}
