//! Process bootstrap.
//!
//! Resolves configuration from the invocation options, constructs the
//! application, drives its single `execute` call and maps the outcome to an
//! [`ExitStatus`].

use std::future::Future;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use neuroforge_core::config::{NeuroForgeConfig, DEFAULT_CONFIG_FILE};

use crate::cli::Options;
use crate::observability;
use crate::runtime::{NeuroForge, RunReport};
use crate::status::ExitStatus;

/// Run one invocation end to end, writing any failure to stderr.
pub async fn run(options: Options) -> ExitStatus {
    drive(execute(options), &mut std::io::stderr()).await
}

/// Await `fut` and map its outcome to an exit status.
pub async fn drive<F, T, W>(fut: F, err_out: &mut W) -> ExitStatus
where
    F: Future<Output = Result<T>>,
    W: Write,
{
    report(fut.await, err_out)
}

/// Map a finished run to an exit status.
///
/// On failure the full error chain is written to `err_out`. Nothing is
/// written on success.
pub fn report<T, W: Write>(result: Result<T>, err_out: &mut W) -> ExitStatus {
    match result {
        Ok(_) => ExitStatus::Success,
        Err(err) => {
            // A broken error stream leaves nowhere to report; the exit code still does.
            let _ = writeln!(
                err_out,
                "{} {:?}",
                style("Error:").red().bold().for_stderr(),
                err
            );
            ExitStatus::Error
        }
    }
}

async fn execute(options: Options) -> Result<RunReport> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = resolve_config(&options, &cwd)?;

    observability::init_tracing(&config);
    debug!(
        verbose = config.verbose,
        input = ?options.input,
        output = ?options.output,
        args = ?options.args,
        "Invocation options parsed"
    );

    let app = NeuroForge::new(config);
    app.execute().await.context("NeuroForge execution failed")
}

/// Build the application configuration for an invocation.
///
/// An explicit `--config` path must load. Otherwise `neuroforge.toml` in
/// `dir` is used when present. Only `verbose` is taken from the options.
pub fn resolve_config(options: &Options, dir: &Path) -> Result<NeuroForgeConfig> {
    let mut config = match &options.config {
        Some(path) => NeuroForgeConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => {
            let default_path = dir.join(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                NeuroForgeConfig::from_file(&default_path).with_context(|| {
                    format!(
                        "Failed to load configuration from {}",
                        default_path.display()
                    )
                })?
            } else {
                NeuroForgeConfig::default()
            }
        }
    };

    config.verbose |= options.verbose;
    Ok(config)
}
