//! docker CLI wrapper
//!
//! Wraps invocations of the docker command line tool.

use crate::error::{BuildError, BuildResult};
use std::process::ExitStatus;
use tokio::process::Command;

/// docker CLI wrapper
#[derive(Default)]
pub struct DockerCli;

impl DockerCli {
    pub fn new() -> Self {
        Self
    }

    /// Run a docker command and return its exit status.
    ///
    /// Stdout/stderr are inherited, so docker's own output goes straight to
    /// the console. Only a spawn failure is an error; the returned status is
    /// left to the caller to interpret or ignore.
    pub async fn run(&self, args: &[String]) -> BuildResult<ExitStatus> {
        tracing::debug!("Running: docker {}", args.join(" "));

        let status = Command::new("docker")
            .args(args)
            .status()
            .await
            .map_err(|source| BuildError::Spawn {
                subcommand: args.first().cloned().unwrap_or_default(),
                source,
            })?;

        Ok(status)
    }
}
