//! Workshop image tool error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to launch docker {subcommand}: {source}")]
    Spawn {
        subcommand: String,
        source: std::io::Error,
    },
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
