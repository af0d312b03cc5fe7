use std::io;

use thiserror::Error;

/// Library-wide error type for virebuild operations.
///
/// Stage commands that run but exit non-zero are not errors here: the
/// pipeline carries on past them. Only conditions the toolchain front end
/// treats as fatal surface through this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A stage command could not be launched at all.
    #[error("Failed to launch '{command}': {details}")]
    CommandSpawn { command: String, details: String },
}
