// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Error types for maintenance-tool invocations
#[derive(Error, Debug)]
pub enum Ext4Error {
    #[error("executable not found on search path: {name}")]
    ExecutableNotFound { name: String },

    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{command} cancelled before completion")]
    Cancelled { command: String },
}

/// Result type alias for maintenance-tool invocations
pub type Result<T> = std::result::Result<T, Ext4Error>;
