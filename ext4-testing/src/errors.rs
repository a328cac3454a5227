use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    #[error("command failed: {command}; stderr: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("image io error for {path:?}: {reason}")]
    ImageIo { path: PathBuf, reason: String },
    #[error("losetup reported no loop device for {path:?}")]
    LoopUnavailable { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, LabError>;
