//! Loop-image lifecycle for integration tests.
//!
//! Images are sparse files attached via losetup; callers detach and
//! destroy in reverse order of setup.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::cmd;
use crate::errors::{LabError, Result};

/// Create a sparse image file of the given size.
pub fn create_image(path: &Path, size_bytes: u64) -> Result<()> {
    info!("creating {} byte image at {}", size_bytes, path.display());

    let file = fs::File::create(path).map_err(|error| LabError::ImageIo {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    file.set_len(size_bytes).map_err(|error| LabError::ImageIo {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;
    Ok(())
}

/// Attach an image to a free loop device, returning the device path.
pub fn attach(path: &Path) -> Result<String> {
    let outcome = cmd::run(
        "losetup",
        &[
            "--find".to_string(),
            "--show".to_string(),
            path.display().to_string(),
        ],
    )?;

    let device = outcome.stdout.trim().to_string();
    if device.is_empty() {
        return Err(LabError::LoopUnavailable {
            path: path.to_path_buf(),
        });
    }

    info!("attached {} at {device}", path.display());
    Ok(device)
}

/// Detach a loop device.
pub fn detach(device: &str) -> Result<()> {
    info!("detaching {device}");
    cmd::run("losetup", &["-d".to_string(), device.to_string()]).map(drop)
}

/// Remove an image file.
pub fn destroy(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|error| LabError::ImageIo {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}

/// Read a filesystem's volume label via e2label.
pub fn read_label(device: &str) -> Result<String> {
    cmd::run("e2label", &[device.to_string()])
        .map(|outcome| outcome.stdout.trim_end().to_string())
}
