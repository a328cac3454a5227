use std::process::Command;

use crate::errors::{LabError, Result};

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub command: String,
    pub stdout: String,
    pub stderr: String,
}

pub fn render(command: &str, args: &[String]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}

/// Run a host tool to completion, failing with its stderr on a non-zero
/// exit.
pub fn run(command: &str, args: &[String]) -> Result<CommandOutput> {
    let rendered = render(command, args);
    tracing::debug!("lab: {rendered}");

    let output = Command::new(command)
        .args(args)
        .output()
        .map_err(|error| LabError::CommandFailed {
            command: rendered.clone(),
            stderr: error.to_string(),
        })?;

    if !output.status.success() {
        return Err(LabError::CommandFailed {
            command: rendered,
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(CommandOutput {
        command: rendered,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}
