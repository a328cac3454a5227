// SPDX-License-Identifier: GPL-3.0-only

//! Client facade over the e2fsprogs maintenance tools.
//!
//! A [`Client`] resolves tool names against a search path fixed at
//! construction time, runs one child process per operation with stdout and
//! stderr captured separately, and converts any failure into an
//! [`Ext4Error`] carrying the tool's stderr.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::args::ToArgs;
use crate::error::{Ext4Error, Result};
use crate::options::{CheckOptions, CreateOptions, ResizeOptions};

const CREATE_TOOL: &str = "mke2fs";
const RESIZE_TOOL: &str = "resize2fs";
const CHECK_TOOL: &str = "e2fsck";

/// Directories consulted after the inherited search path, whether or not
/// the environment lists them.
const FALLBACK_DIRS: &[&str] = &["/sbin", "/usr/sbin"];

/// Client for the ext4 maintenance tools.
///
/// The search path is fixed at construction and never re-read from the
/// environment, so a `Client` is safe to share across concurrent
/// operations. Callers are responsible for not running two maintenance
/// operations against the same device at once.
#[derive(Debug)]
pub struct Client {
    search_dirs: Vec<PathBuf>,
}

impl Client {
    /// Build a client that resolves tools against the process `PATH` with
    /// `/sbin` and `/usr/sbin` appended as lowest-priority entries.
    pub fn new() -> Self {
        let inherited = env::var_os("PATH").unwrap_or_default();
        let search_dirs = env::split_paths(&inherited)
            .chain(FALLBACK_DIRS.iter().map(PathBuf::from))
            .collect();
        Self { search_dirs }
    }

    /// Build a client that resolves tools against an explicit
    /// platform-separated search path instead of the default policy.
    pub fn with_search_path<S: AsRef<OsStr>>(path: S) -> Self {
        Self {
            search_dirs: env::split_paths(path.as_ref()).collect(),
        }
    }

    /// Create an ext4 filesystem as described by `opts`.
    ///
    /// Runs `mke2fs` in quiet mode with the filesystem type pinned to
    /// ext4, followed by the marshaled optional flags and operands.
    pub async fn create_filesystem(
        &self,
        opts: &CreateOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let mut args = vec!["-q".to_string(), "-t".to_string(), "ext4".to_string()];
        args.extend(opts.to_args().render());
        self.run(CREATE_TOOL, args, cancel).await.map(drop)
    }

    /// Resize an ext4 filesystem as described by `opts`.
    pub async fn resize_filesystem(
        &self,
        opts: &ResizeOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let args = opts.to_args().render();
        self.run(RESIZE_TOOL, args, cancel).await.map(drop)
    }

    /// Check an ext4 filesystem as described by `opts`.
    ///
    /// When neither `preen` nor `no_fix` is requested, `-y` is injected
    /// ahead of the marshaled flags so every e2fsck prompt is answered
    /// yes. This overrides e2fsck's interactive default; set `preen` or
    /// `no_fix` to get the tool's own prompting behavior back.
    pub async fn check_filesystem(
        &self,
        opts: &CheckOptions,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let mut args = Vec::new();
        if !opts.preen && !opts.no_fix {
            args.push("-y".to_string());
        }
        args.extend(opts.to_args().render());
        self.run(CHECK_TOOL, args, cancel).await.map(drop)
    }

    /// Locate `name` on the configured search path.
    ///
    /// Entries are consulted in order; an empty entry means the current
    /// directory. Existence is enough here; permission problems surface
    /// from the launch stage instead.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        for dir in &self.search_dirs {
            let dir = if dir.as_os_str().is_empty() {
                Path::new(".")
            } else {
                dir.as_path()
            };
            let candidate = dir.join(name);
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(Ext4Error::ExecutableNotFound {
            name: name.to_string(),
        })
    }

    /// Run a resolved tool to completion, racing the cancellation token.
    ///
    /// Returns captured stdout on a clean exit. On any other outcome the
    /// error embeds the rendered command line and, for a non-zero exit,
    /// the captured stderr verbatim.
    async fn run(
        &self,
        tool: &str,
        args: Vec<String>,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>> {
        let path = self.resolve(tool)?;
        let rendered = render_command(tool, &args);
        debug!("executing {rendered}");

        if cancel.is_cancelled() {
            return Err(Ext4Error::Cancelled { command: rendered });
        }

        let child = Command::new(&path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Ext4Error::Spawn {
                command: rendered.clone(),
                source,
            })?;

        let output = tokio::select! {
            output = child.wait_with_output() => {
                output.map_err(|source| Ext4Error::Spawn {
                    command: rendered.clone(),
                    source,
                })?
            }
            () = cancel.cancelled() => {
                warn!("{rendered} cancelled, terminating child");
                return Err(Ext4Error::Cancelled { command: rendered });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!("{rendered} failed: {}", stderr.trim_end());
            return Err(Ext4Error::CommandFailed {
                command: rendered,
                status: output.status,
                stderr,
            });
        }

        Ok(output.stdout)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

fn render_command(tool: &str, args: &[String]) -> String {
    if args.is_empty() {
        tool.to_string()
    } else {
        format!("{} {}", tool, args.join(" "))
    }
}
