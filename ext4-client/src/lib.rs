// SPDX-License-Identifier: GPL-3.0-only

//! Typed client for the ext4 maintenance tools
//!
//! This crate wraps the e2fsprogs command-line tools behind typed
//! configuration records instead of hand-built argument lists:
//! - `mke2fs` for filesystem creation
//! - `resize2fs` for growing or shrinking a filesystem
//! - `e2fsck` for checking and repair
//!
//! Tools are located on a restricted search path fixed when the [`Client`]
//! is built (the inherited `PATH` plus `/sbin` and `/usr/sbin`), and every
//! failure carries the tool's captured stderr so callers can surface
//! actionable diagnostics instead of inspecting exit codes.

pub mod args;
pub mod client;
pub mod error;
pub mod options;

pub use client::Client;
pub use error::{Ext4Error, Result};
pub use options::{CheckOptions, CreateOptions, ResizeOptions};
