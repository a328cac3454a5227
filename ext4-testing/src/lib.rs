//! Integration lab for the ext4 maintenance client
//!
//! Provisions loop-device-backed scratch filesystems for the env-gated
//! integration tests and the `lab` binary. Everything here shells out to
//! host tools and needs root; nothing in this crate is part of the
//! client's public surface.

pub mod cmd;
pub mod errors;
pub mod lab;
pub mod support;
