//! Gating helpers for the destructive integration tests.

pub fn destructive_enabled() -> bool {
    std::env::var("EXT4_TESTING_ENABLE_DESTRUCTIVE")
        .ok()
        .as_deref()
        == Some("1")
}

pub fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Reason to skip a destructive test, or `None` when the environment can
/// run it: opted in, root, and every required tool installed.
pub fn skip_reason(tools: &[&str]) -> Option<String> {
    if !destructive_enabled() {
        return Some("set EXT4_TESTING_ENABLE_DESTRUCTIVE=1 to run".to_string());
    }
    if !is_root() {
        return Some("requires root for loop device setup".to_string());
    }
    for tool in tools {
        if which::which(tool).is_err() {
            return Some(format!("{tool} not installed"));
        }
    }
    None
}
