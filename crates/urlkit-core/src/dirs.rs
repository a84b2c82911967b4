//! Platform directory lookups: executable, documents, temp, resources.
//!
//! Each returns a non-empty absolute path string. Values are
//! environment-dependent; when a directory cannot be determined the working
//! directory is returned so the contract holds on stripped-down hosts.

use std::env;
use std::path::PathBuf;

const APP_PREFIX: &str = "urlkit";

/// Absolute path of the current executable.
pub fn executable() -> String {
    env::current_exe()
        .unwrap_or_else(|_| fallback_dir())
        .display()
        .to_string()
}

/// The application's writable documents area (XDG data home).
pub fn documents() -> String {
    match xdg::BaseDirectories::with_prefix(APP_PREFIX) {
        Ok(dirs) => dirs.get_data_home().display().to_string(),
        Err(_) => fallback_dir().display().to_string(),
    }
}

/// The application's scratch area (XDG cache home).
pub fn temp() -> String {
    match xdg::BaseDirectories::with_prefix(APP_PREFIX) {
        Ok(dirs) => dirs.get_cache_home().display().to_string(),
        Err(_) => fallback_dir().display().to_string(),
    }
}

/// The read-only resource area: the directory containing the executable.
pub fn resources() -> String {
    let exe = env::current_exe().unwrap_or_else(|_| fallback_dir());
    match exe.parent() {
        Some(dir) if dir.as_os_str().is_empty() => fallback_dir().display().to_string(),
        Some(dir) => dir.display().to_string(),
        None => fallback_dir().display().to_string(),
    }
}

fn fallback_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
}
