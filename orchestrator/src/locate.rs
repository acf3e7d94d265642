//! Node.js runtime discovery.
//!
//! The search path wins; an fnm per-user install tree is the fallback; the
//! bare command name defers "not found" to the invocation step.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Conventional runtime command name.
pub const NODE_CMD: &str = "node";

/// Resolve the Node.js executable to invoke.
///
/// Never fails: when neither the search path nor the fnm tree yields an
/// existing file, the bare `node` name is returned and the subsequent
/// spawn reports the absence.
pub fn find_node() -> PathBuf {
    if let Some(found) = search_path(NODE_CMD, env::var_os("PATH").as_deref()) {
        debug!(path = %found.display(), "runtime found on PATH");
        return found;
    }
    if let Some(home) = home_dir() {
        let fnm_versions = home.join(".fnm").join("node-versions");
        if let Some(found) = probe_fnm_versions(&fnm_versions) {
            debug!(path = %found.display(), "runtime found in fnm tree");
            return found;
        }
    }
    debug!("runtime not found, deferring to bare command name");
    PathBuf::from(NODE_CMD)
}

/// Scan a `PATH`-style variable for `name` (or `name.exe`) as a regular file.
fn search_path(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    for dir in env::split_paths(path_var?) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for candidate in [dir.join(name), dir.join(format!("{name}.exe"))] {
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Probe an fnm `node-versions` tree, highest-sorting version first.
///
/// Each version directory is expected to hold `installation/node.exe`
/// (Windows layout) or `installation/bin/node` (Unix layout).
fn probe_fnm_versions(fnm_dir: &Path) -> Option<PathBuf> {
    let mut versions: Vec<PathBuf> = fs::read_dir(fnm_dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    versions.sort();

    for version in versions.iter().rev() {
        let installation = version.join("installation");
        for candidate in [
            installation.join("node.exe"),
            installation.join("bin").join("node"),
        ] {
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
