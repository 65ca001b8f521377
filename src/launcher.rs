//! Process replacement with the bundled ssh binary
//!
//! Resolves the binary path, verifies it exists as a regular file, and
//! execs it with the caller's argument vector. A missing binary is a
//! packaging defect and the only expected failure; there are no
//! fallback search paths and no retries.

use std::convert::Infallible;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths;

/// Launcher errors
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The bundled binary is absent or not a regular file
    #[error("ssh binary not found at {}", .0.display())]
    MissingBinary(PathBuf),

    /// The launcher's own install location could not be determined
    #[error("failed to locate install root: {0}")]
    InstallRoot(#[source] io::Error),

    /// The binary exists but could not replace the current process
    #[error("failed to exec {}: {source}", .path.display())]
    Exec {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Replace the current process with the bundled ssh binary
///
/// `args` is forwarded verbatim as argv[1..]; argv[0] is the binary
/// path itself. On success this never returns: the process image is
/// gone and the exit status belongs to the replaced binary.
pub fn run(args: &[OsString]) -> Result<Infallible, LauncherError> {
    let root = paths::install_root().map_err(LauncherError::InstallRoot)?;
    run_from(&root, args)
}

/// Same as [`run`], with an explicit install root
pub fn run_from(root: &Path, args: &[OsString]) -> Result<Infallible, LauncherError> {
    let binary = paths::bundled_ssh_path(root);
    if !binary.is_file() {
        return Err(LauncherError::MissingBinary(binary));
    }

    tracing::debug!("replacing process with {}", binary.display());
    exec_replace(&binary, args)
}

/// Replace the current process image, inheriting stdio and environment
#[cfg(unix)]
fn exec_replace(binary: &Path, args: &[OsString]) -> Result<Infallible, LauncherError> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure
    let err = std::process::Command::new(binary).args(args).exec();
    Err(LauncherError::Exec {
        path: binary.to_path_buf(),
        source: err,
    })
}

/// Fallback for platforms without exec: run the binary as a child and
/// exit with its exact status
#[cfg(not(unix))]
fn exec_replace(binary: &Path, args: &[OsString]) -> Result<Infallible, LauncherError> {
    let status = std::process::Command::new(binary)
        .args(args)
        .status()
        .map_err(|source| LauncherError::Exec {
            path: binary.to_path_buf(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
