//! openssh-loee: launcher for the bundled OpenSSH client
//!
//! Locates the patched `ssh` binary (carrying the `session-bind@pl.loee`
//! agent extension) bundled under this package's install root and
//! replaces the current process with it, forwarding all arguments
//! unchanged. The SSH protocol itself lives entirely in the bundled
//! binary; this crate is only the packaging shim around it.

pub mod launcher;
pub mod paths;

pub use launcher::{run, LauncherError};
pub use paths::ssh_path;
