//! Install-root discovery and bundled binary path derivation
//!
//! The packaging contract is fixed: the patched ssh binary lives at
//! `<install root>/bin/ssh`, where the install root is the directory
//! containing the launcher executable itself.

use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory of the install root holding bundled binaries
pub const BIN_DIR: &str = "bin";

/// File name of the bundled patched ssh binary
pub const SSH_BINARY: &str = "ssh";

/// Get the install root: the directory containing the running launcher
///
/// Determined once from the executable's own location. Symlinks are
/// left unresolved so the binary is found relative to wherever the
/// package was actually installed.
pub fn install_root() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("launcher executable {:?} has no parent directory", exe),
        )
    })
}

/// Derive the bundled ssh path for a given install root
///
/// Pure computation: always `<root>/bin/ssh`, independent of the
/// current working directory. Does not check existence.
pub fn bundled_ssh_path(root: &Path) -> PathBuf {
    root.join(BIN_DIR).join(SSH_BINARY)
}

/// Absolute path to the bundled patched ssh binary
pub fn ssh_path() -> io::Result<PathBuf> {
    Ok(bundled_ssh_path(&install_root()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_path_is_root_bin_ssh() {
        let root = Path::new("/opt/tool");
        assert_eq!(
            bundled_ssh_path(root),
            PathBuf::from("/opt/tool/bin/ssh")
        );
    }

    #[test]
    fn test_bundled_path_ignores_cwd() {
        let root = PathBuf::from("/opt/tool");
        let before = bundled_ssh_path(&root);

        let dir = tempfile::TempDir::new().unwrap();
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let after = bundled_ssh_path(&root);
        std::env::set_current_dir(original).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_bundled_path_relative_root() {
        let root = Path::new("pkg");
        assert_eq!(bundled_ssh_path(root), PathBuf::from("pkg/bin/ssh"));
    }

    #[test]
    fn test_install_root_is_exe_dir() {
        let root = install_root().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(root, exe.parent().unwrap());
    }

    #[test]
    fn test_ssh_path_under_install_root() {
        let path = ssh_path().unwrap();
        assert!(path.starts_with(install_root().unwrap()));
        assert_eq!(path.file_name().unwrap(), SSH_BINARY);
        assert_eq!(path.parent().unwrap().file_name().unwrap(), BIN_DIR);
    }
}
