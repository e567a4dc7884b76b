//! Atomic file writer.
//!
//! Writes go to `<path>.sprintsync.tmp` first and are renamed into
//! place (atomic on POSIX), so a tracked document is never left half
//! written. Parent directories are created as needed.

use std::path::{Path, PathBuf};

use crate::error::{io_err, EngineError};

/// Atomically write `content` to `path`, LF-normalised.
pub fn atomic_write(path: &Path, content: &str) -> Result<(), EngineError> {
    let tmp = PathBuf::from(format!("{}.sprintsync.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), EngineError> {
    let normalized = content.replace("\r\n", "\n");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, &normalized).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::debug!("wrote: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_content_and_cleans_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        atomic_write(&path, "hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        let tmp = PathBuf::from(format!("{}.sprintsync.tmp", path.display()));
        assert!(!tmp.exists(), ".sprintsync.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("doc.md");
        atomic_write(&path, "content").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn crlf_input_lands_as_lf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        atomic_write(&path, "line1\r\nline2\r\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        atomic_write(&path, "v1").unwrap();
        atomic_write(&path, "v2").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();

        let path = readonly_dir.join("doc.md");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        // Permission bits do not bind for euid 0; skip when the chmod
        // has no effect.
        if fs::write(readonly_dir.join("write_check"), "").is_ok() {
            return;
        }

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("doc.md.sprintsync.tmp");

        let err = atomic_write_with_tmp(&path, "new content", &tmp_path)
            .expect_err("rename should fail on readonly dir");
        let _ = err;

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!tmp_path.exists(), ".sprintsync.tmp should be cleaned up");

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();
    }
}
