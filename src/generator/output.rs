//! All-or-nothing file output.
//!
//! Bytes go to a temporary file in the target's directory, are flushed to
//! disk, then renamed over the target. A failure at any step leaves the
//! previous file (if any) untouched and removes the temporary file. On
//! platforms where rename cannot replace a file held open by another
//! process, the rename fails and the old file stays in place.

use crate::error::{CatalogError, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Atomically replace `path` with `bytes`.
///
/// # Errors
///
/// Returns `CatalogError::Io` if `path` is a directory or a read-only file,
/// its parent does not exist or is not writable, or the write or rename
/// fails.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    if path.is_dir() {
        return Err(CatalogError::io(
            path,
            io::Error::new(io::ErrorKind::IsADirectory, "target is a directory"),
        ));
    }
    if std::fs::metadata(path).is_ok_and(|metadata| metadata.permissions().readonly()) {
        return Err(CatalogError::io(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "target is read-only"),
        ));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".cpp-catalog-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| CatalogError::io(path, e))?;

    temp.write_all(bytes).map_err(|e| CatalogError::io(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| CatalogError::io(path, e))?;
    apply_permissions(path, temp.as_file()).map_err(|e| CatalogError::io(path, e))?;

    temp.persist(path)
        .map_err(|e| CatalogError::io(path, e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}

/// Keep the mode of an existing target; new files get 0644.
#[cfg(unix)]
fn apply_permissions(path: &Path, file: &std::fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match std::fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => std::fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn apply_permissions(path: &Path, file: &std::fs::File) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) => file.set_permissions(metadata.permissions()),
        Err(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overwrites_existing_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out.xlsx");
        std::fs::write(&path, b"old")?;

        write_atomically(&path, b"new contents")?;

        assert_eq!(std::fs::read(&path)?, b"new contents");
        // no temporary file left behind
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_directory_target_is_io_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let result = write_atomically(dir.path(), b"data");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_missing_parent_is_io_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("missing").join("out.xlsx");
        let result = write_atomically(&path, b"data");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
        assert!(!path.exists());
        Ok(())
    }

    /// A write-protected target keeps its contents, even when the directory
    /// is writable
    #[cfg(unix)]
    #[test]
    fn test_read_only_target_is_io_error() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new()?;
        let path = dir.path().join("out.xlsx");
        std::fs::write(&path, b"old")?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o444))?;

        let result = write_atomically(&path, b"new");

        assert!(matches!(result, Err(CatalogError::Io { .. })));
        assert_eq!(std::fs::read(&path)?, b"old");
        assert_eq!(std::fs::metadata(&path)?.permissions().mode() & 0o777, 0o444);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
