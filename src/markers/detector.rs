use std::path::Path;

use super::catalog::{JUNK_DIRS, JUNK_FILES, RESOURCE_FORK_PREFIX};

/// Check whether a directory shows any sign of having been touched by a Mac.
///
/// Probes the top level of `path` only: a cheap gate used to decide whether
/// a fixed volume is worth sweeping, not a scan. Checks short-circuit
/// in order: exact junk files, exact junk folders, then any entry carrying
/// the resource-fork prefix.
///
/// A path that cannot be listed (missing, not a directory, unreadable) simply
/// has no markers; the failure is logged at debug and swallowed.
pub fn has_markers(path: &Path) -> bool {
    for name in JUNK_FILES {
        if path.join(name).exists() {
            return true;
        }
    }
    for name in JUNK_DIRS {
        if path.join(name).exists() {
            return true;
        }
    }

    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("cannot list {}: {}", path.display(), e);
            return false;
        }
    };
    for entry in entries.flatten() {
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(RESOURCE_FORK_PREFIX)
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_dir_has_no_markers() {
        let dir = TempDir::new().unwrap();
        assert!(!has_markers(dir.path()));
    }

    #[test]
    fn test_nonexistent_path_has_no_markers() {
        assert!(!has_markers(Path::new("/nonexistent/path/xyz123")));
    }

    #[test]
    fn test_junk_file_at_top_level() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".DS_Store"), b"\0\0").unwrap();
        assert!(has_markers(dir.path()));
    }

    #[test]
    fn test_junk_dir_alone_is_a_marker() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".fseventsd")).unwrap();
        assert!(has_markers(dir.path()));
    }

    #[test]
    fn test_resource_fork_entry_is_a_marker() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("._photo.jpg"), b"fork").unwrap();
        assert!(has_markers(dir.path()));
    }

    #[test]
    fn test_probe_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join(".DS_Store"), b"\0").unwrap();
        assert!(!has_markers(dir.path()));
    }

    #[test]
    fn test_ordinary_content_is_not_a_marker() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("report.pdf"), b"data").unwrap();
        std::fs::create_dir(dir.path().join("photos")).unwrap();
        assert!(!has_markers(dir.path()));
    }
}
