use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::observer::{CleanObserver, DeleteEvent, DeleteOutcome, EntryKind};
use crate::common::errors::SkipReason;
use crate::markers::catalog;

/// Clean mode determines whether anything is actually removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Walk and report without touching the tree
    DryRun,
    /// Permanent removal
    Delete,
}

/// Report from sweeping one directory tree
#[derive(Debug, Default, Serialize)]
pub struct CleanReport {
    pub files_deleted: u64,
    pub dirs_deleted: u64,
    pub bytes_freed: u64,
    pub skipped: Vec<SkippedItem>,
}

/// A delete attempt that failed, with its classified reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub reason: SkipReason,
}

impl CleanReport {
    pub fn absorb(&mut self, other: CleanReport) {
        self.files_deleted += other.files_deleted;
        self.dirs_deleted += other.dirs_deleted;
        self.bytes_freed += other.bytes_freed;
        self.skipped.extend(other.skipped);
    }
}

/// Sweep the tree rooted at `base`, removing every cataloged marker.
///
/// Depth-first; each subtree is fully handled where it is encountered. A
/// junk-named folder is removed wholesale (contents and all, at any depth)
/// and its subtree is never walked or reported separately. Non-junk folders
/// are descended into; non-junk files are never touched.
///
/// Per-item failures are classified, reported to the observer, and do not
/// stop the walk. The report does not distinguish an empty tree from a
/// missing one; callers check existence first.
pub fn clean(base: &Path, mode: CleanMode, observer: &mut dyn CleanObserver) -> CleanReport {
    let mut report = CleanReport::default();
    sweep_dir(base, mode, observer, &mut report);
    report
}

fn sweep_dir(dir: &Path, mode: CleanMode, observer: &mut dyn CleanObserver, report: &mut CleanReport) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("cannot list {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                tracing::debug!("cannot stat {}: {}", entry.path().display(), e);
                continue;
            }
        };
        let path = entry.path();

        // file_type never follows symlinks, so a link to a junk-named
        // folder is left alone rather than followed off the volume
        if file_type.is_dir() {
            if catalog::is_junk_dir(&name) {
                remove_junk_dir(&path, mode, observer, report);
            } else {
                sweep_dir(&path, mode, observer, report);
            }
        } else if catalog::is_junk_file(&name) {
            remove_junk_file(&path, mode, observer, report);
        }
    }
}

fn remove_junk_file(
    path: &Path,
    mode: CleanMode,
    observer: &mut dyn CleanObserver,
    report: &mut CleanReport,
) {
    let bytes = std::fs::symlink_metadata(path).map(|m| m.len()).unwrap_or(0);

    if mode == CleanMode::DryRun {
        report.files_deleted += 1;
        report.bytes_freed += bytes;
        observer.on_delete(&DeleteEvent {
            path: path.to_path_buf(),
            kind: EntryKind::File,
            outcome: DeleteOutcome::WouldDelete { bytes },
        });
        return;
    }

    match std::fs::remove_file(path) {
        Ok(()) => {
            report.files_deleted += 1;
            report.bytes_freed += bytes;
            observer.on_delete(&DeleteEvent {
                path: path.to_path_buf(),
                kind: EntryKind::File,
                outcome: DeleteOutcome::Deleted { bytes },
            });
        }
        Err(e) => skip(path, EntryKind::File, &e, observer, report),
    }
}

fn remove_junk_dir(
    path: &Path,
    mode: CleanMode,
    observer: &mut dyn CleanObserver,
    report: &mut CleanReport,
) {
    let bytes = dir_size(path);

    if mode == CleanMode::DryRun {
        report.dirs_deleted += 1;
        report.bytes_freed += bytes;
        observer.on_delete(&DeleteEvent {
            path: path.to_path_buf(),
            kind: EntryKind::Folder,
            outcome: DeleteOutcome::WouldDelete { bytes },
        });
        return;
    }

    match std::fs::remove_dir_all(path) {
        Ok(()) => {
            report.dirs_deleted += 1;
            report.bytes_freed += bytes;
            observer.on_delete(&DeleteEvent {
                path: path.to_path_buf(),
                kind: EntryKind::Folder,
                outcome: DeleteOutcome::Deleted { bytes },
            });
        }
        Err(e) => skip(path, EntryKind::Folder, &e, observer, report),
    }
}

fn skip(
    path: &Path,
    kind: EntryKind,
    err: &std::io::Error,
    observer: &mut dyn CleanObserver,
    report: &mut CleanReport,
) {
    let reason = SkipReason::from_io(err);
    report.skipped.push(SkippedItem {
        path: path.to_path_buf(),
        kind,
        reason,
    });
    observer.on_delete(&DeleteEvent {
        path: path.to_path_buf(),
        kind,
        outcome: DeleteOutcome::Skipped {
            reason,
            detail: err.to_string(),
        },
    });
}

/// Total logical size of a directory tree
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.metadata().map(|m| m.len()).unwrap_or(0))
        .sum()
}
