use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::engine::{self, CleanMode, CleanReport, SkippedItem};
use super::observer::CleanObserver;
use crate::volumes::{eligible_roots, VolumeProvider, VolumeRoot};

/// Aggregate result of a quick-clean batch
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    /// Targets that existed and were swept, in processing order
    pub targets: Vec<PathBuf>,
    /// Volume roots the classifier selected
    pub volumes: Vec<VolumeRoot>,
    pub files_deleted: u64,
    pub dirs_deleted: u64,
    pub bytes_freed: u64,
    pub skipped: Vec<SkippedItem>,
    pub duration_secs: f64,
}

impl BatchSummary {
    pub fn nothing_to_do(&self) -> bool {
        self.targets.is_empty() && self.volumes.is_empty()
    }
}

/// Run the quick-clean batch: the configured directory (if any) first, then
/// every removable or marked volume root.
///
/// Targets are re-checked for existence right before each sweep; one that
/// vanished since enumeration is skipped silently. Totals accumulate across
/// all targets.
pub fn quick_clean(
    configured: Option<&Path>,
    provider: &dyn VolumeProvider,
    mode: CleanMode,
    observer: &mut dyn CleanObserver,
) -> BatchSummary {
    let start = Instant::now();
    let volumes = eligible_roots(provider);

    let mut queue: Vec<PathBuf> = Vec::new();
    if let Some(path) = configured {
        if !path.as_os_str().is_empty() {
            queue.push(path.to_path_buf());
        }
    }
    queue.extend(volumes.iter().map(|v| v.path.clone()));

    let mut totals = CleanReport::default();
    let mut swept = Vec::new();
    for target in queue {
        if !target.is_dir() {
            tracing::debug!("target vanished, skipping: {}", target.display());
            continue;
        }
        totals.absorb(engine::clean(&target, mode, observer));
        swept.push(target);
    }

    BatchSummary {
        targets: swept,
        volumes,
        files_deleted: totals.files_deleted,
        dirs_deleted: totals.dirs_deleted,
        bytes_freed: totals.bytes_freed,
        skipped: totals.skipped,
        duration_secs: start.elapsed().as_secs_f64(),
    }
}
