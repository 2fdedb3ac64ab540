use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::common::errors::SkipReason;
use crate::common::format;

/// What kind of entry a delete attempt targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Folder,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Folder => write!(f, "folder"),
        }
    }
}

/// How a single delete attempt ended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted { bytes: u64 },
    WouldDelete { bytes: u64 },
    Skipped { reason: SkipReason, detail: String },
}

/// One delete attempt, success or not. The cleaner reports every attempt
/// through [`CleanObserver`]; nothing is printed from inside the walk.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEvent {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: DeleteOutcome,
}

/// Receives every delete attempt the cleaner makes.
pub trait CleanObserver {
    fn on_delete(&mut self, event: &DeleteEvent);
}

/// Discards events. For callers that only want the report.
pub struct NullObserver;

impl CleanObserver for NullObserver {
    fn on_delete(&mut self, _event: &DeleteEvent) {}
}

/// Prints one diagnostic line per attempt.
pub struct ConsoleObserver;

impl CleanObserver for ConsoleObserver {
    fn on_delete(&mut self, event: &DeleteEvent) {
        let display = format::format_path(&event.path);
        match &event.outcome {
            DeleteOutcome::Deleted { bytes } => println!(
                "  {} removed {} {} ({})",
                "✓".green(),
                event.kind,
                display,
                format::format_size(*bytes).dimmed()
            ),
            DeleteOutcome::WouldDelete { bytes } => println!(
                "  {} would remove {} {} ({})",
                "→".yellow(),
                event.kind,
                display,
                format::format_size(*bytes).dimmed()
            ),
            DeleteOutcome::Skipped { reason, detail } => println!(
                "  {} skipped {} {} — {}: {}",
                "⚠".yellow(),
                event.kind,
                display,
                reason,
                detail.dimmed()
            ),
        }
    }
}

/// Collects events. Tests assert on the stream instead of captured stdout.
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Vec<DeleteEvent>,
}

impl CleanObserver for RecordingObserver {
    fn on_delete(&mut self, event: &DeleteEvent) {
        self.events.push(event.clone());
    }
}
