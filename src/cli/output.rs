use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::cleaner::{
    BatchSummary, CleanMode, CleanObserver, CleanReport, DeleteEvent, DeleteOutcome,
};
use crate::common::format::{self, format_path, format_size};
use crate::volumes::VolumeStatus;

fn mode_label(mode: CleanMode) -> &'static str {
    match mode {
        CleanMode::DryRun => "dry_run",
        CleanMode::Delete => "delete",
    }
}

// ─── Clean ────────────────────────────────────────────────────────────────────

/// Print the result of sweeping a single directory
pub fn print_clean_report(target: &Path, report: &CleanReport, mode: CleanMode) {
    println!();
    match mode {
        CleanMode::DryRun => println!(
            "  {} Dry run — would remove {}, {} ({}) under {}. No files modified.",
            "ℹ️",
            format::count_files(report.files_deleted),
            format::count_folders(report.dirs_deleted),
            format_size(report.bytes_freed),
            format_path(target).cyan(),
        ),
        CleanMode::Delete => println!(
            "  {} Swept {} — {}, {} removed, {} freed",
            "✓".green(),
            format_path(target).cyan(),
            format::count_files(report.files_deleted),
            format::count_folders(report.dirs_deleted),
            format_size(report.bytes_freed),
        ),
    }
    print_skipped(&report.skipped);
    println!();
}

pub fn print_clean_json(target: &Path, report: &CleanReport, mode: CleanMode) {
    let json = serde_json::json!({
        "mode": mode_label(mode),
        "target": target.display().to_string(),
        "files_deleted": report.files_deleted,
        "dirs_deleted": report.dirs_deleted,
        "bytes_freed": report.bytes_freed,
        "skipped": report.skipped,
    });
    match serde_json::to_string_pretty(&json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn print_skipped(skipped: &[crate::cleaner::SkippedItem]) {
    if skipped.is_empty() {
        return;
    }
    println!();
    println!("  {} {} skipped:", "⚠".yellow(), skipped.len());
    for item in skipped.iter().take(10) {
        println!(
            "    {} {} ({})",
            "•".dimmed(),
            format_path(&item.path),
            item.reason.to_string().yellow()
        );
    }
    if skipped.len() > 10 {
        println!("    {} ... and {} more", "•".dimmed(), skipped.len() - 10);
    }
}

// ─── Quick batch ──────────────────────────────────────────────────────────────

/// Print the aggregate quick-sweep summary
pub fn print_batch_summary(summary: &BatchSummary, mode: CleanMode) {
    println!();
    match mode {
        CleanMode::DryRun => println!(
            "  {} Dry run — would remove {}, {} ({}) across {} targets",
            "ℹ️",
            format::count_files(summary.files_deleted),
            format::count_folders(summary.dirs_deleted),
            format_size(summary.bytes_freed),
            summary.targets.len(),
        ),
        CleanMode::Delete => println!(
            "  {} Quick sweep complete — {}, {} removed, {} freed in {}",
            "🧹",
            format::count_files(summary.files_deleted),
            format::count_folders(summary.dirs_deleted),
            format_size(summary.bytes_freed),
            format::format_duration(summary.duration_secs).cyan(),
        ),
    }

    if summary.volumes.is_empty() {
        println!("  {} No removable or marked volumes detected", "  ".dimmed());
    } else {
        let roots: Vec<String> = summary
            .volumes
            .iter()
            .map(|v| {
                if v.removable {
                    format!("{} (removable)", v.path.display())
                } else {
                    format!("{} (marked)", v.path.display())
                }
            })
            .collect();
        println!("  {} Volumes: {}", "💾", roots.join(", ").cyan());
    }

    for target in &summary.targets {
        println!("    {} {}", "•".dimmed(), format_path(target));
    }

    print_skipped(&summary.skipped);
    println!();
}

pub fn print_batch_json(summary: &BatchSummary, mode: CleanMode) {
    let mut json = match serde_json::to_value(summary) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    json["mode"] = mode_label(mode).into();
    match serde_json::to_string_pretty(&json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}

// ─── Volumes ──────────────────────────────────────────────────────────────────

/// Print the volume survey
pub fn print_volumes(statuses: &[VolumeStatus]) {
    println!();
    println!("  {} Mounted volumes", "💾");
    println!("{}", "─".repeat(60).dimmed());

    if statuses.is_empty() {
        println!("  No mounted volumes detected.");
        println!();
        return;
    }

    for status in statuses {
        let kind = if status.root.removable {
            "removable".green()
        } else {
            "fixed".dimmed()
        };
        let markers = if status.marked {
            "markers".yellow()
        } else {
            "clean".dimmed()
        };
        let verdict = if status.eligible {
            "would sweep".cyan()
        } else {
            "left alone".dimmed()
        };
        println!(
            "  {} {:<32} {:<10} {:<8} {}",
            "•".dimmed(),
            format::truncate(&status.root.path.display().to_string(), 32),
            kind,
            markers,
            verdict,
        );
    }
    println!();
}

pub fn print_volumes_json(statuses: &[VolumeStatus]) {
    match serde_json::to_string_pretty(statuses) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: {}", e),
    }
}

// ─── Check ────────────────────────────────────────────────────────────────────

/// Print the marker-detector verdict for one directory
pub fn print_check(path: &Path, found: bool) {
    println!();
    if found {
        println!(
            "  {} {} — Mac markers present at top level",
            "🔍",
            format_path(path).cyan()
        );
        println!(
            "  {} Sweep with: {}",
            "💡",
            format!("dotsweep clean {}", path.display()).cyan()
        );
    } else {
        println!("  {} {} — no Mac markers", "✨", format_path(path).cyan());
    }
    println!();
}

// ─── Progress observer ────────────────────────────────────────────────────────

/// Default human-mode observer: a spinner ticking per removal, with skips
/// surfaced immediately above it.
pub struct ProgressObserver {
    pb: ProgressBar,
}

impl ProgressObserver {
    pub fn new(mode: CleanMode) -> Self {
        let pb = ProgressBar::new_spinner();
        let verb = match mode {
            CleanMode::DryRun => "found",
            CleanMode::Delete => "removed",
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(&format!("{{spinner:.cyan}} {{pos}} {} {{msg}}", verb))
                .unwrap(),
        );
        ProgressObserver { pb }
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

impl CleanObserver for ProgressObserver {
    fn on_delete(&mut self, event: &DeleteEvent) {
        match &event.outcome {
            DeleteOutcome::Deleted { .. } | DeleteOutcome::WouldDelete { .. } => {
                self.pb
                    .set_message(format::truncate(&format_path(&event.path), 48));
                self.pb.inc(1);
            }
            DeleteOutcome::Skipped { reason, .. } => {
                self.pb.println(format!(
                    "  {} skipped {} ({})",
                    "⚠".yellow(),
                    format_path(&event.path),
                    reason
                ));
            }
        }
    }
}
