use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use dotsweep::cleaner::{self, CleanMode, ConsoleObserver, NullObserver};
use dotsweep::cli::args::{Cli, Commands, ConfigAction, OutputFormat};
use dotsweep::cli::output::{self, ProgressObserver};
use dotsweep::common::config::Store;
use dotsweep::common::errors::SweepError;
use dotsweep::common::format::{self, format_size};
use dotsweep::markers;
use dotsweep::volumes::{self, HostVolumes, SnapshotVolumes, VolumeProvider};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("dotsweep=debug")
            .init();
    }

    let store = match cli.config {
        Some(ref path) => Store::at(path.clone()),
        None => Store::default_location(),
    };

    match cli.command {
        Commands::Quick { dry_run, yes } => cmd_quick(&cli, &store, dry_run, yes),

        Commands::Clean {
            ref path,
            dry_run,
            yes,
        } => cmd_clean(&cli, path.clone(), dry_run, yes),

        Commands::Check { ref path } => cmd_check(&cli, path),

        Commands::Volumes => cmd_volumes(&cli),

        Commands::Config { ref action } => cmd_config(&store, action),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                dotsweep::cli::args::CompletionShell::Bash => clap_complete::Shell::Bash,
                dotsweep::cli::args::CompletionShell::Zsh => clap_complete::Shell::Zsh,
                dotsweep::cli::args::CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "dotsweep", &mut std::io::stdout());
            Ok(())
        }
    }
}

// ─── Clean ────────────────────────────────────────────────────────────────────

fn cmd_clean(cli: &Cli, path: PathBuf, dry_run: bool, yes: bool) -> Result<()> {
    if !path.is_dir() {
        return Err(SweepError::TargetMissing { path }.into());
    }

    let mode = if dry_run {
        CleanMode::DryRun
    } else {
        CleanMode::Delete
    };

    if mode == CleanMode::Delete && !yes {
        let prompt = format!(
            "Remove macOS metadata under {}",
            format::format_path(&path).cyan()
        );
        if !confirm(&prompt)? {
            println!("  {} Cancelled", "✗".red());
            return Ok(());
        }
    }

    let report = run_clean(cli, &path, mode);

    match cli.format {
        OutputFormat::Human => output::print_clean_report(&path, &report, mode),
        OutputFormat::Json => output::print_clean_json(&path, &report, mode),
        OutputFormat::Quiet => println!(
            "{}  {}  {}",
            report.files_deleted,
            report.dirs_deleted,
            format_size(report.bytes_freed)
        ),
    }

    Ok(())
}

fn run_clean(cli: &Cli, path: &Path, mode: CleanMode) -> cleaner::CleanReport {
    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);

    if cli.verbose {
        cleaner::clean(path, mode, &mut ConsoleObserver)
    } else if show_progress {
        let mut observer = ProgressObserver::new(mode);
        let report = cleaner::clean(path, mode, &mut observer);
        observer.finish();
        report
    } else {
        cleaner::clean(path, mode, &mut NullObserver)
    }
}

// ─── Quick ────────────────────────────────────────────────────────────────────

fn cmd_quick(cli: &Cli, store: &Store, dry_run: bool, yes: bool) -> Result<()> {
    let configured = store.load();

    // Enumerate the host once; classification reuses the snapshot
    let snapshot = SnapshotVolumes(HostVolumes.list_volume_roots());
    let eligible = volumes::eligible_roots(&snapshot);

    if configured.is_none() && eligible.is_empty() {
        println!();
        println!(
            "  {} No configured folder and no removable or marked volumes detected.",
            "ℹ️"
        );
        println!(
            "  {} Configure one with: {}",
            "💡",
            "dotsweep config set <DIR>".cyan()
        );
        println!();
        return Ok(());
    }

    let mode = if dry_run {
        CleanMode::DryRun
    } else {
        CleanMode::Delete
    };

    if mode == CleanMode::Delete && !yes {
        println!();
        println!("  {} Quick sweep targets:", "🧹");
        if let Some(ref path) = configured {
            println!("    {} {}", "•".dimmed(), format::format_path(path));
        }
        for root in &eligible {
            let tag = if root.removable { "removable" } else { "marked" };
            println!(
                "    {} {} {}",
                "•".dimmed(),
                root.path.display(),
                format!("({})", tag).dimmed()
            );
        }
        if !confirm("Remove macOS metadata from these targets")? {
            println!("  {} Cancelled", "✗".red());
            return Ok(());
        }
    }

    let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);
    let summary = if cli.verbose {
        cleaner::quick_clean(configured.as_deref(), &snapshot, mode, &mut ConsoleObserver)
    } else if show_progress {
        let mut observer = ProgressObserver::new(mode);
        let summary = cleaner::quick_clean(configured.as_deref(), &snapshot, mode, &mut observer);
        observer.finish();
        summary
    } else {
        cleaner::quick_clean(configured.as_deref(), &snapshot, mode, &mut NullObserver)
    };

    match cli.format {
        OutputFormat::Human => output::print_batch_summary(&summary, mode),
        OutputFormat::Json => output::print_batch_json(&summary, mode),
        OutputFormat::Quiet => println!(
            "{}  {}  {}",
            summary.files_deleted,
            summary.dirs_deleted,
            format_size(summary.bytes_freed)
        ),
    }

    Ok(())
}

// ─── Check ────────────────────────────────────────────────────────────────────

fn cmd_check(cli: &Cli, path: &Path) -> Result<()> {
    let found = markers::has_markers(path);

    match cli.format {
        OutputFormat::Human => output::print_check(path, found),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": path.display().to_string(),
                "has_markers": found,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Quiet => println!("{}", if found { "markers" } else { "clean" }),
    }

    Ok(())
}

// ─── Volumes ──────────────────────────────────────────────────────────────────

fn cmd_volumes(cli: &Cli) -> Result<()> {
    let statuses = volumes::survey(&HostVolumes);

    match cli.format {
        OutputFormat::Human => output::print_volumes(&statuses),
        OutputFormat::Json => output::print_volumes_json(&statuses),
        OutputFormat::Quiet => {
            for status in &statuses {
                println!(
                    "{}  {}  {}",
                    status.root.path.display(),
                    if status.root.removable {
                        "removable"
                    } else {
                        "fixed"
                    },
                    if status.eligible { "sweep" } else { "skip" }
                );
            }
        }
    }

    Ok(())
}

// ─── Config ───────────────────────────────────────────────────────────────────

fn cmd_config(store: &Store, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            match store.load() {
                Some(path) => println!(
                    "  {} Configured folder: {}",
                    "⚙️",
                    format::format_path(&path).cyan()
                ),
                None => println!("  {} No folder configured", "⚙️"),
            }
            println!(
                "  {} Config file: {}",
                "⚙️",
                store.file_path().display().to_string().dimmed()
            );
            Ok(())
        }
        ConfigAction::Set { path } => {
            if !path.is_dir() {
                return Err(SweepError::TargetMissing { path: path.clone() }.into());
            }
            let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            if store.save(&resolved) {
                println!(
                    "  {} Quick sweep folder set to {}",
                    "✓".green(),
                    format::format_path(&resolved).cyan()
                );
            } else {
                println!(
                    "  {} Could not write {}",
                    "⚠".yellow(),
                    store.file_path().display()
                );
            }
            Ok(())
        }
        ConfigAction::Clear => {
            if store.clear() {
                println!("  {} Configured folder cleared", "✓".green());
            } else {
                println!(
                    "  {} Could not write {}",
                    "⚠".yellow(),
                    store.file_path().display()
                );
            }
            Ok(())
        }
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn confirm(prompt: &str) -> Result<bool> {
    print!("\n  {} {}? [y/N] ", "❓", prompt);
    use std::io::Write;
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
