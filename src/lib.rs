//! # dotsweep
//!
//! Sweep macOS metadata litter off folders and removable drives.
//!
//! macOS leaves hidden breadcrumbs on every non-Mac volume it touches:
//! `.DS_Store`, `._*` resource forks, `.Spotlight-V100`, `.Trashes`,
//! `.fseventsd` and friends. dotsweep finds and removes them:
//!
//! - **Exact-name allow-list**: only cataloged marker names are ever deleted
//! - **Volume-aware**: removable drives always qualify; internal disks only
//!   when markers are already visible at their root
//! - **Never aborts**: per-item failures are classified and reported, the
//!   sweep continues
//! - **Dry-run and confirmation** before anything is removed
//! - **CLI as Unix Citizen**: JSON output, pipe-friendly, cron-schedulable

pub mod cli;
pub mod cleaner;
pub mod common;
pub mod markers;
pub mod volumes;
