//! The fixed set of names macOS scatters across non-Mac volumes.
//!
//! Finder and Spotlight create these when a Mac browses a USB stick, SD card,
//! or network share. None of them carry user data once the volume leaves the
//! Mac, which is what makes an exact-name allow-list safe to delete against.

/// File names that are always macOS metadata.
pub const JUNK_FILES: &[&str] = &[".DS_Store", ".apdisk"];

/// Folder names that are always macOS metadata. Matched folders are removed
/// wholesale, contents and all.
pub const JUNK_DIRS: &[&str] = &[
    ".fseventsd",
    ".Spotlight-V100",
    ".Trashes",
    ".TemporaryItems",
    ".DocumentRevisions-V1",
    ".AppleDouble",
];

/// AppleDouble resource-fork prefix. Every `._<name>` file shadows a real
/// `<name>` entry; only the shadow is junk.
pub const RESOURCE_FORK_PREFIX: &str = "._";

/// True if a file with this name is macOS metadata: either an exact catalog
/// match or a `._` resource fork. The prefix must be at the start; a name
/// like `foo._bar.txt` is a real file.
pub fn is_junk_file(name: &str) -> bool {
    JUNK_FILES.contains(&name) || name.starts_with(RESOURCE_FORK_PREFIX)
}

/// True if a directory with this name is macOS metadata. Exact matches only;
/// the prefix rule applies to files, never folders.
pub fn is_junk_dir(name: &str) -> bool {
    JUNK_DIRS.contains(&name)
}
