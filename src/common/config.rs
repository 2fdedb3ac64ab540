use serde_json::Value;
use std::path::{Path, PathBuf};

/// File name of the persisted configuration, kept beside the executable so
/// the tool stays self-contained on the drives it cleans.
pub const CONFIG_FILE_NAME: &str = "dotsweep.json";

/// The configuration store: a JSON document holding the one user-chosen
/// directory that `quick` sweeps in addition to detected volumes.
///
/// Schema on write is exactly `{"path": "<string>"}`. On read, a legacy
/// `{"paths": ["<string>", ...]}` document is also accepted (first element
/// only); that shape is never written back.
///
/// Config I/O never fails loudly: a missing, malformed, or unwritable file
/// degrades to "no configured path" rather than an error.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// A store backed by an explicit file. Used by `--config` and by tests.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    /// The default store, adjacent to the running executable. Falls back to
    /// the working directory when the executable path is unknown.
    pub fn default_location() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Store {
            path: dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Where this store reads and writes.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Load the configured directory, or `None` when unset.
    ///
    /// Any read or parse failure is swallowed: an unreadable config is the
    /// same as an absent one. When a string-valued `path` key is present it
    /// decides the result even if empty; the legacy `paths` list is only
    /// consulted when `path` is missing or not a string.
    pub fn load(&self) -> Option<PathBuf> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("config not readable at {}: {}", self.path.display(), e);
                return None;
            }
        };
        let doc: Value = match serde_json::from_str(&contents) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("config not valid JSON at {}: {}", self.path.display(), e);
                return None;
            }
        };

        if let Some(p) = doc.get("path").and_then(Value::as_str) {
            return if p.is_empty() {
                None
            } else {
                Some(PathBuf::from(p))
            };
        }

        doc.get("paths")
            .and_then(Value::as_array)
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Persist the configured directory, overwriting the whole file.
    /// Returns whether the write succeeded; failures are logged and absorbed.
    pub fn save(&self, target: &Path) -> bool {
        let doc = serde_json::json!({ "path": target.to_string_lossy() });
        let contents = match serde_json::to_string_pretty(&doc) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("config serialize failed: {}", e);
                return false;
            }
        };
        match std::fs::write(&self.path, contents + "\n") {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("config write failed at {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Forget the configured directory. Writes an empty `path`, the same
    /// document the original save path produced for a cleared field.
    pub fn clear(&self) -> bool {
        self.save(Path::new(""))
    }
}
