use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Typed errors for dotsweep operations.
/// `anyhow` handles presentation at the CLI top level; these keep the
/// module seams precise about what failed.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Clean target does not exist or is not a directory
    #[error("not a directory: {}", path.display())]
    TargetMissing { path: PathBuf },

    /// File system operation failed
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single deletion was skipped.
///
/// Per-item failures never abort a walk; they are classified here so the
/// failure taxonomy is testable instead of an opaque caught error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    PermissionDenied,
    NotFound,
    InUse,
    Other,
}

impl SkipReason {
    /// Classify an I/O failure from a delete attempt.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            std::io::ErrorKind::NotFound => SkipReason::NotFound,
            // EBUSY / ETXTBSY: something still has the entry open
            _ => match err.raw_os_error() {
                Some(16) | Some(26) => SkipReason::InUse,
                _ => SkipReason::Other,
            },
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::PermissionDenied => write!(f, "permission denied"),
            SkipReason::NotFound => write!(f, "not found"),
            SkipReason::InUse => write!(f, "in use"),
            SkipReason::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_classify_permission_denied() {
        let e = Error::new(ErrorKind::PermissionDenied, "nope");
        assert_eq!(SkipReason::from_io(&e), SkipReason::PermissionDenied);
    }

    #[test]
    fn test_classify_not_found() {
        let e = Error::new(ErrorKind::NotFound, "gone");
        assert_eq!(SkipReason::from_io(&e), SkipReason::NotFound);
    }

    #[test]
    fn test_classify_busy() {
        let e = Error::from_raw_os_error(16);
        assert_eq!(SkipReason::from_io(&e), SkipReason::InUse);
    }

    #[test]
    fn test_classify_fallback() {
        let e = Error::new(ErrorKind::InvalidData, "weird");
        assert_eq!(SkipReason::from_io(&e), SkipReason::Other);
    }
}
