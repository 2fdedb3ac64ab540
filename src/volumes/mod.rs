pub mod classifier;
pub mod platform;

use serde::Serialize;
use std::path::PathBuf;

/// The root of a mounted volume, as reported by the host.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeRoot {
    pub path: PathBuf,
    pub removable: bool,
}

/// Host capability for enumerating mounted volumes.
///
/// The inclusion logic in [`classifier`] is portable; only implementations of
/// this trait touch platform specifics, so tests drive the classifier with
/// fake volume lists.
pub trait VolumeProvider {
    fn list_volume_roots(&self) -> Vec<VolumeRoot>;
}

/// A fixed, pre-enumerated volume list. Lets a caller enumerate the host
/// once (enumeration may shell out per volume) and reuse the snapshot.
pub struct SnapshotVolumes(pub Vec<VolumeRoot>);

impl VolumeProvider for SnapshotVolumes {
    fn list_volume_roots(&self) -> Vec<VolumeRoot> {
        self.0.clone()
    }
}

pub use classifier::{eligible_roots, survey, VolumeStatus};
pub use platform::HostVolumes;
