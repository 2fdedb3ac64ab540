use serde::Serialize;

use super::{VolumeProvider, VolumeRoot};
use crate::markers::has_markers;

/// A volume root with its classification.
///
/// Two-tier rule: a removable volume is always eligible (that is what the
/// tool exists for); a fixed volume is eligible only when Mac markers are
/// already visible at its root, so internal disks are never walked
/// speculatively.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeStatus {
    #[serde(flatten)]
    pub root: VolumeRoot,
    pub marked: bool,
    pub eligible: bool,
}

/// Classify every existing volume root the provider reports.
/// Result is ordered ascending by root path.
pub fn survey(provider: &dyn VolumeProvider) -> Vec<VolumeStatus> {
    let mut statuses: Vec<VolumeStatus> = provider
        .list_volume_roots()
        .into_iter()
        .filter(|root| root.path.is_dir())
        .map(|root| {
            let marked = has_markers(&root.path);
            let eligible = root.removable || marked;
            VolumeStatus {
                root,
                marked,
                eligible,
            }
        })
        .collect();
    statuses.sort_by(|a, b| a.root.path.cmp(&b.root.path));
    statuses
}

/// The volume roots worth sweeping, per the two-tier rule.
pub fn eligible_roots(provider: &dyn VolumeProvider) -> Vec<VolumeRoot> {
    survey(provider)
        .into_iter()
        .filter(|status| status.eligible)
        .map(|status| status.root)
        .collect()
}
