use super::{VolumeProvider, VolumeRoot};

/// The real host enumerator. macOS reads `/Volumes` and asks `diskutil` for
/// removable-media flags; Linux reads `/proc/mounts` and the sysfs removable
/// bit. Anything that fails along the way degrades to "no volumes" or
/// "fixed" rather than an error.
pub struct HostVolumes;

impl VolumeProvider for HostVolumes {
    fn list_volume_roots(&self) -> Vec<VolumeRoot> {
        list_host_roots()
    }
}

// ─── macOS ────────────────────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
fn list_host_roots() -> Vec<VolumeRoot> {
    let entries = match std::fs::read_dir("/Volumes") {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("cannot list /Volumes: {}", e);
            return Vec::new();
        }
    };

    let mut roots = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let removable = diskutil_removable(&path);
        roots.push(VolumeRoot { path, removable });
    }
    roots
}

/// Ask `diskutil info -plist` whether the volume sits on removable or
/// ejectable media. Any failure reads as fixed.
#[cfg(target_os = "macos")]
fn diskutil_removable(path: &std::path::Path) -> bool {
    let output = match std::process::Command::new("diskutil")
        .args(["info", "-plist"])
        .arg(path)
        .output()
    {
        Ok(out) if out.status.success() => out,
        Ok(out) => {
            tracing::debug!("diskutil failed for {}: {}", path.display(), out.status);
            return false;
        }
        Err(e) => {
            tracing::debug!("diskutil not runnable: {}", e);
            return false;
        }
    };

    let info = match plist::Value::from_reader(std::io::Cursor::new(&output.stdout)) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("diskutil plist unreadable for {}: {}", path.display(), e);
            return false;
        }
    };

    let dict = match info.as_dictionary() {
        Some(d) => d,
        None => return false,
    };
    ["RemovableMedia", "Removable", "Ejectable"]
        .iter()
        .any(|key| dict.get(*key).and_then(plist::Value::as_boolean) == Some(true))
}

// ─── Linux ────────────────────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
fn list_host_roots() -> Vec<VolumeRoot> {
    let mounts = match std::fs::read_to_string("/proc/mounts") {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("cannot read /proc/mounts: {}", e);
            return Vec::new();
        }
    };

    parse_mounts(&mounts)
        .into_iter()
        .map(|(device, mount_point)| {
            let removable = sysfs_removable(&device);
            VolumeRoot {
                path: std::path::PathBuf::from(mount_point),
                removable,
            }
        })
        .collect()
}

/// Extract `(device, mount point)` pairs for user-facing mounts.
/// Only mounts under the conventional media roots are considered volumes;
/// everything else (/, /proc, /home bind mounts, ...) is none of our business.
#[cfg(target_os = "linux")]
fn parse_mounts(mounts: &str) -> Vec<(String, String)> {
    const MEDIA_ROOTS: &[&str] = &["/media/", "/run/media/", "/mnt/"];

    mounts
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount_point = decode_mount_escapes(fields.next()?);
            if MEDIA_ROOTS.iter().any(|root| mount_point.starts_with(root)) {
                Some((device.to_string(), mount_point))
            } else {
                None
            }
        })
        .collect()
}

/// `/proc/mounts` encodes whitespace in mount points as octal escapes.
#[cfg(target_os = "linux")]
fn decode_mount_escapes(s: &str) -> String {
    s.replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}

/// Look up the removable flag of the disk backing a partition device,
/// e.g. `/dev/sdb1` → `/sys/block/sdb/removable`.
#[cfg(target_os = "linux")]
fn sysfs_removable(device: &str) -> bool {
    let block = match device.strip_prefix("/dev/") {
        Some(b) => b,
        None => return false,
    };
    let disk = parent_disk_name(block);
    match std::fs::read_to_string(format!("/sys/block/{}/removable", disk)) {
        Ok(flag) => flag.trim() == "1",
        Err(_) => false,
    }
}

/// Reduce a partition block name to its whole-disk name:
/// `sdb1` → `sdb`, `nvme0n1p2` → `nvme0n1`, `mmcblk0p1` → `mmcblk0`.
#[cfg(target_os = "linux")]
fn parent_disk_name(block: &str) -> String {
    let trimmed = block.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.len() < block.len() && trimmed.ends_with('p') && trimmed.len() > 1 {
        let base = &trimmed[..trimmed.len() - 1];
        if base.ends_with(|c: char| c.is_ascii_digit()) {
            return base.to_string();
        }
    }
    trimmed.to_string()
}

// ─── Other hosts ──────────────────────────────────────────────────────────────

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn list_host_roots() -> Vec<VolumeRoot> {
    Vec::new()
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mounts_keeps_media_mounts_only() {
        let mounts = "\
/dev/nvme0n1p2 / ext4 rw,relatime 0 0
proc /proc proc rw 0 0
/dev/sdb1 /media/user/USB\\040STICK vfat rw 0 0
/dev/sdc1 /run/media/user/backup ext4 rw 0 0
tmpfs /tmp tmpfs rw 0 0
";
        let parsed = parse_mounts(mounts);
        assert_eq!(
            parsed,
            vec![
                ("/dev/sdb1".to_string(), "/media/user/USB STICK".to_string()),
                ("/dev/sdc1".to_string(), "/run/media/user/backup".to_string()),
            ]
        );
    }

    #[test]
    fn test_parent_disk_name() {
        assert_eq!(parent_disk_name("sdb1"), "sdb");
        assert_eq!(parent_disk_name("sdb"), "sdb");
        assert_eq!(parent_disk_name("nvme0n1p2"), "nvme0n1");
        assert_eq!(parent_disk_name("mmcblk0p1"), "mmcblk0");
    }

    #[test]
    fn test_decode_mount_escapes() {
        assert_eq!(decode_mount_escapes("/media/My\\040Disk"), "/media/My Disk");
        assert_eq!(decode_mount_escapes("/mnt/plain"), "/mnt/plain");
    }
}
