//! Preferred modes of connected DRM connectors, read from sysfs.

use std::fs;
use std::path::Path;

pub(super) const SYSFS_DRM: &str = "/sys/class/drm";

pub(super) fn detect(root: &Path) -> Result<(u32, u32), String> {
    let entries =
        fs::read_dir(root).map_err(|e| format!("cannot read {}: {e}", root.display()))?;

    let mut connectors: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.join("modes").is_file())
        .collect();
    // read_dir order is unspecified; card0-eDP-1 should win over card1-HDMI-A-1.
    connectors.sort();

    for connector in connectors {
        let connected = fs::read_to_string(connector.join("status"))
            .is_ok_and(|status| status.trim() == "connected");
        if !connected {
            continue;
        }
        let Ok(modes) = fs::read_to_string(connector.join("modes")) else {
            continue;
        };
        // The kernel lists the preferred mode first.
        if let Some((w, h)) = modes.lines().find_map(parse_mode) {
            log::debug!("preferred mode {w}x{h} from {}", connector.display());
            return super::positive_size("DRM connector", w, h);
        }
    }

    Err(format!("no connected display under {}", root.display()))
}

/// Parse a DRM mode line such as `1920x1080` or `1920x1080i`.
fn parse_mode(line: &str) -> Option<(u32, u32)> {
    let (w, h) = line.trim().split_once('x')?;
    let digits = h.find(|c: char| !c.is_ascii_digit()).unwrap_or(h.len());
    Some((w.parse().ok()?, h[..digits].parse().ok()?))
}
