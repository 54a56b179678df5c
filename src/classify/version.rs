//! Lenient semantic-version parsing
//!
//! Release names in the dataset are frequently truncated ("6.1", "17"), so
//! the comparator pads missing segments with zero instead of rejecting
//! them. Anything outside `major[.minor[.patch]][-prerelease]` stays
//! unparsed; callers fall back to plain string comparison.

use regex::Regex;
use semver::{Prerelease, Version};
use std::sync::LazyLock;

// Up to three dotted numeric segments with an optional pre-release suffix:
// 1, 1.2, 1.2.3, 1.2.3-SNAPSHOT, v1.2.3-rc.1
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$")
        .unwrap()
});

/// Parse a version string leniently, padding absent minor/patch segments
/// with zero. Returns `None` for anything the regex rejects, for numeric
/// overflow and for invalid pre-release identifiers.
pub fn parse_lenient(input: &str) -> Option<Version> {
    let caps = VERSION_RE.captures(input.trim())?;

    let segment = |index: usize| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let mut version = Version::new(segment(1)?, segment(2)?, segment(3)?);
    if let Some(pre) = caps.get(4) {
        version.pre = Prerelease::new(pre.as_str()).ok()?;
    }
    Some(version)
}
