//! Version classification engine
//!
//! Decides the report bucket for each resolved dependency. Version-parse
//! failures never escape this module; every comparison degrades to plain
//! string (in)equality when a side does not parse.

mod version;

pub use version::parse_lenient;

use crate::domain::{ClassificationResult, Resolution, ResolvedDependency};

/// npm-style range markers stripped before comparison. At most one leading
/// marker is removed.
const RANGE_MARKERS: [char; 3] = ['^', '~', '>'];

/// Classify one resolved dependency. `None` means the dependency receives
/// no bucket at all: it resolved against an empty supported list.
pub fn classify(dep: &ResolvedDependency) -> Option<ClassificationResult> {
    match &dep.resolution {
        Resolution::Unchecked { used } => Some(ClassificationResult::unchecked(&dep.name, used)),
        Resolution::Single {
            used,
            latest_supported,
        } => Some(classify_single(&dep.name, used, latest_supported.as_deref())),
        Resolution::List { used, supported } => classify_list(&dep.name, used, supported),
    }
}

/// Classify every dependency of a manifest, dropping no-bucket entries
pub fn classify_all(deps: &[ResolvedDependency]) -> Vec<ClassificationResult> {
    deps.iter().filter_map(classify).collect()
}

fn classify_single(name: &str, used: &str, latest: Option<&str>) -> ClassificationResult {
    let Some(latest) = latest else {
        // The product has no supported release left; nothing the declared
        // version could satisfy.
        return ClassificationResult::end_of_life(name, used, None);
    };

    let stripped = strip_range_marker(used);
    let outdated = match (parse_lenient(stripped), parse_lenient(latest)) {
        (Some(declared), Some(supported)) => declared < supported,
        // String fallback compares the raw declared version, marker included.
        _ => used != latest,
    };

    if outdated {
        ClassificationResult::end_of_life(name, used, Some(latest.to_string()))
    } else {
        ClassificationResult::up_to_date(name, used)
    }
}

fn classify_list(name: &str, used: &str, supported: &[String]) -> Option<ClassificationResult> {
    if supported.is_empty() {
        return None;
    }

    let is_supported = match parse_lenient(used) {
        Some(declared) => {
            // Scan in dataset order: the first entry that parses and sits at
            // or below the declared version proves support. A parse failure
            // reached before that point drops the whole comparison to the
            // literal-membership fallback.
            let mut verdict = None;
            for entry in supported {
                match parse_lenient(entry) {
                    Some(version) if version <= declared => {
                        verdict = Some(true);
                        break;
                    }
                    Some(_) => {}
                    None => {
                        verdict = Some(is_member(used, supported));
                        break;
                    }
                }
            }
            verdict.unwrap_or(false)
        }
        None => is_member(used, supported),
    };

    Some(if is_supported {
        ClassificationResult::up_to_date(name, used)
    } else {
        // Required version is the first list entry, dataset order.
        ClassificationResult::end_of_life(name, used, Some(supported[0].clone()))
    })
}

fn is_member(used: &str, supported: &[String]) -> bool {
    supported.iter().any(|entry| entry == used)
}

fn strip_range_marker(version: &str) -> &str {
    version.strip_prefix(RANGE_MARKERS).unwrap_or(version)
}
