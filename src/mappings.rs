//! Version mapping tables for parent-managed ecosystems
//!
//! Spring Boot centrally manages the versions of several components it
//! ships. These tables map a Boot release line (matched by version prefix)
//! to the component version that line carries. Tables are ordered ascending
//! by Boot version; the first matching prefix wins.

/// Spring Boot release line → Spring Framework version
pub const SPRING_BOOT_TO_FRAMEWORK: &[(&str, &str)] = &[
    ("3.0", "6.0"),
    ("3.1", "6.0"),
    ("3.2", "6.1"),
    ("3.3", "6.1"),
    ("3.4", "6.2"),
    ("3.5", "6.3"),
];

/// Spring Boot release line → Liquibase version
pub const SPRING_BOOT_TO_LIQUIBASE: &[(&str, &str)] = &[
    ("3.0", "4.17.0"),
    ("3.1", "4.20.0"),
    ("3.2", "4.23.0"),
    ("3.3", "4.24.0"),
    ("3.4", "4.26.0"),
    ("3.5", "4.28.0"),
];

/// Fallback Spring Framework version when no Boot prefix matches and the
/// manifest carries no property override
pub const DEFAULT_SPRING_FRAMEWORK_VERSION: &str = "6.2.5";

/// Fallback Liquibase version when no Boot prefix matches
pub const DEFAULT_LIQUIBASE_VERSION: &str = "4.26.0";

/// Returns the mapped version for the first table entry whose key is a
/// prefix of `version`, in table order.
pub fn lookup_by_prefix(
    table: &[(&'static str, &'static str)],
    version: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(prefix, _)| version.starts_with(prefix))
        .map(|(_, mapped)| *mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_lookup_for_boot_line() {
        assert_eq!(
            lookup_by_prefix(SPRING_BOOT_TO_FRAMEWORK, "3.2.1"),
            Some("6.1")
        );
        assert_eq!(
            lookup_by_prefix(SPRING_BOOT_TO_FRAMEWORK, "3.5.0"),
            Some("6.3")
        );
    }

    #[test]
    fn test_liquibase_lookup_for_boot_line() {
        assert_eq!(
            lookup_by_prefix(SPRING_BOOT_TO_LIQUIBASE, "3.2.1"),
            Some("4.23.0")
        );
        assert_eq!(
            lookup_by_prefix(SPRING_BOOT_TO_LIQUIBASE, "3.0.13"),
            Some("4.17.0")
        );
    }

    #[test]
    fn test_lookup_no_match() {
        assert_eq!(lookup_by_prefix(SPRING_BOOT_TO_FRAMEWORK, "2.7.18"), None);
        assert_eq!(lookup_by_prefix(SPRING_BOOT_TO_LIQUIBASE, "4.0.0"), None);
    }

    #[test]
    fn test_lookup_first_prefix_wins() {
        // "3.1" sits before "3.5" in the table; a bare "3.1" input must not
        // fall through to a later line.
        let table: &[(&str, &str)] = &[("3.1", "first"), ("3.1.5", "second")];
        assert_eq!(lookup_by_prefix(table, "3.1.5"), Some("first"));
    }

    #[test]
    fn test_lookup_empty_table() {
        assert_eq!(lookup_by_prefix(&[], "3.2.1"), None);
    }

    #[test]
    fn test_tables_sorted_ascending() {
        for table in [SPRING_BOOT_TO_FRAMEWORK, SPRING_BOOT_TO_LIQUIBASE] {
            let keys: Vec<&str> = table.iter().map(|(k, _)| *k).collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            assert_eq!(keys, sorted);
        }
    }
}
