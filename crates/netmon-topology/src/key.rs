//! Link-alias key normalization.
//!
//! Alias items carry the interface they describe inside their key:
//! `alias[GigabitEthernet0/1]`. The `alias_admin[...]` and `alias_prod[...]`
//! variants describe the same interfaces for other purposes and are never
//! used as candidates.

/// Substring marking a link-alias key.
pub const ALIAS_MARKER: &str = "alias";

/// Alias variants that are never turned into candidates.
pub const EXCLUDED_ALIAS_MARKERS: [&str; 2] = ["alias_admin", "alias_prod"];

/// Recognized key prefixes, in priority order.
pub const ALIAS_PREFIXES: [&str; 3] = ["alias[", "alias_admin[", "alias_prod["];

/// Closing bracket of an alias key.
pub const ALIAS_SUFFIX: &str = "]";

/// Whether `key` belongs to an excluded alias variant.
pub fn is_excluded_alias(key: &str) -> bool {
    EXCLUDED_ALIAS_MARKERS.iter().any(|m| key.contains(m))
}

/// Strip the first matching alias prefix and a trailing `]`.
///
/// Keys without the markers come back unchanged, so normalizing an already
/// bare token is a no-op.
pub fn normalize_key(key: &str) -> &str {
    let bare = ALIAS_PREFIXES
        .iter()
        .find_map(|prefix| key.strip_prefix(prefix))
        .unwrap_or(key);
    bare.strip_suffix(ALIAS_SUFFIX).unwrap_or(bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_each_prefix() {
        assert_eq!(normalize_key("alias[GigabitEthernet0/1]"), "GigabitEthernet0/1");
        assert_eq!(normalize_key("alias_admin[Gi0/2]"), "Gi0/2");
        assert_eq!(normalize_key("alias_prod[Aggregation1]"), "Aggregation1");
    }

    #[test]
    fn test_normalize_is_idempotent_on_bare_tokens() {
        for token in ["GigabitEthernet0/1", "Aggregation1", "", "Gi0/1.100"] {
            assert_eq!(normalize_key(token), token);
            assert_eq!(normalize_key(normalize_key(token)), normalize_key(token));
        }
    }

    #[test]
    fn test_only_first_prefix_removed() {
        assert_eq!(normalize_key("alias[alias_prod[x]]"), "alias_prod[x]");
    }

    #[test]
    fn test_suffix_without_prefix() {
        assert_eq!(normalize_key("ifAlias[Gi0/1]"), "ifAlias[Gi0/1");
        assert_eq!(normalize_key("alias[]"), "");
    }

    #[test]
    fn test_excluded_variants() {
        assert!(is_excluded_alias("alias_admin[Gi0/1]"));
        assert!(is_excluded_alias("alias_prod[Gi0/1]"));
        assert!(!is_excluded_alias("alias[Gi0/1]"));
    }
}
