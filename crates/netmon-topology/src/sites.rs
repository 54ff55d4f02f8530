//! Neighbor site summary.
//!
//! Observed alias values start with the neighbor's site code
//! (`PRDNETRHP510-CORE1` -> `PRDNETRHP510`). The summary lists each site
//! once, in sorted order.

use crate::matcher::PRDNETRHP_TAG;

/// Width of the site code at the start of a neighbor name.
pub const SITE_CODE_WIDTH: usize = 12;

/// Site code every production-tagged neighbor is reported under.
pub const CANONICAL_PRDNETRHP_SITE: &str = "PRDNETRHP500";

/// Values containing one of these are not neighbor names.
pub const IGNORED_VALUE_MARKERS: [&str; 3] = ["Vers", "LS", "Portable"];

/// Value reported by links with no neighbor.
pub const EMPTY_NEIGHBOR_VALUE: &str = "0";

/// Items with no history report an empty value; it names no site.
fn is_ignored(value: &str) -> bool {
    value.is_empty()
        || value == EMPTY_NEIGHBOR_VALUE
        || IGNORED_VALUE_MARKERS.iter().any(|m| value.contains(m))
}

/// First [`SITE_CODE_WIDTH`] characters of `value`, or all of it if shorter.
pub fn site_code(value: &str) -> &str {
    match value.char_indices().nth(SITE_CODE_WIDTH) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Sort, filter, truncate, canonicalize and de-duplicate observed values.
///
/// A code is dropped when an already reported code contains it.
pub fn summarize_sites(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    let mut sites: Vec<String> = Vec::new();
    for value in values.iter().filter(|v| !is_ignored(v)) {
        let code = site_code(value);
        let code = if code.contains(PRDNETRHP_TAG) {
            CANONICAL_PRDNETRHP_SITE
        } else {
            code
        };
        if !sites.iter().any(|s| s.contains(code)) {
            sites.push(code.to_string());
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_site_code_truncation() {
        assert_eq!(site_code("ABCDEFGHI510-CORE1"), "ABCDEFGHI510");
        assert_eq!(site_code("SHORT"), "SHORT");
        assert_eq!(site_code("ÉÉÉÉÉÉÉÉÉÉÉÉÉ"), "ÉÉÉÉÉÉÉÉÉÉÉÉ");
    }

    #[test]
    fn test_summary_skips_and_dedups() {
        let values = strings(&["XYZSITE500CORE1", "0", "Vers2.1", "XYZSITE500CORE2"]);
        assert_eq!(summarize_sites(values), strings(&["XYZSITE500CO"]));
    }

    #[test]
    fn test_summary_skips_markers() {
        let values = strings(&["LS-ACCESS-0001", "Portable-17", "ABCDEFGHI510-X"]);
        assert_eq!(summarize_sites(values), strings(&["ABCDEFGHI510"]));
    }

    #[test]
    fn test_production_tag_canonicalized() {
        let values = strings(&["PRDNETRHP510-CORE1", "PRDNETRHP520-CORE2", "AAAASITE0001-X"]);
        assert_eq!(
            summarize_sites(values),
            strings(&["AAAASITE0001", "PRDNETRHP500"])
        );
    }

    #[test]
    fn test_sorted_output() {
        let values = strings(&["ZZZZSITE0001-A", "AAAASITE0002-B"]);
        assert_eq!(
            summarize_sites(values),
            strings(&["AAAASITE0002", "ZZZZSITE0001"])
        );
    }

    #[test]
    fn test_dedup_is_containment() {
        // "SITE-01" is contained in the earlier "AAAA-SITE-01"
        let values = strings(&["SITE-01", "AAAA-SITE-01-X"]);
        assert_eq!(summarize_sites(values), strings(&["AAAA-SITE-01"]));

        // a longer code is not contained in a shorter one
        let values = strings(&["ABCD-EDGE-01-X", "ABCD"]);
        assert_eq!(summarize_sites(values), strings(&["ABCD", "ABCD-EDGE-01"]));
    }

    #[test]
    fn test_empty() {
        assert!(summarize_sites(Vec::new()).is_empty());
        assert!(summarize_sites(strings(&["0", "Vers1"])).is_empty());
    }

    #[test]
    fn test_empty_value_skipped() {
        let values = strings(&["", "ABCDEFGHI510-X", ""]);
        let sites = summarize_sites(values);
        assert_eq!(sites, strings(&["ABCDEFGHI510"]));
        assert!(sites.iter().all(|s| !s.is_empty()));
    }
}
