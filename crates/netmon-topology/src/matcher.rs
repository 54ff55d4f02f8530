//! Site-code matching between a target neighbor name and observed values.
//!
//! Neighbor names embed a numeric site code (`...510...`). Sites sharing a
//! family (510/511/512) are interchangeable as link endpoints, and every
//! name tagged `PRDNETRHP` belongs to one production family.
//!
//! Rules, first hit wins:
//!
//! 1. the value contains the target verbatim;
//! 2. both target and value carry the `PRDNETRHP` tag;
//! 3. (full matching only) the first family whose trigger code appears in
//!    the target, with the value containing any member code of that family.

use crate::error::{Result, TopologyError};
use std::collections::HashSet;

/// Tag shared by all production-network neighbor names.
pub const PRDNETRHP_TAG: &str = "PRDNETRHP";

/// A group of interchangeable site codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFamily {
    /// Code that selects this family when found in the target.
    pub trigger: String,
    /// Codes accepted in the observed value.
    pub members: Vec<String>,
}

impl SiteFamily {
    pub fn new<I, S>(trigger: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            trigger: trigger.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `value` contains any member code.
    pub fn admits(&self, value: &str) -> bool {
        self.members.iter().any(|m| value.contains(m.as_str()))
    }
}

/// Ordered family table; dispatch takes the first family whose trigger is
/// found in the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFamilyTable {
    families: Vec<SiteFamily>,
}

impl SiteFamilyTable {
    /// Build a table, rejecting empty or duplicated triggers and families
    /// without members. A duplicated trigger would leave the later family
    /// unreachable.
    pub fn new(families: Vec<SiteFamily>) -> Result<Self> {
        let mut seen = HashSet::new();
        for family in &families {
            if family.trigger.is_empty() {
                return Err(TopologyError::InvalidFamilyTable(
                    "empty trigger code".to_string(),
                ));
            }
            if family.members.is_empty() || family.members.iter().any(String::is_empty) {
                return Err(TopologyError::InvalidFamilyTable(format!(
                    "family '{}' has an empty member list or member code",
                    family.trigger
                )));
            }
            if !seen.insert(family.trigger.as_str()) {
                return Err(TopologyError::InvalidFamilyTable(format!(
                    "trigger '{}' appears more than once; later family is unreachable",
                    family.trigger
                )));
            }
        }
        Ok(Self { families })
    }

    /// 520, 510 and 500 site families, then the production tag.
    pub fn standard() -> Self {
        Self {
            families: vec![
                SiteFamily::new("520", ["520", "521", "522"]),
                SiteFamily::new("510", ["510", "511", "512"]),
                SiteFamily::new("500", ["500", "501", "502"]),
                SiteFamily::new(PRDNETRHP_TAG, [PRDNETRHP_TAG]),
            ],
        }
    }

    /// The family selected by `target`, if any.
    pub fn family_for(&self, target: &str) -> Option<&SiteFamily> {
        self.families
            .iter()
            .find(|f| target.contains(f.trigger.as_str()))
    }

    pub fn families(&self) -> &[SiteFamily] {
        &self.families
    }
}

impl Default for SiteFamilyTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Decides whether an observed value names the target neighbor.
#[derive(Debug, Clone, Default)]
pub struct SiteCodeMatcher {
    table: SiteFamilyTable,
}

impl SiteCodeMatcher {
    pub fn new(table: SiteFamilyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SiteFamilyTable {
        &self.table
    }

    /// Rules 1 and 2: verbatim containment or shared production tag.
    pub fn matches_direct(&self, target: &str, value: &str) -> bool {
        value.contains(target) || (target.contains(PRDNETRHP_TAG) && value.contains(PRDNETRHP_TAG))
    }

    /// All rules, including site-family equivalence.
    pub fn matches(&self, target: &str, value: &str) -> bool {
        if self.matches_direct(target, value) {
            return true;
        }
        self.table
            .family_for(target)
            .is_some_and(|family| family.admits(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let m = SiteCodeMatcher::default();
        assert!(m.matches_direct("SITEA", "PRDNETRHP-SITEA"));
        assert!(!m.matches_direct("SITEB", "CORE-SITEA"));
    }

    #[test]
    fn test_tag_equivalence() {
        let m = SiteCodeMatcher::default();
        assert!(m.matches_direct("PRDNETRHP-A", "PRDNETRHP-B"));
        assert!(m.matches("PRDNETRHP-A", "PRDNETRHP-B"));
        assert!(!m.matches_direct("PRDNETRHP-A", "CORE-B"));
    }

    #[test]
    fn test_family_match_only_in_full_mode() {
        let m = SiteCodeMatcher::default();
        assert!(!m.matches_direct("XYZ510CORE", "ABC512EDGE"));
        assert!(m.matches("XYZ510CORE", "ABC512EDGE"));
        assert!(!m.matches("XYZ510CORE", "ABC520EDGE"));
    }

    #[test]
    fn test_500_family_reachable() {
        let m = SiteCodeMatcher::default();
        assert!(m.matches("XYZ500CORE", "ABC502EDGE"));
        assert!(!m.matches("XYZ500CORE", "ABC510EDGE"));
    }

    #[test]
    fn test_first_trigger_wins() {
        let m = SiteCodeMatcher::default();
        // 520 is checked before 510
        assert!(m.matches("X520-510", "Y521"));
        assert!(!m.matches("X520-510", "Y511"));
    }

    #[test]
    fn test_no_family() {
        let m = SiteCodeMatcher::default();
        assert!(!m.matches("XYZ999CORE", "ABC999EDGE"));
        assert!(m.matches("XYZ999CORE", "to XYZ999CORE"));
    }

    #[test]
    fn test_table_rejects_duplicate_trigger() {
        let err = SiteFamilyTable::new(vec![
            SiteFamily::new("520", ["520", "521", "522"]),
            SiteFamily::new("520", ["500", "501", "502"]),
        ])
        .unwrap_err();
        assert!(matches!(err, TopologyError::InvalidFamilyTable(_)));
    }

    #[test]
    fn test_table_rejects_empty_codes() {
        assert!(SiteFamilyTable::new(vec![SiteFamily::new("", ["1"])]).is_err());
        assert!(SiteFamilyTable::new(vec![SiteFamily::new("7", Vec::<String>::new())]).is_err());
    }

    #[test]
    fn test_standard_table_validates() {
        let standard = SiteFamilyTable::standard();
        let rebuilt = SiteFamilyTable::new(standard.families().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
    }
}
