//! Alias item scanning.

use crate::item::MonitoredItem;
use crate::key::{is_excluded_alias, normalize_key};

/// One alias item reduced to its interface token and observed neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasCandidate<'a> {
    /// Normalized interface identifier from the key.
    pub token: &'a str,
    /// Observed value of the item.
    pub previous_value: &'a str,
}

/// Walks an item collection and yields alias candidates in item order.
///
/// Only keys containing `alias` are considered; `alias_admin` and
/// `alias_prod` keys are skipped before normalization.
pub struct AliasScanner;

impl AliasScanner {
    /// Alias candidates, in item order.
    pub fn candidates(items: &[MonitoredItem]) -> impl Iterator<Item = AliasCandidate<'_>> {
        items
            .iter()
            .filter(|item| item.is_alias() && !is_excluded_alias(&item.key))
            .map(|item| AliasCandidate {
                token: normalize_key(&item.key),
                previous_value: &item.previous_value,
            })
    }

    /// Raw candidate list: the normalized key of every accepted alias item.
    /// Empty tokens (`alias[]`) are dropped.
    pub fn scan(items: &[MonitoredItem]) -> Vec<String> {
        Self::candidates(items)
            .filter(|c| !c.token.is_empty())
            .map(|c| c.token.to_string())
            .collect()
    }
}
