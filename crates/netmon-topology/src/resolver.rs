//! NeighborResolver - entry points over one item query
//!
//! Each entry point issues exactly one `item.get` through the [`ItemQuery`]
//! source, validates the records, then works on them in memory. A query
//! failure is returned unchanged; a malformed record aborts the call with
//! no partial result.

use crate::collision::resolve_collisions;
use crate::error::Result;
use crate::item::{parse_items, MonitoredItem};
use crate::matcher::SiteCodeMatcher;
use crate::scanner::AliasScanner;
use crate::sites::summarize_sites;
use netmon_rpc::{ItemQuery, Params};
use tracing::{debug, instrument};

/// Resolves neighbor interfaces and sites from link-alias items.
pub struct NeighborResolver<Q> {
    query: Q,
    matcher: SiteCodeMatcher,
}

impl<Q: ItemQuery> NeighborResolver<Q> {
    /// Resolver with the standard site family table.
    pub fn new(query: Q) -> Self {
        Self::with_matcher(query, SiteCodeMatcher::default())
    }

    pub fn with_matcher(query: Q, matcher: SiteCodeMatcher) -> Self {
        Self { query, matcher }
    }

    pub fn matcher(&self) -> &SiteCodeMatcher {
        &self.matcher
    }

    async fn fetch(&self, params: Params) -> Result<Vec<MonitoredItem>> {
        let records = self.query.query_items(params).await?;
        let items = parse_items(&records)?;
        debug!(count = items.len(), "Validated item records");
        Ok(items)
    }

    /// Interfaces linking to `target`.
    ///
    /// An alias item matches when its observed value contains `target`, or
    /// when both carry the production tag. Matching interfaces then go
    /// through GigabitEthernet/Aggregation collision resolution.
    #[instrument(skip(self, params))]
    pub async fn resolve_neighbor_interfaces(
        &self,
        target: &str,
        params: Params,
    ) -> Result<Vec<String>> {
        let items = self.fetch(params).await?;
        let raw: Vec<String> = AliasScanner::candidates(&items)
            .filter(|c| !c.token.is_empty())
            .filter(|c| self.matcher.matches_direct(target, c.previous_value))
            .map(|c| c.token.to_string())
            .collect();
        debug!(raw = ?raw, "Matched alias candidates");

        let interfaces = resolve_collisions(raw);
        debug!(interfaces = ?interfaces, "Resolved neighbor interfaces");
        Ok(interfaces)
    }

    /// Interfaces linking to `target` or to any site of its family.
    ///
    /// No collision resolution; every match is reported in item order.
    #[instrument(skip(self, params))]
    pub async fn find_family_interfaces(
        &self,
        target: &str,
        params: Params,
    ) -> Result<Vec<String>> {
        let items = self.fetch(params).await?;
        let interfaces: Vec<String> = AliasScanner::candidates(&items)
            .filter(|c| !c.token.is_empty())
            .filter(|c| self.matcher.matches(target, c.previous_value))
            .map(|c| c.token.to_string())
            .collect();
        debug!(interfaces = ?interfaces, "Family interfaces");
        Ok(interfaces)
    }

    /// Distinct neighbor site codes seen on alias items.
    #[instrument(skip(self, params))]
    pub async fn summarize_neighbor_sites(&self, params: Params) -> Result<Vec<String>> {
        let items = self.fetch(params).await?;
        let values: Vec<String> = AliasScanner::candidates(&items)
            .map(|c| c.previous_value.to_string())
            .collect();
        let sites = summarize_sites(values);
        debug!(sites = ?sites, "Neighbor sites");
        Ok(sites)
    }
}
