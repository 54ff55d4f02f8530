//! Neighbor inference from link-alias monitoring items.
//!
//! Network devices are monitored with one `alias[<interface>]` item per
//! link, whose last observed value names the device on the other end. This
//! crate turns those items into neighbor interface lists and site summaries.
//!
//! - [`key`]: alias key normalization (`alias[Gi0/1]` -> `Gi0/1`)
//! - [`matcher`]: site-code matching with explicit family tables
//! - [`collision`]: GigabitEthernet / Aggregation collision folding
//! - [`scanner`]: alias item filtering
//! - [`sites`]: site-code summary
//! - [`NeighborResolver`]: the entry points, over one item query each
//!
//! # Example
//!
//! ```ignore
//! use netmon_rpc::{Api, Params};
//! use netmon_topology::NeighborResolver;
//!
//! let resolver = NeighborResolver::new(&api);
//! let params = Params::new().with("hostids", "10084");
//! let interfaces = resolver.resolve_neighbor_interfaces("PRDNETRHP510", params).await?;
//! ```

pub mod collision;
pub mod error;
pub mod item;
pub mod key;
pub mod matcher;
pub mod resolver;
pub mod scanner;
pub mod sites;

pub use collision::{resolve_collisions, CollisionState};
pub use error::{Result, TopologyError};
pub use item::{parse_items, MonitoredItem};
pub use key::normalize_key;
pub use matcher::{SiteCodeMatcher, SiteFamily, SiteFamilyTable};
pub use resolver::NeighborResolver;
pub use scanner::{AliasCandidate, AliasScanner};
pub use sites::summarize_sites;
