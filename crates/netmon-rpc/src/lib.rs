//! Client for the network monitoring platform's JSON-RPC API.
//!
//! - [`Api`]: session-holding client (`user.login`, `apiinfo.version`,
//!   raw `call` / `call_with_error`)
//! - [`item`], [`graph`], [`screen`]: typed wrappers over the `*.get`,
//!   `item.create` and `item.delete` methods
//! - [`ItemQuery`]: the item source the topology resolvers consume
//! - [`ClientConfig`]: TOML configuration with environment overrides
//!
//! # Example
//!
//! ```ignore
//! use netmon_rpc::{Api, ClientConfig, Params};
//!
//! let config = ClientConfig::from_file("/etc/netmon/client.toml")?;
//! let mut api = Api::new(&config)?;
//! api.login("api", "secret").await?;
//! let items = api.items_get(Params::new().with("hostids", "10084")).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod graph;
pub mod item;
pub mod params;
mod record;
pub mod screen;

pub use client::{Api, ErrorObject, Response};
pub use config::{ClientConfig, ServerConfig};
pub use error::{Result, RpcError};
pub use graph::{Graph, GraphItem};
pub use item::{items_by_key, DataType, DeltaType, Item, ItemQuery, ItemType, Items, ValueType};
pub use params::Params;
