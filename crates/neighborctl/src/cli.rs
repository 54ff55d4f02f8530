//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use netmon_rpc::Params;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neighborctl", version)]
#[command(about = "Look up link neighbors from monitoring alias items", long_about = None)]
pub struct Cli {
    /// Client configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API endpoint, overrides the configuration file
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interfaces linking to a neighbor, collapsed to aggregates
    Interfaces {
        /// Neighbor name or site code
        target: String,
        #[command(flatten)]
        filter: ItemFilter,
    },
    /// Interfaces linking to any site of the neighbor's site family
    Family {
        /// Neighbor name or site code
        target: String,
        #[command(flatten)]
        filter: ItemFilter,
    },
    /// Distinct neighbor site codes
    Sites {
        #[command(flatten)]
        filter: ItemFilter,
    },
    /// API version
    Version,
}

/// Item selection forwarded to `item.get`.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    /// Restrict to these host ids
    #[arg(long = "host-id")]
    pub host_ids: Vec<String>,

    /// Restrict to these application ids
    #[arg(long = "application-id")]
    pub application_ids: Vec<String>,
}

impl ItemFilter {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        if !self.host_ids.is_empty() {
            params.insert("hostids", self.host_ids.clone());
        }
        if !self.application_ids.is_empty() {
            params.insert("applicationids", self.application_ids.clone());
        }
        params
    }
}
