//! neighborctl
//!
//! Logs in to the monitoring API, runs one neighbor lookup and prints the
//! result.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use netmon_rpc::{Api, ClientConfig};
use netmon_topology::NeighborResolver;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(&cli)?;
    let mut api = Api::new(&config).context("Failed to create API client")?;

    if cli.command == Command::Version {
        println!("{}", api.version().await.context("apiinfo.version failed")?);
        return Ok(());
    }

    if let Some((user, password)) = config.server.credentials() {
        api.login(user, password)
            .await
            .with_context(|| format!("Login to {} failed", config.server.url))?;
    }

    let results = lookup(&api, &cli.command).await?;
    info!(count = results.len(), "Lookup complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for line in &results {
            println!("{}", line);
        }
    }
    Ok(())
}

async fn lookup(api: &Api, command: &Command) -> Result<Vec<String>> {
    let resolver = NeighborResolver::new(api);
    let results = match command {
        Command::Interfaces { target, filter } => {
            resolver
                .resolve_neighbor_interfaces(target, filter.to_params())
                .await?
        }
        Command::Family { target, filter } => {
            resolver
                .find_family_interfaces(target, filter.to_params())
                .await?
        }
        Command::Sites { filter } => resolver.summarize_neighbor_sites(filter.to_params()).await?,
        Command::Version => Vec::new(),
    };
    Ok(results)
}

/// Initialize structured logging; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set logger")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ClientConfig::default(),
    };
    config.apply_env_overrides()?;
    if let Some(url) = &cli.url {
        config.server.url = url.clone();
        config.validate()?;
    }
    debug!(url = %config.server.url, "Loaded client configuration");
    Ok(config)
}
