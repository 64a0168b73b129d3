use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Indoor wayfinding HTTP server
#[derive(Debug, Parser)]
#[command(name = "wayfinder-server", version, about)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `bind` from the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// JSON graph data file, overrides `graph_data_path`
    #[arg(long)]
    pub graph: Option<PathBuf>,
}

impl Cli {
    /// Config file values with command line overrides applied
    pub fn resolve(self) -> Result<ServerConfig, ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(graph) = self.graph {
            config.graph_data_path = Some(graph);
        }

        config.validate()?;
        Ok(config)
    }
}
