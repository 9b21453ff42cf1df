//! Command line definition

use clap::{Parser, Subcommand};
use konduto_client::{KondutoConfig, OrderStatus};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "konduto",
    about = "Send, update and inspect orders on the Konduto fraud-detection API",
    version
)]
pub struct Cli {
    /// Override the configured Konduto domain
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Override the configured private API key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit the order in a JSON file for analysis
    Create {
        /// Path to the order JSON
        file: PathBuf,
    },
    /// Move an order to a new status
    Status {
        order_id: String,
        /// approved, declined, not_authorized, canceled or fraud
        #[arg(value_parser = parse_status)]
        status: OrderStatus,
        #[arg(long)]
        comments: Option<String>,
    },
    /// Fetch an analyzed order
    Load { order_id: String },
}

impl Cli {
    /// Apply the command line overrides on top of the loaded configuration
    pub fn apply(&self, mut config: KondutoConfig) -> KondutoConfig {
        if let Some(domain) = &self.domain {
            config = config.with_domain(domain.clone());
        }
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key.clone());
        }
        config
    }
}

fn parse_status(raw: &str) -> Result<OrderStatus, String> {
    raw.parse::<OrderStatus>().map_err(|e| e.to_string())
}
