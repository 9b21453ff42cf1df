//! Konduto command line client
//!
//! Wraps the order client: results go to stdout as JSON, API errors to
//! stderr with exit code 2, anything else exits with 1.

mod cli;

use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use konduto_client::{
    ApiOutcome, KondutoConfig, OrderClient, OrderRequest, OrderStatusRequest,
};
use serde_json::Value;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_API_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("{:#}", e);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => report(&outcome),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so stdout only carries the JSON result.
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "konduto_client=info,konduto_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

async fn run(cli: Cli) -> Result<ApiOutcome<Value>> {
    let config = cli.apply(KondutoConfig::load()?);
    info!("Loaded configuration: {:?}", config);

    let client = OrderClient::from_config(&config)?;

    match cli.command {
        Command::Create { file } => {
            let order = read_order(&file)?;
            let outcome = client.create(&order).await?;
            Ok(outcome.try_map(serde_json::to_value)?)
        }
        Command::Status {
            order_id,
            status,
            comments,
        } => {
            let mut request = OrderStatusRequest::new(status)?;
            if let Some(comments) = comments {
                request = request.with_comments(comments);
            }
            Ok(client.change_status(&order_id, &request).await?)
        }
        Command::Load { order_id } => {
            let outcome = client.load(&order_id).await?;
            Ok(outcome.try_map(serde_json::to_value)?)
        }
    }
}

fn read_order(path: &Path) -> Result<OrderRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid order in {}", path.display()))
}

fn exit_status(outcome: &ApiOutcome<Value>) -> u8 {
    if outcome.is_success() {
        0
    } else {
        EXIT_API_ERROR
    }
}

fn report(outcome: &ApiOutcome<Value>) -> ExitCode {
    match outcome {
        ApiOutcome::Success(value) => println!("{}", pretty(value)),
        ApiOutcome::Failure(error) => {
            eprintln!("Konduto API error ({})", error.status_code);
            eprintln!("{}", pretty(&error.body));
        }
    }

    ExitCode::from(exit_status(outcome))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
