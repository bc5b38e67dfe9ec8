// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! billcast - posts this month's AWS charges per service to Slack.
//!
//! This is the binary entry point, meant to be started by an external
//! scheduler once per report.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use billcast::{dry_run, init_tracing, invoke};
use billcast_config::BillcastConfig;
use billcast_core::{BillcastError, CostSource};
use billcast_cost::CostExplorerSource;
use billcast_slack::SlackWebhook;
use chrono::Utc;
use clap::Parser;
use tracing::error;

/// billcast - posts this month's AWS charges per service to Slack.
#[derive(Parser, Debug)]
#[command(name = "billcast", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the message JSON to stdout instead of posting it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => billcast_config::load_and_validate_path(path),
        None => billcast_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            billcast_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level, true);

    let source = CostExplorerSource::from_config(&config.aws).await;
    let result = run(&cli, &config, &source, &mut std::io::stdout()).await;
    if let Err(e) = &result {
        error!(error = %e, "billing report failed");
        eprintln!("billcast: {e}");
    }
    ExitCode::from(exit_status(&result))
}

async fn run(
    cli: &Cli,
    config: &BillcastConfig,
    source: &dyn CostSource,
    out: &mut (dyn Write + Send),
) -> Result<(), BillcastError> {
    if cli.dry_run {
        dry_run(config, source, out, Utc::now()).await?;
        return Ok(());
    }

    // Resolve the sink before querying so a missing webhook fails without an API call.
    let sink = SlackWebhook::from_config(&config.slack)?;
    invoke(config, source, &sink, Utc::now()).await?;
    Ok(())
}

fn exit_status(result: &Result<(), BillcastError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
