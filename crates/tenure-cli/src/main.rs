//! Tenure CLI
//!
//! Operator front end for tracking employee onboarding and offboarding.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tenure_core::{params::ListEmployees, SettlementPolicy, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        gratuity_days,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    if let Some(days) = gratuity_days {
        builder = builder.with_settlement_policy(SettlementPolicy {
            gratuity_days_per_year: days,
            ..SettlementPolicy::default()
        });
    }
    let tracker = builder
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Tenure started with {}", tracker.database_path().display());

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));
    match command {
        Some(Employee { command }) => cli.handle_employee_command(command).await,
        Some(Onboarding { command }) => cli.handle_onboarding_command(command).await,
        Some(Offboarding { command }) => cli.handle_offboarding_command(command).await,
        Some(Settlement { command }) => cli.handle_settlement_command(command).await,
        None => cli.list_employees(&ListEmployees::default()).await,
    }
}
