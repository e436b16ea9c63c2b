//! Cadence CLI Application
//!
//! Command-line interface for the cadence weekly planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{params::ViewDay, PlannerBuilder};
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use mcp::{run_stdio_server, CadenceMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        now,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_fixed_time(now)
        .build()
        .await
        .context("Failed to initialize planner")?;

    // A pinned clock only previews other dates and must not move the stored week
    if now.is_some() {
        debug!("Clock pinned, skipping week rollover check");
    } else if planner
        .check_week_rollover()
        .await
        .context("Failed to check for a new week")?
    {
        info!("New week started, cleared last week's study plan");
    }

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cadence started");

    match command {
        Some(Week(args)) => Cli::new(planner, renderer).show_week(&args.into()).await,
        Some(Day(args)) => Cli::new(planner, renderer).show_day(&args.into()).await,
        Some(Task { command }) => {
            Cli::new(planner, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Key { command }) => {
            Cli::new(planner, renderer)
                .handle_key_command(command)
                .await
        }
        Some(Watch(args)) => Cli::new(planner, renderer).watch(args).await,
        Some(Serve) => {
            info!("Starting Cadence MCP server");
            run_stdio_server(CadenceMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(planner, renderer)
                .show_day(&ViewDay::default())
                .await
        }
    }
}
