//! MCP server implementation for Cadence
//!
//! Exposes the weekly schedule and the study plan to AI assistants over the
//! Model Context Protocol. Tools return the same markdown as the CLI.

use std::sync::Arc;

use anyhow::Result;
use cadence_core::{
    params::{AddTask, TaskRef, UpdateTaskStatus, ViewDay, ViewWeek},
    Planner,
};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::McpResult;

const INSTRUCTIONS: &str = r#"Cadence is a weekly planner for students. It keeps a schedule of tasks per weekday and tracks each occurrence separately.

## Core Concepts
- **Tasks** belong to a weekday. Recurring tasks appear every week; one-off tasks only in the week they were added for.
- **Week offsets** are relative to the current week: 0 is this week, -1 last week, 1 next week.
- **Occurrences** of a task (a weekday in a given week) have their own status: pending, completed or failed. A pending task that has started today shows as in-progress.

## Workflow
1. Use `show_day` (defaults to today) or `show_week` to see what is planned
2. Add tasks with `add_task`; set `chain_to_previous` to start 5 minutes after the day's last task
3. Record outcomes with `update_task_status` (change: done, fail, undo or note)
4. Use `show_study_plan` to read the generated study plan for this week"#;

/// MCP server for Cadence
#[derive(Clone)]
pub struct CadenceMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CadenceMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "show_week",
        description = "Show the week overview: the date range and, for each weekday, how many tasks are scheduled, completed, failed and pending. week_offset is relative to the current week (0 = this week, -1 = last week)."
    )]
    async fn show_week(&self, params: Parameters<ViewWeek>) -> McpResult {
        self.handlers().show_week(params).await
    }

    #[tool(
        name = "show_day",
        description = "Show one day's tasks with their status, failure notes, which task is happening now and how long until upcoming tasks start. Omit weekday for today."
    )]
    async fn show_day(&self, params: Parameters<ViewDay>) -> McpResult {
        self.handlers().show_day(params).await
    }

    #[tool(
        name = "add_task",
        description = "Add a task to a weekday. Times are HH:MM (24-hour). end_time may be omitted for point events (same_as_start) and chained tasks (chain_to_previous, which starts 5 minutes after the last task of that day). Non-recurring tasks only appear in the week given by week_offset."
    )]
    async fn add_task(&self, params: Parameters<AddTask>) -> McpResult {
        self.handlers().add_task(params).await
    }

    #[tool(
        name = "delete_task",
        description = "Delete a task from a weekday by its ID. Removes every occurrence of the task."
    )]
    async fn delete_task(&self, params: Parameters<TaskRef>) -> McpResult {
        self.handlers().delete_task(params).await
    }

    #[tool(
        name = "update_task_status",
        description = "Change the status of one occurrence of a task. change is 'done' or 'fail' for a pending occurrence, 'undo' for a completed or failed one, and 'note' to replace the note of a failed one. note is optional for 'fail' and required for 'note'."
    )]
    async fn update_task_status(&self, params: Parameters<UpdateTaskStatus>) -> McpResult {
        self.handlers().update_task_status(params).await
    }

    #[tool(
        name = "show_study_plan",
        description = "Show this week's generated study plan: urgent deadlines, sessions per day, study hours per subject and tips."
    )]
    async fn show_study_plan(&self) -> McpResult {
        self.handlers().show_study_plan().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CadenceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cadence".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CadenceMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Cadence MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
