//! MCP tool handlers implementation

use std::sync::Arc;

use cadence_core::{
    display::{CreateResult, DeleteResult, UpdateResult},
    params::{AddTask, TaskRef, UpdateTaskStatus, ViewDay, ViewWeek},
    Planner,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server.
///
/// Every handler holds the planner lock for its whole read-modify-write
/// cycle, so concurrent tool calls cannot overwrite each other's changes.
pub struct McpHandlers {
    planner: Arc<Mutex<Planner>>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Mutex<Planner>>) -> Self {
        Self { planner }
    }

    pub async fn show_week(&self, Parameters(params): Parameters<ViewWeek>) -> McpResult {
        debug!("show_week: {params:?}");

        let week = self
            .planner
            .lock()
            .await
            .week(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load week", &e))?;

        text_result(week.to_string())
    }

    pub async fn show_day(&self, Parameters(params): Parameters<ViewDay>) -> McpResult {
        debug!("show_day: {params:?}");

        let day = self
            .planner
            .lock()
            .await
            .day(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to load day", &e))?;

        text_result(day.to_string())
    }

    pub async fn add_task(&self, Parameters(params): Parameters<AddTask>) -> McpResult {
        debug!("add_task: {params:?}");

        let task = self
            .planner
            .lock()
            .await
            .add_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to add task", &e))?;

        text_result(CreateResult::new(task).to_string())
    }

    pub async fn delete_task(&self, Parameters(params): Parameters<TaskRef>) -> McpResult {
        debug!("delete_task: {params:?}");

        let deleted = self
            .planner
            .lock()
            .await
            .delete_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(
                    format!(
                        "Task with ID {} not found on {}",
                        params.task_id, params.weekday
                    ),
                    None,
                )
            })?;

        text_result(DeleteResult::new(deleted).to_string())
    }

    pub async fn update_task_status(
        &self,
        Parameters(params): Parameters<UpdateTaskStatus>,
    ) -> McpResult {
        debug!("update_task_status: {params:?}");

        let view = self
            .planner
            .lock()
            .await
            .update_task_status(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to update task status", &e))?;

        let change = format!("Status: {}", view.status.with_icon());
        text_result(UpdateResult::with_changes(view, vec![change]).to_string())
    }

    pub async fn show_study_plan(&self) -> McpResult {
        debug!("show_study_plan");

        let plan = self
            .planner
            .lock()
            .await
            .study_plan()
            .await
            .map_err(|e| to_mcp_error("Failed to load study plan", &e))?;

        match plan {
            Some(plan) => text_result(plan.to_string()),
            None => text_result("No study plan has been generated for this week."),
        }
    }
}
