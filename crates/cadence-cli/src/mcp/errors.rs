//! Error handling utilities for MCP server

use cadence_core::CadenceError;
use rmcp::ErrorData;

/// Converts a planner error into an MCP error.
///
/// Errors caused by the request itself map to invalid parameters; everything
/// else is internal.
pub fn to_mcp_error(message: &str, error: &CadenceError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
