use async_trait::async_trait;
use mcp_core_rs::{CallToolResult, Content, ListToolsResult};
use serde_json::Value;

use crate::router::traits::Router;

/// Request-level handlers shared by every [`Router`].
///
/// Tool failures are reported inside the result with `isError` set, so a bad
/// argument never tears down the session.
#[async_trait]
pub trait RouterExt: Router {
    fn handle_tools_list(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.list_tools(),
            next_cursor: None,
        }
    }

    async fn handle_tools_call(&self, tool_name: &str, arguments: Value) -> CallToolResult {
        tracing::debug!(router = %self.name(), tool = %tool_name, "Calling tool");

        match self.call_tool(tool_name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                let error_msg = e.to_string();
                tracing::error!(tool = %tool_name, error = %error_msg, "Tool call failed");
                CallToolResult {
                    content: vec![Content::text(error_msg)],
                    structured_content: None,
                    is_error: Some(true),
                }
            }
        }
    }
}

impl<R: Router + ?Sized> RouterExt for R {}
