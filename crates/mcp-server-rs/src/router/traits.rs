use async_trait::async_trait;
use mcp_core_rs::{CallToolResult, Tool, protocol::capabilities::ServerCapabilities};
use mcp_error_rs::Result;
use serde_json::Value;

#[async_trait]
pub trait Router: Send + Sync {
    fn name(&self) -> String;

    fn instructions(&self) -> String;

    fn capabilities(&self) -> ServerCapabilities;

    fn list_tools(&self) -> Vec<Tool>;

    async fn call_tool(&self, tool_name: &str, arguments: Value) -> Result<CallToolResult>;
}
