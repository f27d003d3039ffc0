pub mod content;
pub mod protocol;
pub mod tool;

pub use content::Content;
pub use protocol::result::{CallToolResult, ListToolsResult};
pub use tool::{Tool, ToolAnnotations};
