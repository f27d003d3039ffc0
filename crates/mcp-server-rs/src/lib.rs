pub mod router;

pub use mcp_core_rs as core;
pub use mcp_error_rs as error;
