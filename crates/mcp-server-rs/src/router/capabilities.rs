use crate::core::protocol::capabilities::{ServerCapabilities, ToolsCapability};

/// Assembles the [`ServerCapabilities`] a router reports.
#[derive(Debug, Default)]
pub struct CapabilitiesBuilder {
    tools: Option<ToolsCapability>,
}

impl CapabilitiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise tools; `list_changed` tells clients whether the list can change at runtime.
    pub fn with_tools(mut self, list_changed: bool) -> Self {
        self.tools = Some(ToolsCapability {
            list_changed: Some(list_changed),
        });
        self
    }

    pub fn build(self) -> ServerCapabilities {
        ServerCapabilities { tools: self.tools }
    }
}
