pub mod client;
pub mod instruction_table;
pub mod render;
pub mod resolver;
pub mod server;

pub use instruction_table::{DataFormatError, InstructionRecord, InstructionTable};

/// Configuration shared across handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Whether cursor-line changes push rendered fragments to the panel.
    pub panel_updates_enabled: bool,
    /// Whether to answer `textDocument/hover` for known mnemonics.
    pub instruction_hovers_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // Both surfaces are on by default; either can be switched off
            // via workspace settings.
            panel_updates_enabled: true,
            instruction_hovers_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Create a new builder for `ServerConfig`.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for `ServerConfig` with fluent API.
#[derive(Default)]
pub struct ServerConfigBuilder {
    panel_updates_enabled: Option<bool>,
    instruction_hovers_enabled: Option<bool>,
}

impl ServerConfigBuilder {
    /// Set whether cursor-line changes push rendered fragments to the panel.
    pub fn panel_updates_enabled(mut self, enabled: bool) -> Self {
        self.panel_updates_enabled = Some(enabled);
        self
    }

    /// Set whether to answer hovers for known mnemonics.
    pub fn instruction_hovers_enabled(mut self, enabled: bool) -> Self {
        self.instruction_hovers_enabled = Some(enabled);
        self
    }

    /// Build the `ServerConfig`, using defaults for values not set.
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            panel_updates_enabled: self.panel_updates_enabled.unwrap_or(true),
            instruction_hovers_enabled: self.instruction_hovers_enabled.unwrap_or(true),
        }
    }
}
