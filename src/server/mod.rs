//! LSP server implementation for the Z80 cheat sheet.
//!
//! This module wires together the backend, document cache, and LSP handlers.

mod backend;
mod cache;
mod config;
mod lsp;


pub use backend::Backend;
pub use cache::DocumentCache;
pub use config::{extract_hovers_enabled, extract_panel_enabled};
pub use lsp::CMD_INSERT_SNIPPET;
