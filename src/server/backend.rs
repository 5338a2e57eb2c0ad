use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};
use tracing::debug;

use crate::client::{LineChangedParams, PanelClient};
use crate::instruction_table::InstructionTable;
use crate::{render, resolver, ServerConfig};

use super::cache::DocumentCache;

/// The language server backend.
///
/// Generic over the client so tests can run against a recording client
/// instead of a real LSP connection. The instruction table is loaded once in
/// `main` and shared read-only; the config and document cache are the only
/// mutable state.
#[derive(Debug, Clone)]
pub struct Backend<C = tower_lsp::Client> {
    pub(crate) client: C,
    pub(crate) table: Arc<InstructionTable>,
    pub(crate) documents: DocumentCache,
    pub(crate) config: Arc<RwLock<ServerConfig>>,
}

impl<C> Backend<C> {
    pub fn new(client: C, table: Arc<InstructionTable>) -> Self {
        Self {
            client,
            table,
            documents: DocumentCache::new(),
            config: Arc::new(RwLock::new(ServerConfig::default())),
        }
    }

    pub fn new_with_config(client: C, table: Arc<InstructionTable>, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            ..Self::new(client, table)
        }
    }

    pub async fn snapshot_config(&self) -> ServerConfig {
        self.config.read().await.clone()
    }

    pub async fn update_config(&self, cfg: ServerConfig) {
        let mut guard = self.config.write().await;
        *guard = cfg;
    }

    pub async fn handle_open(&self, uri: Url, version: i32, text: String) {
        self.documents.set_text(uri, version, text).await;
    }

    /// Apply a full-sync content change; the last change event carries the
    /// complete replacement text.
    pub async fn handle_change(
        &self,
        uri: Url,
        version: i32,
        changes: Vec<TextDocumentContentChangeEvent>,
    ) {
        if let Some(change) = changes.into_iter().last() {
            self.documents.set_text(uri, version, change.text).await;
        }
    }

    pub async fn handle_close(&self, uri: Url) {
        self.documents.remove(&uri).await;
    }
}

impl<C> Backend<C>
where
    C: PanelClient,
{
    /// Handler for the `cheatSheet/lineChanged` notification.
    pub async fn on_line_changed(&self, params: LineChangedParams) {
        self.refresh_panel(&params.text).await;
    }

    /// One resolve-then-render cycle for the given line.
    ///
    /// On a match the rendered fragment is pushed to the panel and returned;
    /// on no match nothing is sent, leaving the current panel content as-is.
    pub async fn refresh_panel(&self, line: &str) -> Option<String> {
        let Some(record) = resolver::resolve(&self.table, line) else {
            debug!("no instruction match for line: {line:?}");
            return None;
        };

        let html = render::render_panel(record);
        if self.snapshot_config().await.panel_updates_enabled {
            self.client.update_panel(html.clone()).await;
        } else {
            debug!("panel updates disabled; dropping fragment for {}", record.mnemonic);
        }
        Some(html)
    }
}
