//! Test harness for integration testing against the bundled table.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tower_lsp::lsp_types::{
    DidOpenTextDocumentParams, Hover, HoverParams, Position, TextDocumentIdentifier,
    TextDocumentItem, TextDocumentPositionParams, Url,
};
use tower_lsp::LanguageServer;
use z80_cheatsheet_lsp::client::{LineChangedParams, PanelClient};
use z80_cheatsheet_lsp::server::Backend;
use z80_cheatsheet_lsp::InstructionTable;

/// A recording LSP client that captures panel refreshes and insert requests.
#[derive(Clone, Default)]
pub struct RecordingClient {
    panel: Arc<Mutex<Vec<String>>>,
    inserts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl PanelClient for RecordingClient {
    async fn update_panel(&self, html: String) {
        let mut guard = self.panel.lock().await;
        guard.push(html);
    }

    async fn insert_text(&self, text: String) {
        let mut guard = self.inserts.lock().await;
        guard.push(text);
    }
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all captured panel fragments, clearing the internal buffer.
    pub async fn take_panel_updates(&self) -> Vec<String> {
        let mut guard = self.panel.lock().await;
        guard.drain(..).collect()
    }

    /// Take all captured insert payloads, clearing the internal buffer.
    pub async fn take_inserts(&self) -> Vec<String> {
        let mut guard = self.inserts.lock().await;
        guard.drain(..).collect()
    }
}

/// Test harness that wraps a Backend with a RecordingClient and the bundled
/// instruction table.
pub struct TestHarness {
    pub backend: Backend<RecordingClient>,
    pub client: RecordingClient,
}

impl TestHarness {
    pub fn new() -> Self {
        let client = RecordingClient::new();
        let table = Arc::new(InstructionTable::bundled().expect("bundled table"));
        let backend = Backend::new(client.clone(), table);
        Self { backend, client }
    }

    /// Open a document with inline content, returning its URI.
    pub async fn open_inline(&self, name: &str, content: &str) -> Url {
        let uri = Url::parse(&format!("file:///tmp/{name}")).expect("test uri");
        self.backend
            .did_open(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri.clone(),
                    language_id: "z80".into(),
                    version: 1,
                    text: content.into(),
                },
            })
            .await;
        uri
    }

    /// Deliver a cursor-moved event carrying the given line text.
    pub async fn line_changed(&self, text: &str) {
        self.backend
            .on_line_changed(LineChangedParams { text: text.into() })
            .await;
    }

    /// Request hover at the given line (column 0).
    pub async fn hover(&self, uri: &Url, line: u32) -> Option<Hover> {
        self.backend
            .hover(HoverParams {
                text_document_position_params: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier { uri: uri.clone() },
                    position: Position { line, character: 0 },
                },
                work_done_progress_params: Default::default(),
            })
            .await
            .expect("hover request")
    }
}
