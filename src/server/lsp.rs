use tower_lsp::{
    jsonrpc::Result,
    lsp_types::{
        ExecuteCommandOptions, ExecuteCommandParams, Hover, HoverContents, HoverParams,
        HoverProviderCapability, InitializeParams, InitializeResult, InitializedParams,
        MarkupContent, MarkupKind, ServerCapabilities, TextDocumentSyncCapability,
        TextDocumentSyncKind,
    },
    LanguageServer,
};
use tracing::{debug, info};

use crate::client::PanelClient;
use crate::{render, resolver};

use super::backend::Backend;
use super::config::{extract_hovers_enabled, extract_panel_enabled};

/// Command relaying a literal snippet back to the editor for insertion.
pub const CMD_INSERT_SNIPPET: &str = "z80CheatSheet.insertSnippet";

#[tower_lsp::async_trait]
impl<C> LanguageServer for Backend<C>
where
    C: PanelClient,
{
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![CMD_INSERT_SNIPPET.to_string()],
                work_done_progress_options: Default::default(),
            }),
            ..Default::default()
        };

        Ok(InitializeResult {
            capabilities,
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("Z80 cheat sheet LSP initialized ({} instructions)", self.table.len());
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_change_configuration(
        &self,
        params: tower_lsp::lsp_types::DidChangeConfigurationParams,
    ) {
        let mut cfg = self.config.write().await;
        if let Some(enabled) = extract_panel_enabled(&params.settings) {
            cfg.panel_updates_enabled = enabled;
            info!("updated panel updates toggle: {}", enabled);
        }
        if let Some(enabled) = extract_hovers_enabled(&params.settings) {
            cfg.instruction_hovers_enabled = enabled;
            info!("updated instruction hovers toggle: {}", enabled);
        }
    }

    async fn did_open(&self, params: tower_lsp::lsp_types::DidOpenTextDocumentParams) {
        let doc = params.text_document;
        self.handle_open(doc.uri, doc.version, doc.text).await;
    }

    async fn did_change(&self, params: tower_lsp::lsp_types::DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        self.handle_change(uri, version, params.content_changes)
            .await;
    }

    async fn did_close(&self, params: tower_lsp::lsp_types::DidCloseTextDocumentParams) {
        self.handle_close(params.text_document.uri).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let config = self.snapshot_config().await;
        if !config.instruction_hovers_enabled {
            return Ok(None);
        }

        let uri = params.text_document_position_params.text_document.uri;
        let pos = params.text_document_position_params.position;
        let Some(line) = self.documents.line_at(&uri, pos.line).await else {
            debug!("hover: no cached text for {uri} line {}", pos.line);
            return Ok(None);
        };

        let Some(record) = resolver::resolve(&self.table, &line) else {
            return Ok(None);
        };

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: render::render_hover(record),
            }),
            range: None,
        }))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        match params.command.as_str() {
            CMD_INSERT_SNIPPET => {
                let Some(text) = params.arguments.first().and_then(|v| v.as_str()) else {
                    return Err(tower_lsp::jsonrpc::Error::invalid_params(
                        "z80CheatSheet.insertSnippet expects a string as first argument",
                    ));
                };
                self.client.insert_text(text.to_string()).await;
                Ok(None)
            }
            _ => Err(tower_lsp::jsonrpc::Error::invalid_params(format!(
                "unknown command: {}",
                params.command
            ))),
        }
    }
}
