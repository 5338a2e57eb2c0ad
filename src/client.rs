//! Outbound host boundary: panel refreshes and insert-text requests.
//!
//! The backend never talks to `tower_lsp::Client` directly; it goes through
//! the [`PanelClient`] trait so tests can substitute a recording client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::notification::Notification;
use tower_lsp::Client;

/// Inbound notification sent by the editor whenever the cursor moves to a
/// new line. Carries only the line's text; the server knows nothing about
/// cursor position or document identity on this path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChangedParams {
    pub text: String,
}

pub enum LineChanged {}

impl Notification for LineChanged {
    type Params = LineChangedParams;
    const METHOD: &'static str = "cheatSheet/lineChanged";
}

/// Outbound notification carrying the rendered panel fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshPanelParams {
    pub html: String,
}

pub enum RefreshPanel {}

impl Notification for RefreshPanel {
    type Params = RefreshPanelParams;
    const METHOD: &'static str = "cheatSheet/refreshPanel";
}

/// Outbound notification asking the editor to insert a literal snippet at
/// the cursor. Pure pass-through; the payload is never inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertTextParams {
    pub text: String,
}

pub enum InsertText {}

impl Notification for InsertText {
    type Params = InsertTextParams;
    const METHOD: &'static str = "cheatSheet/insertText";
}

/// Minimal abstraction over the outbound notifications so the backend can be
/// tested without a real LSP client.
#[async_trait]
pub trait PanelClient: Clone + Send + Sync + 'static {
    async fn update_panel(&self, html: String);
    async fn insert_text(&self, text: String);
}

#[async_trait]
impl PanelClient for Client {
    async fn update_panel(&self, html: String) {
        self.send_notification::<RefreshPanel>(RefreshPanelParams { html })
            .await;
    }

    async fn insert_text(&self, text: String) {
        self.send_notification::<InsertText>(InsertTextParams { text })
            .await;
    }
}
