use std::collections::HashMap;
use std::sync::Arc;

use tower_lsp::lsp_types::Url;

#[derive(Debug, Default, Clone)]
struct DocumentState {
    version: i32,
    text: String,
}

/// Cache of open documents' text with version tracking.
///
/// The server syncs documents with full text so hover can read the line
/// under the cursor without the client resending it.
#[derive(Debug, Default, Clone)]
pub struct DocumentCache {
    state: Arc<tokio::sync::RwLock<HashMap<Url, DocumentState>>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_version(&self, uri: &Url) -> Option<i32> {
        let state = self.state.read().await;
        state.get(uri).map(|doc| doc.version)
    }

    pub async fn set_text(&self, uri: Url, version: i32, text: String) {
        let mut state = self.state.write().await;
        state.insert(uri, DocumentState { version, text });
    }

    pub async fn remove(&self, uri: &Url) {
        let mut state = self.state.write().await;
        state.remove(uri);
    }

    /// Text of the given zero-based line, without its terminator.
    pub async fn line_at(&self, uri: &Url, line: u32) -> Option<String> {
        let state = self.state.read().await;
        let doc = state.get(uri)?;
        doc.text.lines().nth(line as usize).map(str::to_string)
    }
}
