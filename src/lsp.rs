use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::{Client, LspService, Server};

mod config;
mod conversions;
mod documents;
mod helpers;
mod server;

mod handlers {
    pub(crate) mod code_actions;
    pub(crate) mod diagnostics;
}

/// An open document as last synchronised by the client.
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub text: String,
    /// PHP templates are masked before analysis.
    pub is_php: bool,
}

pub struct A11yLsp {
    client: Client,
    // Use String keys since Uri doesn't implement Send
    document_map: Arc<Mutex<HashMap<String, DocumentState>>>,
    workspace_root: Arc<Mutex<Option<PathBuf>>>,
}

impl A11yLsp {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            document_map: Arc::new(Mutex::new(HashMap::new())),
            workspace_root: Arc::new(Mutex::new(None)),
        }
    }

    /// Shared handle to the open documents, keyed by URI string.
    pub fn document_map(&self) -> Arc<Mutex<HashMap<String, DocumentState>>> {
        Arc::clone(&self.document_map)
    }
}

/// Serve the language server over stdio until the client disconnects.
pub async fn run() -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(A11yLsp::new);
    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
