use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::ls_types::Uri;

use crate::Config;
use crate::linter::Diagnostic;

use super::DocumentState;
use super::config::load_config;

pub(crate) async fn get_document(
    document_map: &Arc<Mutex<HashMap<String, DocumentState>>>,
    uri: &Uri,
) -> Option<DocumentState> {
    let doc_map = document_map.lock().await;
    doc_map.get(&uri.to_string()).cloned()
}

pub(crate) async fn get_config(
    client: &tower_lsp_server::Client,
    workspace_root: &Arc<Mutex<Option<PathBuf>>>,
    uri: &Uri,
) -> Config {
    let workspace_root = workspace_root.lock().await.clone();
    load_config(client, &workspace_root, Some(uri)).await
}

/// Analyze a document off the async runtime.
pub(crate) async fn analyze(
    doc: &DocumentState,
    config: Config,
) -> Result<Vec<Diagnostic>, tokio::task::JoinError> {
    let text = doc.text.clone();
    let is_php = doc.is_php;
    tokio::task::spawn_blocking(move || crate::lint_source(&text, is_php, &config)).await
}
