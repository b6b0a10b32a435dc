//! Document synchronisation. Every change to a document's text is followed by
//! a full re-analysis and a complete `publishDiagnostics` for it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::*;

use super::conversions::apply_content_change;
use super::handlers::diagnostics::lint_and_publish;
use crate::lsp::DocumentState;

type DocumentMap = Arc<Mutex<HashMap<String, DocumentState>>>;
type WorkspaceRoot = Arc<Mutex<Option<PathBuf>>>;

fn is_php_document(uri: &Uri, language_id: &str) -> bool {
    language_id.eq_ignore_ascii_case("php")
        || uri
            .to_file_path()
            .is_some_and(|path| crate::php::is_php_path(&path))
}

pub(crate) async fn did_open(
    client: &Client,
    document_map: DocumentMap,
    workspace_root: WorkspaceRoot,
    params: DidOpenTextDocumentParams,
) {
    let document = params.text_document;
    let is_php = is_php_document(&document.uri, &document.language_id);
    log::debug!("Opened {} (php: {})", *document.uri, is_php);

    document_map.lock().await.insert(
        document.uri.to_string(),
        DocumentState {
            text: document.text,
            is_php,
        },
    );

    lint_and_publish(client, &document_map, &workspace_root, document.uri).await;
}

/// Changes are applied in order, each against the result of the previous one.
pub(crate) async fn did_change(
    client: &Client,
    document_map: DocumentMap,
    workspace_root: WorkspaceRoot,
    params: DidChangeTextDocumentParams,
) {
    let uri = params.text_document.uri;
    {
        let mut documents = document_map.lock().await;
        let Some(state) = documents.get_mut(&uri.to_string()) else {
            log::warn!("Change for unknown document {}", *uri);
            return;
        };
        state.text = params
            .content_changes
            .iter()
            .fold(std::mem::take(&mut state.text), |text, change| {
                apply_content_change(&text, change)
            });
    }

    lint_and_publish(client, &document_map, &workspace_root, uri).await;
}

/// A save carrying text replaces the stored copy; either way the rules re-run.
pub(crate) async fn did_save(
    client: &Client,
    document_map: DocumentMap,
    workspace_root: WorkspaceRoot,
    params: DidSaveTextDocumentParams,
) {
    let uri = params.text_document.uri;
    if let Some(text) = params.text
        && let Some(state) = document_map.lock().await.get_mut(&uri.to_string())
    {
        state.text = text;
    }

    lint_and_publish(client, &document_map, &workspace_root, uri).await;
}

pub(crate) async fn did_close(
    client: &Client,
    document_map: DocumentMap,
    params: DidCloseTextDocumentParams,
) {
    let uri = params.text_document.uri;
    document_map.lock().await.remove(&uri.to_string());

    client.publish_diagnostics(uri, Vec::new(), None).await;
}
