use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::*;

use crate::lsp::DocumentState;

use super::super::conversions::convert_diagnostic;
use super::super::helpers::{analyze, get_config, get_document};

/// Run a full analysis pass and publish the document's complete diagnostic set.
pub(crate) async fn lint_and_publish(
    client: &Client,
    document_map: &Arc<Mutex<HashMap<String, DocumentState>>>,
    workspace_root: &Arc<Mutex<Option<PathBuf>>>,
    uri: Uri,
) {
    let Some(doc) = get_document(document_map, &uri).await else {
        client
            .log_message(
                MessageType::WARNING,
                format!("Document not found: {}", *uri),
            )
            .await;
        return;
    };

    let config = get_config(client, workspace_root, &uri).await;

    match analyze(&doc, config).await {
        Ok(diagnostics) => {
            log::debug!("Publishing {} diagnostic(s) for {}", diagnostics.len(), *uri);
            let lsp_diagnostics: Vec<Diagnostic> = diagnostics
                .iter()
                .map(|d| convert_diagnostic(d, &doc.text))
                .collect();
            client.publish_diagnostics(uri, lsp_diagnostics, None).await;
        }
        Err(e) => {
            client
                .log_message(MessageType::ERROR, format!("Linting task failed: {}", e))
                .await;
        }
    }
}
