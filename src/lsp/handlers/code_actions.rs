use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_lsp_server::Client;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;

use crate::lsp::DocumentState;

use super::super::conversions::{convert_diagnostic, convert_fix, ranges_intersect};
use super::super::helpers::{analyze, get_config, get_document};

/// Handle textDocument/codeAction: one quick fix per remediable diagnostic in range.
pub(crate) async fn code_action(
    client: &Client,
    document_map: Arc<Mutex<HashMap<String, DocumentState>>>,
    workspace_root: Arc<Mutex<Option<PathBuf>>>,
    params: CodeActionParams,
) -> Result<Option<CodeActionResponse>> {
    let uri = params.text_document.uri;

    let Some(doc) = get_document(&document_map, &uri).await else {
        return Ok(None);
    };
    let config = get_config(client, &workspace_root, &uri).await;

    let diagnostics = analyze(&doc, config)
        .await
        .map_err(|_| tower_lsp_server::jsonrpc::Error::internal_error())?;

    let mut actions = Vec::new();
    for diag in &diagnostics {
        let Some(fix) = &diag.fix else {
            continue;
        };
        let lsp_diag = convert_diagnostic(diag, &doc.text);
        if !ranges_intersect(&lsp_diag.range, &params.range) {
            continue;
        }

        let mut changes = HashMap::new();
        changes.insert(uri.clone(), convert_fix(fix, &doc.text));

        let action = CodeAction {
            title: fix.message.clone(),
            kind: Some(CodeActionKind::QUICKFIX),
            diagnostics: Some(vec![lsp_diag]),
            edit: Some(WorkspaceEdit {
                changes: Some(changes),
                ..Default::default()
            }),
            ..Default::default()
        };
        actions.push(CodeActionOrCommand::CodeAction(action));
    }

    Ok(Some(actions))
}
