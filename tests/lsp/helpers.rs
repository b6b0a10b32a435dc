//! In-process a11ymate language server for tests.
//!
//! Requests go straight to the `LanguageServer` methods; no stdio framing.

use std::sync::Arc;
use tower_lsp_server::ls_types::*;
use tower_lsp_server::{LanguageServer, LspService};

use a11ymate::lsp::A11yLsp;

fn uri(raw: &str) -> Uri {
    raw.parse().unwrap()
}

fn position(line: u32, character: u32) -> Position {
    Position { line, character }
}

pub struct TestLspServer {
    lsp: Arc<A11yLsp>,
}

impl TestLspServer {
    /// The server gets a live `Client` from `LspService::new`; the service
    /// itself is dropped, so published diagnostics go nowhere.
    pub fn new() -> Self {
        let slot: Arc<std::sync::Mutex<Option<Arc<A11yLsp>>>> = Arc::default();
        let captured = Arc::clone(&slot);

        let (_service, _socket) = LspService::new(move |client| {
            let lsp = Arc::new(A11yLsp::new(client));
            *captured.lock().unwrap() = Some(Arc::clone(&lsp));
            LspWrapper { inner: lsp }
        });

        let lsp = slot.lock().unwrap().take().expect("server not constructed");
        Self { lsp }
    }

    pub async fn open_document(&self, uri_str: &str, content: &str, language_id: &str) {
        self.lsp
            .did_open(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri(uri_str),
                    language_id: language_id.to_string(),
                    version: 0,
                    text: content.to_string(),
                },
            })
            .await;
    }

    pub async fn close_document(&self, uri_str: &str) {
        self.lsp
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri(uri_str) },
            })
            .await;
    }

    /// Sends `changes` as one `didChange` notification, in order.
    pub async fn edit_document(
        &self,
        uri_str: &str,
        changes: Vec<TextDocumentContentChangeEvent>,
    ) {
        self.lsp
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: uri(uri_str),
                    version: 1,
                },
                content_changes: changes,
            })
            .await;
    }

    /// `text: None` is a save without included text.
    pub async fn save_document(&self, uri_str: &str, text: Option<&str>) {
        self.lsp
            .did_save(DidSaveTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri(uri_str) },
                text: text.map(str::to_string),
            })
            .await;
    }

    /// Quick fixes offered for diagnostics intersecting the given span.
    pub async fn get_code_actions(
        &self,
        uri_str: &str,
        start_line: u32,
        start_char: u32,
        end_line: u32,
        end_char: u32,
    ) -> Option<CodeActionResponse> {
        let params = CodeActionParams {
            text_document: TextDocumentIdentifier { uri: uri(uri_str) },
            range: Range {
                start: position(start_line, start_char),
                end: position(end_line, end_char),
            },
            context: CodeActionContext {
                diagnostics: vec![],
                only: None,
                trigger_kind: None,
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        };

        self.lsp.code_action(params).await.unwrap()
    }

    /// Text the server currently holds for `uri_str`, after all edits.
    pub async fn get_document_content(&self, uri_str: &str) -> Option<String> {
        let documents = self.lsp.document_map();
        let documents = documents.lock().await;
        documents.get(uri_str).map(|state| state.text.clone())
    }

    pub async fn is_php(&self, uri_str: &str) -> Option<bool> {
        let documents = self.lsp.document_map();
        let documents = documents.lock().await;
        documents.get(uri_str).map(|state| state.is_php)
    }
}

/// `LspService` owns its server; this forwards to the shared one the tests keep.
struct LspWrapper {
    inner: Arc<A11yLsp>,
}

impl LanguageServer for LspWrapper {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> tower_lsp_server::jsonrpc::Result<InitializeResult> {
        self.inner.initialize(params).await
    }

    async fn initialized(&self, params: InitializedParams) {
        self.inner.initialized(params).await
    }

    async fn shutdown(&self) -> tower_lsp_server::jsonrpc::Result<()> {
        self.inner.shutdown().await
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.inner.did_open(params).await
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        self.inner.did_change(params).await
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        self.inner.did_save(params).await
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.inner.did_close(params).await
    }

    async fn code_action(
        &self,
        params: CodeActionParams,
    ) -> tower_lsp_server::jsonrpc::Result<Option<CodeActionResponse>> {
        self.inner.code_action(params).await
    }
}

/// Replaces the whole document.
pub fn full_document_change(text: &str) -> TextDocumentContentChangeEvent {
    TextDocumentContentChangeEvent {
        range: None,
        range_length: None,
        text: text.to_string(),
    }
}

/// Replaces the text between two (line, UTF-16 column) positions.
pub fn incremental_change(
    start_line: u32,
    start_char: u32,
    end_line: u32,
    end_char: u32,
    text: &str,
) -> TextDocumentContentChangeEvent {
    TextDocumentContentChangeEvent {
        range: Some(Range {
            start: position(start_line, start_char),
            end: position(end_line, end_char),
        }),
        range_length: None,
        text: text.to_string(),
    }
}

/// Titles of all code actions in a response.
pub fn action_titles(actions: &CodeActionResponse) -> Vec<String> {
    actions
        .iter()
        .filter_map(|action| match action {
            CodeActionOrCommand::CodeAction(ca) => Some(ca.title.clone()),
            CodeActionOrCommand::Command(_) => None,
        })
        .collect()
}
