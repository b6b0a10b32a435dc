//! Tests for incremental document synchronization.

use super::helpers::*;

#[tokio::test]
async fn test_incremental_edit_simple() {
    let server = TestLspServer::new();

    server
        .open_document("file:///test.html", "<main>\n<p>Old text.</p>\n</main>", "html")
        .await;

    // Replace "Old" with "New"
    server
        .edit_document(
            "file:///test.html",
            vec![incremental_change(1, 3, 1, 6, "New")],
        )
        .await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<main>\n<p>New text.</p>\n</main>".to_string()));
}

#[tokio::test]
async fn test_incremental_edit_multiline() {
    let server = TestLspServer::new();

    server
        .open_document(
            "file:///test.html",
            "<p>1</p>\n<p>2</p>\n<p>3</p>\n<p>4</p>",
            "html",
        )
        .await;

    // Delete lines 2-3
    server
        .edit_document("file:///test.html", vec![incremental_change(1, 0, 3, 0, "")])
        .await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<p>1</p>\n<p>4</p>".to_string()));
}

#[tokio::test]
async fn test_incremental_edit_utf16_columns() {
    let server = TestLspServer::new();

    // "😀" is two UTF-16 code units.
    server
        .open_document("file:///test.html", "<p>😀 old</p>", "html")
        .await;

    server
        .edit_document(
            "file:///test.html",
            vec![incremental_change(0, 6, 0, 9, "new")],
        )
        .await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<p>😀 new</p>".to_string()));
}

#[tokio::test]
async fn test_multiple_documents() {
    let server = TestLspServer::new();

    server
        .open_document("file:///doc1.html", "<h1>Doc 1</h1>", "html")
        .await;
    server
        .open_document("file:///doc2.html", "<h1>Doc 2</h1>", "html")
        .await;

    server
        .edit_document(
            "file:///doc1.html",
            vec![full_document_change("<h1>Modified 1</h1>")],
        )
        .await;
    server
        .edit_document(
            "file:///doc2.html",
            vec![full_document_change("<h1>Modified 2</h1>")],
        )
        .await;

    assert_eq!(
        server.get_document_content("file:///doc1.html").await,
        Some("<h1>Modified 1</h1>".to_string())
    );
    assert_eq!(
        server.get_document_content("file:///doc2.html").await,
        Some("<h1>Modified 2</h1>".to_string())
    );
}
