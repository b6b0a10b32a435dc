//! Tests for basic document lifecycle (open, edit, save, close).

use super::helpers::*;

#[tokio::test]
async fn test_open_document() {
    let server = TestLspServer::new();

    server
        .open_document("file:///test.html", "<main>Hello</main>", "html")
        .await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<main>Hello</main>".to_string()));
    assert_eq!(server.is_php("file:///test.html").await, Some(false));
}

#[tokio::test]
async fn test_php_detected_from_extension() {
    let server = TestLspServer::new();

    server
        .open_document("file:///view.phtml", "<main></main>", "html")
        .await;

    assert_eq!(server.is_php("file:///view.phtml").await, Some(true));
}

#[tokio::test]
async fn test_close_document() {
    let server = TestLspServer::new();

    server
        .open_document("file:///test.html", "<main></main>", "html")
        .await;
    server.close_document("file:///test.html").await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, None);
}

#[tokio::test]
async fn test_edit_document_full_replace() {
    let server = TestLspServer::new();

    server
        .open_document("file:///test.html", "<main></main>", "html")
        .await;

    server
        .edit_document(
            "file:///test.html",
            vec![full_document_change("<main><img src=\"a.png\"></main>")],
        )
        .await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<main><img src=\"a.png\"></main>".to_string()));
}

#[tokio::test]
async fn test_save_with_text_replaces_content() {
    let server = TestLspServer::new();

    server
        .open_document("file:///test.html", "<main></main>", "html")
        .await;
    server
        .save_document("file:///test.html", Some("<main><h1>Saved</h1></main>"))
        .await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<main><h1>Saved</h1></main>".to_string()));
}

#[tokio::test]
async fn test_save_without_text_keeps_content() {
    let server = TestLspServer::new();

    server
        .open_document("file:///test.html", "<main></main>", "html")
        .await;
    server.save_document("file:///test.html", None).await;

    let content = server.get_document_content("file:///test.html").await;
    assert_eq!(content, Some("<main></main>".to_string()));
}

#[tokio::test]
async fn test_edit_unknown_document_is_ignored() {
    let server = TestLspServer::new();

    server
        .edit_document("file:///missing.html", vec![full_document_change("<main></main>")])
        .await;

    assert_eq!(server.get_document_content("file:///missing.html").await, None);
}
