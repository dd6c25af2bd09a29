//! Highlighter on the tokio runtime with a paused clock.

use std::sync::Arc;
use std::time::Duration;

use apputil_core::highlight::{BACKGROUND_PROPERTY, BORDER_PROPERTY};
use apputil_core::{Element, HighlightConfig, HighlightError, Highlighter, MemoryDocument, TokioScheduler};

fn highlighter(document: Arc<MemoryDocument>) -> Highlighter<Arc<MemoryDocument>, TokioScheduler> {
    Highlighter::new(document, TokioScheduler::current().unwrap())
}

#[tokio::test(start_paused = true)]
async fn styles_revert_after_two_seconds() {
    let document = Arc::new(MemoryDocument::new());
    let element = document.insert("league-name");
    let highlighter = highlighter(document.clone());

    highlighter.highlight("league-name").unwrap();
    assert!(!element.style(BORDER_PROPERTY).is_empty());
    assert!(!element.style(BACKGROUND_PROPERTY).is_empty());

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(!element.style(BORDER_PROPERTY).is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(element.style(BORDER_PROPERTY), "");
    assert_eq!(element.style(BACKGROUND_PROPERTY), "");
}

#[tokio::test(start_paused = true)]
async fn repeated_highlight_ends_unstyled() {
    let document = Arc::new(MemoryDocument::new());
    let element = document.insert("score");
    let highlighter = highlighter(document.clone());

    highlighter.highlight("score").unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    highlighter.highlight("score").unwrap();

    tokio::time::sleep(Duration::from_millis(2101)).await;
    assert!(element.styles().is_empty());
}

#[tokio::test(start_paused = true)]
async fn configured_delay_is_used() {
    let document = Arc::new(MemoryDocument::new());
    let element = document.insert("cell");
    let config = HighlightConfig::from_json_str(r#"{"delay_ms": 300, "background": "lightblue"}"#).unwrap();
    let highlighter = Highlighter::with_config(document.clone(), TokioScheduler::current().unwrap(), config);

    highlighter.highlight("cell").unwrap();
    assert_eq!(element.style(BACKGROUND_PROPERTY), "lightblue");

    tokio::time::sleep(Duration::from_millis(301)).await;
    assert!(element.styles().is_empty());
}

#[tokio::test]
async fn missing_element_propagates() {
    let highlighter = highlighter(Arc::new(MemoryDocument::new()));
    let err = highlighter.highlight("nope").unwrap_err();
    assert!(matches!(err, HighlightError::ElementNotFound { ref id } if id == "nope"));
}
