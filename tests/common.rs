//! Common test utilities for building flex message documents.
use fukidashi::prelude::*;
use serde_json::{Value, json};

/// Turns on resolver logging for a test run (`RUST_LOG=debug cargo test`).
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wraps a bubble or carousel into a flex message envelope.
#[allow(dead_code)]
pub fn flex(contents: Value) -> Value {
    json!({ "type": "flex", "altText": "test message", "contents": contents })
}

/// A message with a single bubble whose body box holds `contents`.
#[allow(dead_code)]
pub fn body_message(contents: Value) -> Value {
    flex(json!({
        "type": "bubble",
        "body": { "type": "box", "layout": "vertical", "contents": contents }
    }))
}

/// Resolves a document with the default resolver, panicking on failure.
#[allow(dead_code)]
pub fn resolve(document: Value) -> ResolvedMessage {
    init_logging();
    Resolver::default()
        .resolve_value(document)
        .expect("Failed to resolve message")
}

/// The only bubble of a single-bubble message.
#[allow(dead_code)]
pub fn bubble(message: &ResolvedMessage) -> &ResolvedBubble {
    match &message.contents {
        ResolvedContainer::Bubble(b) => b,
        other => panic!("Expected a bubble, got {:?}", other),
    }
}

/// The root node of the body section.
#[allow(dead_code)]
pub fn body(message: &ResolvedMessage) -> &ResolvedNode {
    &bubble(message)
        .body
        .as_ref()
        .expect("Bubble has no body")
        .content
}

/// The resolved box at the root of the body section.
#[allow(dead_code)]
pub fn body_box(message: &ResolvedMessage) -> &fukidashi::tree::ResolvedBox {
    match body(message) {
        ResolvedNode::Box(b) => b,
        other => panic!("Expected a box, got {:?}", other),
    }
}

/// Resolves a single component placed in a vertical body box.
#[allow(dead_code)]
pub fn resolve_single(component: Value) -> ResolvedNode {
    let message = resolve(body_message(json!([component])));
    body_box(&message)
        .children
        .first()
        .map(|child| child.node.clone())
        .expect("Component was not resolved")
}

/// A receipt-style bubble exercising most component kinds.
#[allow(dead_code)]
pub const RECEIPT_JSON: &str = r##"{
  "type": "flex",
  "altText": "Receipt",
  "contents": {
    "type": "bubble",
    "size": "kilo",
    "styles": { "footer": { "backgroundColor": "#f5f5f5" } },
    "header": {
      "type": "box",
      "layout": "horizontal",
      "contents": [
        { "type": "icon", "url": "https://example.com/logo.png", "aspectRatio": "2:1" },
        { "type": "text", "text": "RECEIPT", "weight": "bold", "margin": "md" }
      ]
    },
    "hero": {
      "type": "image",
      "url": "https://example.com/hero.jpg",
      "size": "full",
      "aspectRatio": "20:13",
      "aspectMode": "cover"
    },
    "body": {
      "type": "box",
      "layout": "vertical",
      "spacing": "sm",
      "contents": [
        { "type": "text", "text": "Coffee\nLarge", "size": "xl", "wrap": true },
        { "type": "separator", "margin": "lg" },
        {
          "type": "box",
          "layout": "baseline",
          "contents": [
            { "type": "text", "text": "Total", "flex": 0 },
            { "type": "filler" },
            { "type": "text", "text": "$4.50", "align": "end" }
          ]
        },
        { "type": "spacer", "size": "xl" }
      ]
    },
    "footer": {
      "type": "box",
      "layout": "vertical",
      "contents": [
        {
          "type": "button",
          "style": "primary",
          "action": { "type": "uri", "label": "Open", "uri": "https://example.com/r/1" }
        }
      ]
    }
  }
}"##;
