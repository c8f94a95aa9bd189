//! Activation of interactive nodes and the fallback host effects.
mod common;
use common::*;
use fukidashi::action::fallback_effect;
use fukidashi::prelude::*;
use serde_json::json;
use std::cell::RefCell;

#[cfg(test)]
mod action_tests {
    use super::*;

    #[test]
    fn test_actions_deserialize_from_wire_format() {
        let action: Action = serde_json::from_value(json!({
            "type": "uri",
            "label": "Open",
            "uri": "https://example.com",
            "altUri": { "desktop": "https://example.com/desktop" }
        }))
        .expect("Invalid action");
        assert_eq!(action.kind(), "uri");
        assert_eq!(action.label(), Some("Open"));

        let action: Action =
            serde_json::from_value(json!({ "type": "postback", "data": "a=1", "displayText": "Buy" }))
                .expect("Invalid action");
        assert_eq!(action.label(), None);
    }

    #[test]
    fn test_fallback_effects() {
        let uri = Action::Uri {
            label: None,
            uri: "https://example.com".to_string(),
            alt_uri: None,
        };
        assert_eq!(
            fallback_effect(&uri),
            HostEffect::OpenExternal {
                uri: "https://example.com".to_string()
            }
        );

        let message = Action::Message {
            label: None,
            text: "hello".to_string(),
        };
        assert_eq!(
            fallback_effect(&message),
            HostEffect::Notify {
                text: "Message: hello".to_string()
            }
        );

        let postback = Action::Postback {
            label: None,
            data: "id=7".to_string(),
            display_text: None,
        };
        assert_eq!(
            fallback_effect(&postback),
            HostEffect::Notify {
                text: "Postback: id=7".to_string()
            }
        );
    }

    #[test]
    fn test_dispatcher_receives_exact_action() {
        let wire = json!({ "type": "message", "label": "Say", "text": "hi there" });
        let node = resolve_single(json!({ "type": "button", "action": wire.clone() }));

        let received = RefCell::new(Vec::new());
        let record = |action: &Action| received.borrow_mut().push(action.clone());
        let dispatcher: &dyn ActionDispatch = &record;
        let effect = node.activate(Some(dispatcher));

        assert_eq!(effect, None);
        let received = received.into_inner();
        assert_eq!(received.len(), 1);
        assert_eq!(
            serde_json::to_value(&received[0]).expect("Failed to serialize action"),
            wire
        );
    }

    #[test]
    fn test_activation_without_dispatcher_uses_fallback() {
        let node = resolve_single(json!({
            "type": "image",
            "url": "https://example.com/a.png",
            "action": { "type": "uri", "uri": "https://example.com/shop" }
        }));
        assert_eq!(
            node.activate(None),
            Some(HostEffect::OpenExternal {
                uri: "https://example.com/shop".to_string()
            })
        );
    }

    #[test]
    fn test_non_interactive_nodes_do_nothing() {
        let node = resolve_single(json!({
            "type": "separator",
            "action": { "type": "message", "text": "x" }
        }));
        assert_eq!(node.action(), None);
        assert_eq!(node.activate(None), None);
    }

    #[test]
    fn test_invalid_action_is_dropped() {
        let node = resolve_single(json!({
            "type": "text",
            "text": "a",
            "action": { "type": "teleport", "where": "moon" }
        }));
        assert_eq!(node.action(), None);
    }

    #[test]
    fn test_bubble_action_is_retained() {
        let message = resolve(flex(json!({
            "type": "bubble",
            "action": { "type": "postback", "data": "card=1" }
        })));
        assert_eq!(
            bubble(&message).activate(None),
            Some(HostEffect::Notify {
                text: "Postback: card=1".to_string()
            })
        );
    }
}
