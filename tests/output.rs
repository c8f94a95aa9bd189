//! Output utilities: tree display, JSON hand-off and node counts.
mod common;
use common::*;
use fukidashi::prelude::*;
use std::fs;

#[cfg(test)]
mod output_tests {
    use super::*;

    fn receipt() -> ResolvedMessage {
        resolve(serde_json::from_str(RECEIPT_JSON).expect("Invalid fixture"))
    }

    #[test]
    fn test_kind_counts() {
        let counts = receipt().kind_counts();
        assert_eq!(counts.get("box"), Some(&4));
        assert_eq!(counts.get("text"), Some(&4));
        assert_eq!(counts.get("icon"), Some(&1));
        assert_eq!(counts.get("image"), Some(&1));
        assert_eq!(counts.get("separator"), Some(&1));
        assert_eq!(counts.get("filler"), Some(&1));
        assert_eq!(counts.get("spacer"), Some(&1));
        assert_eq!(counts.get("button"), Some(&1));
        assert_eq!(counts.get("video"), None);
    }

    #[test]
    fn test_display_tree_lists_sections_and_nodes() {
        let message = receipt();
        let rendered = DisplayTree::new(&message).to_string();
        println!("{}", rendered);

        assert!(rendered.starts_with("flex \"Receipt\""));
        assert!(rendered.contains("bubble [kilo, max-width 260px, radius 10px]"));
        assert!(rendered.contains("├── header"));
        assert!(rendered.contains("└── footer"));
        assert!(rendered.contains("button \"Open\" Primary height=52px"));
        assert!(rendered.contains("separator Horizontal #d4d6da margin-top=12px"));
        assert!(rendered.contains("+spacing 4px"));
        assert!(rendered.contains("[uri]"));
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let message = receipt();
        let path = std::env::temp_dir().join("fukidashi_receipt_test.json");
        let path_str = path.to_str().expect("Temp path is not valid UTF-8");

        message.save_json(path_str).expect("Failed to save resolved tree");
        let json = fs::read_to_string(&path).expect("Failed to read saved tree");
        let restored = ResolvedMessage::from_json_str(&json).expect("Failed to load resolved tree");
        assert_eq!(restored, message);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_json_uses_type_tags() {
        let json = receipt().to_json_string().expect("Failed to serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
        assert_eq!(value["contents"]["type"], "bubble");
        assert_eq!(value["contents"]["body"]["content"]["type"], "box");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let message = receipt();
        let result = message.save_json("/nonexistent-dir/for/sure/out.json");
        assert!(matches!(result, Err(OutputError::Generic(_))));
    }
}
