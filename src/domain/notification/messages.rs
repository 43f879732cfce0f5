//! Ready-made notifications for the chat UI.

use super::config::NotificationConfig;
use super::types::NotificationOptions;
use serde_json::{json, Value};

pub const SYSTEM_TAG: &str = "system";
pub const TEST_TAG: &str = "test";

pub fn chat_tag(chat_id: &Value) -> String {
    match chat_id {
        Value::String(id) => format!("chat-{id}"),
        other => format!("chat-{other}"),
    }
}

pub fn new_message(
    chat_name: &str,
    message_content: &str,
    chat_id: Value,
    now: f64,
) -> (String, NotificationOptions) {
    let options = NotificationOptions {
        body: Some(message_content.to_string()),
        tag: Some(chat_tag(&chat_id)),
        require_interaction: Some(true),
        data: Some(json!({
            "type": "chat",
            "chatId": chat_id,
            "timestamp": now,
        })),
        ..Default::default()
    };

    (chat_name.to_string(), options)
}

pub fn system(config: &NotificationConfig, message: &str) -> (String, NotificationOptions) {
    let options = NotificationOptions {
        body: Some(message.to_string()),
        tag: Some(SYSTEM_TAG.to_string()),
        require_interaction: Some(false),
        data: Some(json!({ "type": "system" })),
        ..Default::default()
    };

    (config.system_title.clone(), options)
}

pub fn test(config: &NotificationConfig) -> (String, NotificationOptions) {
    let options = NotificationOptions {
        body: Some(config.test_body.clone()),
        tag: Some(TEST_TAG.to_string()),
        vibrate: Some(config.test_vibrate.clone()),
        ..Default::default()
    };

    (config.test_title.clone(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_tag_formats_numbers_and_strings() {
        assert_eq!(chat_tag(&json!(42)), "chat-42");
        assert_eq!(chat_tag(&json!("group-a")), "chat-group-a");
    }

    #[test]
    fn test_new_message() {
        let (title, options) = new_message("Alice", "hi", json!(42), 1000.0);

        assert_eq!(title, "Alice");
        assert_eq!(options.body.as_deref(), Some("hi"));
        assert_eq!(options.tag.as_deref(), Some("chat-42"));
        assert_eq!(options.require_interaction, Some(true));

        let data = options.data.unwrap();
        assert_eq!(data["type"], json!("chat"));
        assert_eq!(data["chatId"], json!(42));
        assert_eq!(data["timestamp"], json!(1000.0));
    }

    #[test]
    fn test_system() {
        let config = NotificationConfig::default();
        let (title, options) = system(&config, "x");

        assert_eq!(title, "EPhone");
        assert_eq!(options.body.as_deref(), Some("x"));
        assert_eq!(options.tag.as_deref(), Some("system"));
        assert_eq!(options.require_interaction, Some(false));
        assert_eq!(options.data, Some(json!({ "type": "system" })));
    }

    #[test]
    fn test_test_notification_uses_long_vibration() {
        let config = NotificationConfig::default();
        let (title, options) = test(&config);

        assert_eq!(title, config.test_title);
        assert_eq!(options.tag.as_deref(), Some("test"));
        assert_eq!(options.vibrate, Some(vec![200, 100, 200, 100, 200]));
    }
}
