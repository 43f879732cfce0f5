use super::config::NotificationConfig;
use super::types::{NotificationOptions, NotificationRequest};
use serde_json::{Map, Value};

const DEFAULT_TAG_PREFIX: &str = "msg-";

pub fn default_tag(now: f64) -> String {
    format!("{DEFAULT_TAG_PREFIX}{}", now.max(0.0) as u64)
}

/// Resolves caller options against the configured defaults.
///
/// Every field set in `options` wins. `renotify` is dropped when no tag was
/// given since browsers reject it on untagged notifications.
pub fn merge(
    config: &NotificationConfig,
    title: &str,
    options: NotificationOptions,
    now: f64,
) -> NotificationRequest {
    let renotify = options.renotify.filter(|_| options.tag.is_some());

    NotificationRequest {
        title: title.to_string(),
        body: options.body.unwrap_or_else(|| config.default_body.clone()),
        icon: options.icon.unwrap_or_else(|| config.icon.clone()),
        badge: options.badge.unwrap_or_else(|| config.badge.clone()),
        image: options.image,
        tag: options.tag.unwrap_or_else(|| default_tag(now)),
        require_interaction: options
            .require_interaction
            .unwrap_or(config.require_interaction),
        vibrate: options.vibrate.unwrap_or_else(|| config.vibrate.clone()),
        data: options.data.unwrap_or_else(|| Value::Object(Map::new())),
        silent: options.silent.unwrap_or(config.silent),
        renotify,
        timestamp: options.timestamp.unwrap_or(now),
    }
}
