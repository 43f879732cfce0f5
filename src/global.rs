use crate::domain::notification::NotificationError;
use wasm_bindgen::prelude::JsValue;
use web_sys::{self, Navigator, Window};

/// Notifications are dispatched from the page, so only a `Window` scope qualifies.
pub fn window() -> Result<Window, NotificationError> {
    web_sys::window().ok_or_else(|| NotificationError::unsupported("No window in this scope"))
}

pub fn navigator() -> Result<Navigator, NotificationError> {
    Ok(window()?.navigator())
}

/// Property presence check that never throws, for feature detection.
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Converts a serializable value into a plain JS object.
///
/// Goes through JSON so that maps become ordinary objects rather than `Map`s,
/// which is what the browser APIs expect.
pub fn to_plain_object<T: serde::Serialize>(value: &T) -> Result<JsValue, NotificationError> {
    let json = serde_json::to_string(value)
        .map_err(|e| NotificationError::invalid_options(format!("Failed to serialize: {e}")))?;
    js_sys::JSON::parse(&json).map_err(NotificationError::from)
}
