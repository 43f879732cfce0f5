use crate::domain::notification::{NotificationConfig, NotificationError, NotificationOptions};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// `undefined` and `null` read as `T::default()`.
fn from_optional<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, NotificationError> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }

    from_value(value).map_err(|e| NotificationError::invalid_options(e.to_string()))
}

pub fn config_from_js(value: JsValue) -> Result<NotificationConfig, NotificationError> {
    from_optional(value)
}

pub fn options_from_js(value: JsValue) -> Result<NotificationOptions, NotificationError> {
    from_optional(value)
}

/// Chat ids arrive as numbers or strings; anything unreadable becomes its debug string.
///
/// Whole numbers stay integers so the tag reads `chat-42`, not `chat-42.0`.
pub fn chat_id_from_js(value: JsValue) -> Value {
    if let Some(id) = value.as_string() {
        return Value::String(id);
    }

    if let Some(id) = value.as_f64() {
        if id.fract() == 0.0 && id.abs() < MAX_SAFE_INTEGER {
            return Value::from(id as i64);
        }
        return serde_json::Number::from_f64(id)
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }

    from_value::<Value>(value.clone()).unwrap_or_else(|_| Value::String(format!("{:?}", value)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_undefined_config_is_default() {
        let config = config_from_js(JsValue::UNDEFINED).unwrap();
        assert_eq!(config, NotificationConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_options_from_object() {
        let object = js_sys::JSON::parse(r#"{"body":"hi","requireInteraction":false}"#).unwrap();
        let options = options_from_js(object).unwrap();
        assert_eq!(options.body.as_deref(), Some("hi"));
        assert_eq!(options.require_interaction, Some(false));
    }

    #[wasm_bindgen_test]
    fn test_invalid_options_rejected() {
        let result = options_from_js(JsValue::from_str("not an object"));
        assert!(matches!(result, Err(NotificationError::InvalidOptions(_))));
    }

    #[wasm_bindgen_test]
    fn test_chat_id_number_and_string() {
        assert_eq!(chat_id_from_js(JsValue::from_f64(42.0)), serde_json::json!(42));
        assert_eq!(chat_id_from_js(JsValue::from_str("abc")), serde_json::json!("abc"));
    }
}
