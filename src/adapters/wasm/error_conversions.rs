use crate::domain::notification::NotificationError;
use wasm_bindgen::JsValue;

/// Best-effort message out of a thrown JS value (string, `Error` or anything else).
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }

    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Conversion from JsValue to NotificationError for WASM infrastructure
impl From<JsValue> for NotificationError {
    fn from(err: JsValue) -> Self {
        NotificationError::JsError(js_error_message(&err))
    }
}

/// Conversion from NotificationError to JsValue for WASM boundary
impl From<NotificationError> for JsValue {
    fn from(error: NotificationError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_string_error() {
        let error = NotificationError::from(JsValue::from_str("boom"));
        assert_eq!(error, NotificationError::JsError("boom".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_error_object_message() {
        let js_error: JsValue = js_sys::Error::new("denied by user").into();
        assert_eq!(js_error_message(&js_error), "denied by user");
    }

    #[wasm_bindgen_test]
    fn test_into_js_value() {
        let value: JsValue = NotificationError::display_failed("x").into();
        assert_eq!(value.as_string().unwrap(), "Display failed: x");
    }
}
