use super::converters;
use crate::domain::notification::NotificationManager;
use crate::global::to_plain_object;
use crate::platform::Platform;
use js_sys::Promise;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Whether this browser can show service-worker notifications at all.
#[wasm_bindgen(js_name = isSupported)]
pub fn is_supported() -> bool {
    Platform::new().supports_notifications()
}

/// JS handle over a [`NotificationManager`].
///
/// The host creates one during its own startup and calls `init()`; nothing is
/// initialized implicitly. Every async method resolves to a boolean and never
/// rejects.
#[wasm_bindgen]
pub struct NotificationManagerHandle {
    manager: Rc<NotificationManager>,
    platform: Platform,
}

fn resolve_bool<F>(future: F) -> Promise
where
    F: Future<Output = bool> + 'static,
{
    future_to_promise(async move { Ok(JsValue::from_bool(future.await)) })
}

#[wasm_bindgen]
impl NotificationManagerHandle {
    /// `config` may be `undefined` or a partial `NotificationConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<NotificationManagerHandle, JsValue> {
        let config = converters::config_from_js(config).map_err(converters::to_js_error)?;
        let platform = Platform::new();

        Ok(Self {
            manager: Rc::new(NotificationManager::new(platform.clone(), config)),
            platform,
        })
    }

    pub fn init(&self) -> Promise {
        let manager = self.manager.clone();
        resolve_bool(async move { manager.init().await })
    }

    #[wasm_bindgen(js_name = checkPermission)]
    pub fn check_permission(&self) -> Promise {
        let manager = self.manager.clone();
        resolve_bool(async move { manager.check_permission().await })
    }

    #[wasm_bindgen(js_name = requestPermission)]
    pub fn request_permission(&self) -> Promise {
        let manager = self.manager.clone();
        resolve_bool(async move { manager.request_permission().await })
    }

    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(&self, title: String, options: JsValue) -> Promise {
        let manager = self.manager.clone();
        let options = match converters::options_from_js(options) {
            Ok(options) => options,
            Err(e) => {
                self.platform
                    .logger()
                    .error(&format!("[notifications] Ignoring \"{title}\": {e}"));
                return resolve_bool(async { false });
            }
        };

        resolve_bool(async move { manager.show_notification(&title, options).await })
    }

    #[wasm_bindgen(js_name = notifyNewMessage)]
    pub fn notify_new_message(
        &self,
        chat_name: String,
        message_content: String,
        chat_id: JsValue,
    ) -> Promise {
        let manager = self.manager.clone();
        let chat_id = converters::chat_id_from_js(chat_id);
        resolve_bool(async move {
            manager
                .notify_new_message(&chat_name, &message_content, chat_id)
                .await
        })
    }

    #[wasm_bindgen(js_name = notifySystem)]
    pub fn notify_system(&self, message: String) -> Promise {
        let manager = self.manager.clone();
        resolve_bool(async move { manager.notify_system(&message).await })
    }

    #[wasm_bindgen(js_name = testNotification)]
    pub fn test_notification(&self) -> Promise {
        let manager = self.manager.clone();
        resolve_bool(async move { manager.test_notification().await })
    }

    /// `{ permission, granted, initialized }`
    #[wasm_bindgen(js_name = getPermissionStatus)]
    pub fn get_permission_status(&self) -> Result<JsValue, JsValue> {
        to_plain_object(&self.manager.get_permission_status()).map_err(JsValue::from)
    }
}
