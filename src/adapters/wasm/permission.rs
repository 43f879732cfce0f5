use super::error_conversions::js_error_message;
use crate::domain::notification::{NotificationError, PermissionState};
use crate::global::{has_property, window};
use crate::ports::PermissionPort;
use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;
use web_sys::Notification;

/// Page-level `Notification` permission API.
#[derive(Clone, Copy)]
pub struct NotificationPermission;

impl NotificationPermission {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotificationPermission {
    fn default() -> Self {
        Self::new()
    }
}

fn from_web(permission: web_sys::NotificationPermission) -> PermissionState {
    match permission {
        web_sys::NotificationPermission::Granted => PermissionState::Granted,
        web_sys::NotificationPermission::Denied => PermissionState::Denied,
        _ => PermissionState::Default,
    }
}

#[async_trait(?Send)]
impl PermissionPort for NotificationPermission {
    fn is_supported(&self) -> bool {
        window()
            .map(|window| has_property(&window, "Notification"))
            .unwrap_or(false)
    }

    fn state(&self) -> Result<PermissionState, NotificationError> {
        if !self.is_supported() {
            return Ok(PermissionState::Unsupported);
        }

        Ok(from_web(Notification::permission()))
    }

    async fn request(&self) -> Result<PermissionState, NotificationError> {
        if !self.is_supported() {
            return Err(NotificationError::unsupported("Notification API"));
        }

        let promise = Notification::request_permission().map_err(|e| {
            NotificationError::permission_request_failed(js_error_message(&e))
        })?;

        let answer = JsFuture::from(promise).await.map_err(|e| {
            NotificationError::permission_request_failed(js_error_message(&e))
        })?;

        Ok(answer
            .as_string()
            .map(|answer| PermissionState::parse(&answer))
            .unwrap_or(PermissionState::Default))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_permission_supported_in_browser() {
        let permission = NotificationPermission::new();
        assert!(permission.is_supported());
    }

    #[wasm_bindgen_test]
    fn test_permission_state_readable() {
        let permission = NotificationPermission::new();
        let state = permission.state();
        assert!(state.is_ok());
        assert_ne!(state.unwrap(), PermissionState::Unsupported);
    }
}
