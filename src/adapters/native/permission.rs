use crate::domain::notification::{NotificationError, PermissionState};
use crate::ports::PermissionPort;
use async_trait::async_trait;

/// Native permission stub.
///
/// There is no user to prompt outside a browser, so permission is always granted.
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

#[async_trait(?Send)]
impl PermissionPort for NotificationPermission {
    fn is_supported(&self) -> bool {
        true
    }

    fn state(&self) -> Result<PermissionState, NotificationError> {
        Ok(PermissionState::Granted)
    }

    async fn request(&self) -> Result<PermissionState, NotificationError> {
        Ok(PermissionState::Granted)
    }
}
