use crate::domain::notification::{NotificationError, PermissionState};
use async_trait::async_trait;

/// Platform notification permission (granted / denied / default).
#[async_trait(?Send)]
pub trait PermissionPort: Send + Sync {
    /// Whether the host exposes a notification permission API at all.
    fn is_supported(&self) -> bool;

    /// Current permission, without prompting.
    fn state(&self) -> Result<PermissionState, NotificationError>;

    /// Prompts the user and resolves with their answer.
    async fn request(&self) -> Result<PermissionState, NotificationError>;
}
