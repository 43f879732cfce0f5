use crate::domain::notification::{NotificationError, NotificationRequest};
use async_trait::async_trait;
use std::rc::Rc;

/// A ready background context that owns notification display.
#[async_trait(?Send)]
pub trait NotificationSurface {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

/// Resolves the background worker once it is ready to display notifications.
#[async_trait(?Send)]
pub trait WorkerPort: Send + Sync {
    fn is_supported(&self) -> bool;

    async fn ready(&self) -> Result<Rc<dyn NotificationSurface>, NotificationError>;
}
