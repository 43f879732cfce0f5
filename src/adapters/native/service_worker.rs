use crate::adapters::logger;
use crate::domain::notification::{NotificationError, NotificationRequest};
use crate::ports::{NotificationSurface, WorkerPort};
use async_trait::async_trait;
use std::rc::Rc;

/// Native worker stand-in.
///
/// Resolves immediately to a [`LogSurface`], so hosts without a browser
/// still get every dispatched notification in their logs.
#[derive(Clone, Copy)]
pub struct ServiceWorker;

impl ServiceWorker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ServiceWorker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl WorkerPort for ServiceWorker {
    fn is_supported(&self) -> bool {
        true
    }

    async fn ready(&self) -> Result<Rc<dyn NotificationSurface>, NotificationError> {
        Ok(Rc::new(LogSurface))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogSurface;

#[async_trait(?Send)]
impl NotificationSurface for LogSurface {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let options = serde_json::to_string(request)
            .map_err(|e| NotificationError::display_failed(e.to_string()))?;
        logger().log(&format!("[notification] {}: {options}", request.title));
        Ok(())
    }
}
