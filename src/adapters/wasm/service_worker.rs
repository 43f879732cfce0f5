use super::error_conversions::js_error_message;
use crate::domain::notification::{NotificationError, NotificationRequest};
use crate::global::{has_property, navigator, to_plain_object};
use crate::ports::{NotificationSurface, WorkerPort};
use async_trait::async_trait;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

/// `navigator.serviceWorker`, waited on until a registration is active.
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
        navigator()
            .map(|navigator| has_property(&navigator, "serviceWorker"))
            .unwrap_or(false)
    }

    async fn ready(&self) -> Result<Rc<dyn NotificationSurface>, NotificationError> {
        if !self.is_supported() {
            return Err(NotificationError::unsupported("Service worker"));
        }

        let promise = navigator()?
            .service_worker()
            .ready()
            .map_err(|e| NotificationError::worker_unavailable(js_error_message(&e)))?;

        let registration = JsFuture::from(promise)
            .await
            .map_err(|e| NotificationError::worker_unavailable(js_error_message(&e)))?
            .dyn_into::<ServiceWorkerRegistration>()
            .map_err(|_| {
                NotificationError::worker_unavailable("ready did not resolve to a registration")
            })?;

        Ok(Rc::new(ServiceWorkerSurface::new(registration)))
    }
}

/// Displays notifications through `ServiceWorkerRegistration.showNotification`,
/// which, unlike `new Notification()`, also works on mobile browsers.
pub struct ServiceWorkerSurface {
    registration: ServiceWorkerRegistration,
}

impl ServiceWorkerSurface {
    pub fn new(registration: ServiceWorkerRegistration) -> Self {
        Self { registration }
    }
}

#[async_trait(?Send)]
impl NotificationSurface for ServiceWorkerSurface {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let options = to_plain_object(request)?;

        let promise = self
            .registration
            .show_notification_with_options(&request.title, options.unchecked_ref())
            .map_err(|e| NotificationError::display_failed(js_error_message(&e)))?;

        JsFuture::from(promise)
            .await
            .map_err(|e| NotificationError::display_failed(js_error_message(&e)))?;

        Ok(())
    }
}
