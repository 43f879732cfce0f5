use super::config::NotificationConfig;
use super::messages;
use super::options;
use super::types::{NotificationOptions, PermissionState, PermissionStatus};
use crate::platform::Platform;
use crate::ports::NotificationSurface;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

const LOG_PREFIX: &str = "[notifications]";

#[derive(Default)]
struct ManagerState {
    worker_context: Option<Rc<dyn NotificationSurface>>,
    permission_granted: bool,
    initialized: bool,
}

/// Requests permission and dispatches notifications through the service worker.
///
/// Every operation reports failure as `false` after logging it; nothing is
/// retried and no error escapes. Calls are expected to be awaited one after
/// the other, the state is never borrowed across an await point.
pub struct NotificationManager {
    platform: Platform,
    config: NotificationConfig,
    state: RefCell<ManagerState>,
}

impl NotificationManager {
    pub fn new(platform: Platform, config: NotificationConfig) -> Self {
        Self {
            platform,
            config,
            state: RefCell::new(ManagerState::default()),
        }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    pub fn is_permission_granted(&self) -> bool {
        self.state.borrow().permission_granted
    }

    pub fn has_worker_context(&self) -> bool {
        self.state.borrow().worker_context.is_some()
    }

    /// Resolves the worker context and evaluates the current permission.
    ///
    /// Returns `true` once setup completed, even if permission ended up denied;
    /// the permission outcome is tracked separately.
    pub async fn init(&self) -> bool {
        let logger = self.platform.logger();

        if !self.platform.supports_notifications() {
            logger.warn(&format!(
                "{LOG_PREFIX} Service worker or Notification API not supported"
            ));
            return false;
        }

        let surface = match self.platform.worker().ready().await {
            Ok(surface) => surface,
            Err(e) => {
                logger.error(&format!("{LOG_PREFIX} Initialization failed: {e}"));
                return false;
            }
        };

        self.state.borrow_mut().worker_context = Some(surface);

        let granted = self.check_permission().await;

        self.state.borrow_mut().initialized = true;
        logger.log(&format!(
            "{LOG_PREFIX} Initialized (permission granted: {granted})"
        ));
        true
    }

    /// `granted` → true, `denied` → false without prompting, `default` → prompt.
    pub async fn check_permission(&self) -> bool {
        let state = match self.platform.permission().state() {
            Ok(state) => state,
            Err(e) => {
                self.platform
                    .logger()
                    .error(&format!("{LOG_PREFIX} Failed to read permission: {e}"));
                PermissionState::Unsupported
            }
        };

        match state {
            PermissionState::Granted => {
                self.set_permission_granted(true);
                true
            }
            PermissionState::Default => self.request_permission().await,
            PermissionState::Denied | PermissionState::Unsupported => {
                self.platform
                    .logger()
                    .warn(&format!("{LOG_PREFIX} Notification permission is {state}"));
                self.set_permission_granted(false);
                false
            }
        }
    }

    pub async fn request_permission(&self) -> bool {
        match self.platform.permission().request().await {
            Ok(state) => {
                let granted = state.is_granted();
                self.platform
                    .logger()
                    .log(&format!("{LOG_PREFIX} Permission request answered: {state}"));
                self.set_permission_granted(granted);
                granted
            }
            Err(e) => {
                self.platform
                    .logger()
                    .error(&format!("{LOG_PREFIX} Permission request failed: {e}"));
                self.set_permission_granted(false);
                false
            }
        }
    }

    /// Dispatches a notification, initializing and prompting first if needed.
    ///
    /// The display primitive is only reached with a worker context present
    /// and permission granted.
    pub async fn show_notification(&self, title: &str, options: NotificationOptions) -> bool {
        let logger = self.platform.logger();

        if !self.is_initialized() && !self.init().await {
            return false;
        }

        if !self.is_permission_granted() && !self.request_permission().await {
            logger.warn(&format!(
                "{LOG_PREFIX} Permission not granted, dropping \"{title}\""
            ));
            return false;
        }

        let surface = self.state.borrow().worker_context.clone();
        let Some(surface) = surface else {
            logger.error(&format!("{LOG_PREFIX} No service worker registration"));
            return false;
        };

        let request = options::merge(&self.config, title, options, self.platform.clock().now());

        match surface.show(&request).await {
            Ok(()) => {
                logger.debug(&format!(
                    "{LOG_PREFIX} Shown \"{}\" (tag {})",
                    request.title, request.tag
                ));
                true
            }
            Err(e) => {
                logger.error(&format!("{LOG_PREFIX} Failed to show notification: {e}"));
                false
            }
        }
    }

    pub async fn notify_new_message(
        &self,
        chat_name: &str,
        message_content: &str,
        chat_id: impl Into<Value>,
    ) -> bool {
        let (title, options) = messages::new_message(
            chat_name,
            message_content,
            chat_id.into(),
            self.platform.clock().now(),
        );
        self.show_notification(&title, options).await
    }

    pub async fn notify_system(&self, message: &str) -> bool {
        let (title, options) = messages::system(&self.config, message);
        self.show_notification(&title, options).await
    }

    pub async fn test_notification(&self) -> bool {
        let (title, options) = messages::test(&self.config);
        self.show_notification(&title, options).await
    }

    pub fn get_permission_status(&self) -> PermissionStatus {
        let permission_port = self.platform.permission();
        let permission = if permission_port.is_supported() {
            permission_port
                .state()
                .unwrap_or(PermissionState::Unsupported)
        } else {
            PermissionState::Unsupported
        };

        let state = self.state.borrow();
        PermissionStatus {
            permission,
            granted: state.permission_granted,
            initialized: state.initialized,
        }
    }

    fn set_permission_granted(&self, granted: bool) {
        self.state.borrow_mut().permission_granted = granted;
    }
}
