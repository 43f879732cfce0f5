use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Notification permission as reported by the platform.
///
/// `Unsupported` covers hosts without any notification API. It behaves like
/// `Denied`: the user is never prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    Default,
    Unsupported,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
            PermissionState::Default => "default",
            PermissionState::Unsupported => "unsupported",
        }
    }

    /// Parses the string form used by `Notification.permission` and
    /// `Notification.requestPermission()`. Unknown values map to `Default`.
    pub fn parse(value: &str) -> Self {
        match value {
            "granted" => PermissionState::Granted,
            "denied" => PermissionState::Denied,
            "unsupported" => PermissionState::Unsupported,
            _ => PermissionState::Default,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller overrides for a single notification. Unset fields take the
/// configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationOptions {
    pub body: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub image: Option<String>,
    pub tag: Option<String>,
    pub require_interaction: Option<bool>,
    pub vibrate: Option<Vec<u32>>,
    pub data: Option<Value>,
    pub silent: Option<bool>,
    pub renotify: Option<bool>,
    pub timestamp: Option<f64>,
}

/// A fully resolved notification, ready for the display primitive.
///
/// Serializes to the options object of `ServiceWorkerRegistration.showNotification`;
/// the title travels separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(skip)]
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tag: String,
    pub require_interaction: bool,
    pub vibrate: Vec<u32>,
    pub data: Value,
    pub silent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renotify: Option<bool>,
    pub timestamp: f64,
}

/// Side-effect free snapshot returned by `get_permission_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionStatus {
    pub permission: PermissionState,
    pub granted: bool,
    pub initialized: bool,
}
