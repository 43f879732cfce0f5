use serde::{Deserialize, Serialize};

pub const DEFAULT_BODY: &str = "您有新消息";
pub const DEFAULT_ICON: &str = "https://i.postimg.cc/ephone/notification-icon.png";
pub const DEFAULT_VIBRATE: [u32; 3] = [200, 100, 200];
pub const TEST_VIBRATE: [u32; 5] = [200, 100, 200, 100, 200];
pub const SYSTEM_TITLE: &str = "EPhone";
pub const TEST_TITLE: &str = "EPhone 测试通知";
pub const TEST_BODY: &str = "这是一条测试通知，说明通知功能正常工作";

/// Defaults applied to every notification.
///
/// Hosts may pass a partial JSON object; absent fields keep the values below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationConfig {
    /// Body used when the caller gives none.
    pub default_body: String,
    pub icon: String,
    pub badge: String,
    pub require_interaction: bool,
    pub vibrate: Vec<u32>,
    pub silent: bool,
    /// Title of `notify_system` notifications.
    pub system_title: String,
    pub test_title: String,
    pub test_body: String,
    pub test_vibrate: Vec<u32>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_body: DEFAULT_BODY.to_string(),
            icon: DEFAULT_ICON.to_string(),
            badge: DEFAULT_ICON.to_string(),
            require_interaction: true,
            vibrate: DEFAULT_VIBRATE.to_vec(),
            silent: false,
            system_title: SYSTEM_TITLE.to_string(),
            test_title: TEST_TITLE.to_string(),
            test_body: TEST_BODY.to_string(),
            test_vibrate: TEST_VIBRATE.to_vec(),
        }
    }
}
