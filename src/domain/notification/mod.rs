pub mod config;
pub mod error;
pub mod manager;
pub mod messages;
pub mod options;
pub mod types;

pub use config::NotificationConfig;
pub use error::NotificationError;
pub use manager::NotificationManager;
pub use types::{NotificationOptions, NotificationRequest, PermissionState, PermissionStatus};
