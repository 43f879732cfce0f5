pub mod converters;
pub mod notifications;

pub use notifications::{is_supported, NotificationManagerHandle};
