use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    Unsupported(String),
    WorkerUnavailable(String),
    PermissionRequestFailed(String),
    DisplayFailed(String),
    InvalidOptions(String),
    JsError(String),
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationError::Unsupported(msg) => write!(f, "Not supported: {msg}"),
            NotificationError::WorkerUnavailable(msg) => {
                write!(f, "Service worker unavailable: {msg}")
            }
            NotificationError::PermissionRequestFailed(msg) => {
                write!(f, "Permission request failed: {msg}")
            }
            NotificationError::DisplayFailed(msg) => write!(f, "Display failed: {msg}"),
            NotificationError::InvalidOptions(msg) => write!(f, "Invalid options: {msg}"),
            NotificationError::JsError(msg) => write!(f, "JavaScript Error: {msg}"),
        }
    }
}

impl std::error::Error for NotificationError {}

impl NotificationError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        NotificationError::Unsupported(message.into())
    }

    pub fn worker_unavailable(message: impl Into<String>) -> Self {
        NotificationError::WorkerUnavailable(message.into())
    }

    pub fn permission_request_failed(message: impl Into<String>) -> Self {
        NotificationError::PermissionRequestFailed(message.into())
    }

    pub fn display_failed(message: impl Into<String>) -> Self {
        NotificationError::DisplayFailed(message.into())
    }

    pub fn invalid_options(message: impl Into<String>) -> Self {
        NotificationError::InvalidOptions(message.into())
    }
}
