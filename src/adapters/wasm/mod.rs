/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod permission;
pub mod service_worker;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use permission::NotificationPermission;
pub use service_worker::{ServiceWorker, ServiceWorkerSurface};
