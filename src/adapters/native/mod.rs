/// Native adapters - headless implementations for native Rust (non-WASM).

pub mod clock;
pub mod console_logger;
pub mod permission;
pub mod service_worker;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use permission::NotificationPermission;
pub use service_worker::{LogSurface, ServiceWorker};
