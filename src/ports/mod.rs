/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The notification manager only talks to the browser through these traits, so the
/// domain logic runs unchanged against the wasm adapters, the native stand-ins, or
/// test doubles.

pub mod clock;
pub mod logger;
pub mod permission;
pub mod worker;

pub use clock::ClockPort;
pub use logger::LoggerPort;
pub use permission::PermissionPort;
pub use worker::{NotificationSurface, WorkerPort};
