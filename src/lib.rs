// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod global;

pub use domain::notification::{
    NotificationConfig, NotificationError, NotificationManager, NotificationOptions,
    NotificationRequest, PermissionState, PermissionStatus,
};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

/// Installs the panic hook only; hosts call `NotificationManagerHandle.init()`
/// themselves once their own startup is done.
#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
