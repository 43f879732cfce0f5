use crate::ports::clock::ClockPort;

/// Wall clock backed by `Date.now()`; tags and timestamps need epoch time,
/// not the page-relative `performance.now()`.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clock_now_is_epoch_millis() {
        let clock = Clock::new();
        let timestamp = clock.now();
        assert!(
            timestamp > 1_577_836_800_000.0,
            "Timestamp should be after 2020: {}",
            timestamp
        );
    }

    #[wasm_bindgen_test]
    fn test_clock_monotonic_time() {
        let clock = Clock::new();
        let t1 = clock.now();
        let t2 = clock.now();
        assert!(t2 >= t1, "Time should not go backwards (t1={}, t2={})", t1, t2);
    }
}
