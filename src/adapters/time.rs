//! Monotonic time adapter.
//!
//! - **espidf** — wraps `esp_timer_get_time()` (microsecond precision,
//!   monotonic) and the ESP-IDF blocking delays.
//! - **host** — `std::time::Instant` and `std::thread::sleep` for tests
//!   and simulation.

use crate::app::ports::TimePort;

pub struct EspTimeAdapter {
    #[cfg(not(feature = "espidf"))]
    start: std::time::Instant,
}

impl EspTimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(feature = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl Default for EspTimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimePort for EspTimeAdapter {
    #[cfg(feature = "espidf")]
    fn now_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time is a monotonic counter read.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    #[cfg(not(feature = "espidf"))]
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }

    #[cfg(feature = "espidf")]
    fn delay_us(&self, us: u32) {
        esp_idf_hal::delay::Delay::new_default().delay_us(us);
    }

    #[cfg(not(feature = "espidf"))]
    fn delay_us(&self, us: u32) {
        std::thread::sleep(std::time::Duration::from_micros(u64::from(us)));
    }

    #[cfg(feature = "espidf")]
    fn delay_ms(&self, ms: u32) {
        esp_idf_hal::delay::Delay::new_default().delay_ms(ms);
    }

    #[cfg(not(feature = "espidf"))]
    fn delay_ms(&self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(all(test, not(feature = "espidf")))]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        let t = EspTimeAdapter::new();
        let a = t.now_us();
        let b = t.now_us();
        assert!(b >= a);
    }
}
