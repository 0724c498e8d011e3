//! Monotonic clock backed by the embassy time driver

use embassy_time::Instant;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl conveyor_hal::Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
