//! RP2350 hardware watchdog
//!
//! A watchdog reset goes through the power-on state machine, so PWM slices
//! stop and every GPIO returns to a high-impedance input.

use embassy_rp::peripherals::WATCHDOG;
use embassy_rp::watchdog::Watchdog;
use embassy_rp::Peri;
use embassy_time::Duration;

pub struct RpWatchdog {
    watchdog: Watchdog,
}

impl RpWatchdog {
    /// Start the countdown; the chip resets unless fed within `timeout_ms`
    pub fn start(peri: Peri<'static, WATCHDOG>, timeout_ms: u32) -> Self {
        let mut watchdog = Watchdog::new(peri);
        watchdog.start(Duration::from_millis(u64::from(timeout_ms)));
        Self { watchdog }
    }
}

impl conveyor_hal::Watchdog for RpWatchdog {
    fn feed(&mut self) {
        self.watchdog.feed();
    }
}
