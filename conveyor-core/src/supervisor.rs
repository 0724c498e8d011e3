//! Supervisor keep-alive loop
//!
//! Controller tasks only reach their safe output through normal control
//! flow. A panic or fault stops the executor instead, so the supervisor
//! feeds a hardware watchdog: once it stops being fed, the chip resets and
//! every actuator line falls back to an input.

use conveyor_hal::{Clock, Watchdog};
use embedded_hal_async::delay::DelayNs;

/// Watchdog countdown started by the firmware
pub const WATCHDOG_TIMEOUT_MS: u32 = 500;

/// Interval between two feeds
pub const FEED_PERIOD_MS: u32 = 100;

/// Interval between two heartbeat callbacks
pub const HEARTBEAT_PERIOD_MS: u64 = 60_000;

const _: () = assert!(FEED_PERIOD_MS < WATCHDOG_TIMEOUT_MS);

/// Feed `watchdog` forever, calling `heartbeat` with the uptime once per
/// [`HEARTBEAT_PERIOD_MS`]
///
/// Feeding happens between executor polls, so a task that stops yielding
/// also lets the watchdog expire.
pub async fn keep_alive<W, C, D, H>(watchdog: &mut W, clock: &C, delay: &mut D, mut heartbeat: H)
where
    W: Watchdog,
    C: Clock,
    D: DelayNs,
    H: FnMut(u64),
{
    let mut next_heartbeat_ms = clock.now_ms() + HEARTBEAT_PERIOD_MS;
    loop {
        watchdog.feed();

        let now_ms = clock.now_ms();
        if now_ms >= next_heartbeat_ms {
            heartbeat(now_ms);
            next_heartbeat_ms = now_ms + HEARTBEAT_PERIOD_MS;
        }

        delay.delay_ms(FEED_PERIOD_MS).await;
    }
}
