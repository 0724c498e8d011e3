//! Debounced level watching
//!
//! A level is confirmed once every sample has matched it for a continuous
//! span of at least the debounce duration. A single mismatching sample
//! restarts the span from zero.

use conveyor_hal::{Clock, InputPin};
use embedded_hal_async::delay::DelayNs;

/// Interval between two samples of a watched input
pub const SAMPLE_INTERVAL_MS: u32 = 1;

/// Tick-driven debounce filter for one target level
///
/// Feed it one sample per tick with [`Debouncer::sample`]; it reports `true`
/// once the target level has held for `debounce_ms`. With `debounce_ms == 0`
/// the first matching sample confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    target: bool,
    debounce_ms: u32,
    /// Timestamp of the first sample of the current matching run
    run_start_ms: Option<u64>,
}

impl Debouncer {
    /// Create a filter waiting for `target` to hold for `debounce_ms`
    pub const fn new(target: bool, debounce_ms: u32) -> Self {
        Self {
            target,
            debounce_ms,
            run_start_ms: None,
        }
    }

    /// Check if a matching run is in progress
    pub fn is_tracking(&self) -> bool {
        self.run_start_ms.is_some()
    }

    /// Feed one sample taken at `now_ms`
    ///
    /// Returns `true` when the target level is confirmed.
    pub fn sample(&mut self, level: bool, now_ms: u64) -> bool {
        if level != self.target {
            self.run_start_ms = None;
            return false;
        }

        let start = *self.run_start_ms.get_or_insert(now_ms);
        now_ms.saturating_sub(start) >= u64::from(self.debounce_ms)
    }

    /// Forget the current run
    pub fn reset(&mut self) {
        self.run_start_ms = None;
    }
}

/// Wait until `pin` has read `level` continuously for `debounce_ms`
///
/// Samples every [`SAMPLE_INTERVAL_MS`]. Never times out.
pub async fn wait_for_level<P, C, D>(
    pin: &P,
    level: bool,
    debounce_ms: u32,
    clock: &C,
    delay: &mut D,
) where
    P: InputPin,
    C: Clock,
    D: DelayNs,
{
    let mut debouncer = Debouncer::new(level, debounce_ms);
    loop {
        if debouncer.sample(pin.is_high(), clock.now_ms()) {
            return;
        }
        delay.delay_ms(SAMPLE_INTERVAL_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimClock, SimDelay, TraceInput};
    use embassy_futures::block_on;
    use proptest::prelude::*;

    /// Time of the first sample index at which `levels` holds `target`
    /// for `debounce_ms` (one sample per millisecond)
    fn expected_confirmation(levels: &[bool], target: bool, debounce_ms: u32) -> Option<usize> {
        let mut run_start = None;
        for (t, &level) in levels.iter().enumerate() {
            if level == target {
                let start = *run_start.get_or_insert(t);
                if t - start >= debounce_ms as usize {
                    return Some(t);
                }
            } else {
                run_start = None;
            }
        }
        None
    }

    #[test]
    fn test_confirms_after_stable_span() {
        let mut d = Debouncer::new(true, 2);
        assert!(!d.sample(true, 10));
        assert!(!d.sample(true, 11));
        assert!(d.sample(true, 12));
    }

    #[test]
    fn test_zero_debounce_confirms_first_match() {
        let mut d = Debouncer::new(false, 0);
        assert!(!d.sample(true, 0));
        assert!(d.sample(false, 1));
    }

    #[test]
    fn test_glitch_restarts_span() {
        let mut d = Debouncer::new(true, 3);
        assert!(!d.sample(true, 0));
        assert!(!d.sample(true, 1));
        assert!(!d.sample(true, 2));
        // One flicker just before the threshold
        assert!(!d.sample(false, 3));
        assert!(!d.is_tracking());
        assert!(!d.sample(true, 4));
        assert!(!d.sample(true, 5));
        assert!(!d.sample(true, 6));
        assert!(d.sample(true, 7));
    }

    #[test]
    fn test_reset_forgets_run() {
        let mut d = Debouncer::new(true, 5);
        d.sample(true, 0);
        d.reset();
        assert!(!d.sample(true, 5));
        assert!(d.sample(true, 10));
    }

    #[test]
    fn test_wait_for_level_returns_at_threshold() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        let pin = TraceInput::new(&clock, false).at(7, true);

        block_on(wait_for_level(&pin, true, 2, &clock, &mut delay));

        assert_eq!(clock.now_ms(), 9);
    }

    #[test]
    fn test_wait_for_level_glitch_delays_confirmation() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        let pin = TraceInput::new(&clock, false)
            .at(5, true)
            .at(6, false)
            .at(7, true);

        block_on(wait_for_level(&pin, true, 2, &clock, &mut delay));

        // Run restarts at 7, not resumed from 5
        assert_eq!(clock.now_ms(), 9);
    }

    #[test]
    fn test_wait_for_level_without_debounce() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        let pin = TraceInput::new(&clock, true).at(4, false);

        block_on(wait_for_level(&pin, false, 0, &clock, &mut delay));

        assert_eq!(clock.now_ms(), 4);
    }

    proptest! {
        #[test]
        fn prop_sample_matches_reference(
            levels in proptest::collection::vec(any::<bool>(), 1..200),
            target in any::<bool>(),
            debounce_ms in 0u32..10,
        ) {
            let mut d = Debouncer::new(target, debounce_ms);
            let confirmed = levels
                .iter()
                .enumerate()
                .position(|(t, &level)| d.sample(level, t as u64));
            prop_assert_eq!(confirmed, expected_confirmation(&levels, target, debounce_ms));
        }

        #[test]
        fn prop_held_level_confirms_within_one_sample(
            edge_ms in 0u64..50,
            debounce_ms in 0u32..20,
        ) {
            let clock = SimClock::new();
            let mut delay = SimDelay::new(&clock);
            let pin = TraceInput::new(&clock, false).at(edge_ms, true);

            block_on(wait_for_level(&pin, true, debounce_ms, &clock, &mut delay));

            let held_until = edge_ms + u64::from(debounce_ms);
            prop_assert!(clock.now_ms() >= held_until);
            prop_assert!(clock.now_ms() <= held_until + u64::from(SAMPLE_INTERVAL_MS));
        }
    }
}
