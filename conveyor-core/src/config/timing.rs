//! Controller timing

use crate::debounce::SAMPLE_INTERVAL_MS;

/// Default sensor polling period of a running motor
pub const DEFAULT_POLL_PERIOD_MS: u32 = 20;

/// Default gate debounce duration
pub const DEFAULT_DEBOUNCE_MS: u32 = 2;

/// Timing shared by all controllers of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerTiming {
    /// Period between two sensor checks while a motor runs (ms)
    pub poll_period_ms: u32,
    /// Time a gate level must hold before it counts (ms, 0 = no filtering)
    pub debounce_ms: u32,
}

impl Default for ControllerTiming {
    fn default() -> Self {
        Self {
            poll_period_ms: DEFAULT_POLL_PERIOD_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl ControllerTiming {
    /// Same timing with another polling period
    pub const fn with_poll_period_ms(self, poll_period_ms: u32) -> Self {
        Self {
            poll_period_ms,
            ..self
        }
    }

    /// Same timing with another debounce duration
    pub const fn with_debounce_ms(self, debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            ..self
        }
    }

    /// Polling period actually used, never shorter than one gate sample
    pub fn effective_poll_period_ms(&self) -> u32 {
        self.poll_period_ms.max(SAMPLE_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_return_new_values() {
        let base = ControllerTiming::default();
        let tuned = base.with_poll_period_ms(50).with_debounce_ms(0);

        assert_eq!(base.poll_period_ms, 20);
        assert_eq!(base.debounce_ms, 2);
        assert_eq!(tuned.poll_period_ms, 50);
        assert_eq!(tuned.debounce_ms, 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let timing = ControllerTiming::default().with_poll_period_ms(0);
        assert_eq!(timing.effective_poll_period_ms(), SAMPLE_INTERVAL_MS);
    }
}
