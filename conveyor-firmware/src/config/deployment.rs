//! Binding table with build-time timing overrides
//!
//! `CONVEYOR_POLL_MS` and `CONVEYOR_DEBOUNCE_MS` replace the default
//! controller timing when set at build time.

use conveyor_core::{ControllerTiming, Deployment};
use defmt::*;

fn env_ms(value: Option<&'static str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse().ok())
}

pub fn deployment() -> Deployment {
    let mut timing = ControllerTiming::default();

    if let Some(ms) = env_ms(option_env!("CONVEYOR_POLL_MS")) {
        timing = timing.with_poll_period_ms(ms);
    }
    if let Some(ms) = env_ms(option_env!("CONVEYOR_DEBOUNCE_MS")) {
        timing = timing.with_debounce_ms(ms);
    }

    info!(
        "Timing: poll={}ms, debounce={}ms",
        timing.effective_poll_period_ms(),
        timing.debounce_ms
    );

    Deployment::default().with_timing(timing)
}
