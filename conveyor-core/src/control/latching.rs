//! Latching solenoid controller
//!
//! The output follows the debounced gate: energized while the gate is
//! high, released when it is confirmed low. No sensors, no polling.

use conveyor_hal::{Clock, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

use super::guard::ActuatorGuard;
use crate::config::ControllerTiming;
use crate::debounce::wait_for_level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchingState {
    Idle,
    Engaged,
}

/// Gate-driven binary output
pub struct LatchingController<G, O> {
    gate: G,
    output: O,
    timing: ControllerTiming,
    state: LatchingState,
}

impl<G: InputPin, O: OutputPin> LatchingController<G, O> {
    /// Create an idle controller; the output is driven low immediately
    pub fn new(gate: G, mut output: O, timing: ControllerTiming) -> Self {
        output.set_low();
        Self {
            gate,
            output,
            timing,
            state: LatchingState::Idle,
        }
    }

    pub fn state(&self) -> LatchingState {
        self.state
    }

    pub fn timing(&self) -> ControllerTiming {
        self.timing
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Wait in `Idle` until the gate is confirmed high
    pub async fn wait_for_gate<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        wait_for_level(&self.gate, true, self.timing.debounce_ms, clock, delay).await;
    }

    /// Energize the output until the gate is confirmed low
    ///
    /// The output is low and the state `Idle` once this returns or is
    /// dropped.
    pub async fn hold<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        let mut output = ActuatorGuard::binary(
            &mut self.output,
            &mut self.state,
            LatchingState::Engaged,
            LatchingState::Idle,
        );
        output.set_high();

        wait_for_level(&self.gate, false, self.timing.debounce_ms, clock, delay).await;
    }

    /// One full `Idle -> Engaged -> Idle` cycle
    pub async fn run_cycle<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        self.wait_for_gate(clock, delay).await;
        self.hold(clock, delay).await;
    }

    /// Alternate between `Idle` and `Engaged` forever
    pub async fn run<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        loop {
            self.run_cycle(clock, delay).await;
        }
    }
}
