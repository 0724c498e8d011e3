//! Dual-speed motor controller
//!
//! A belt motor that runs while its gate signal is high. While running,
//! two proximity sensors pick the speed at every polling period:
//!
//! | stop | low | duty           |
//! |------|-----|----------------|
//! | 1    | x   | 0              |
//! | 0    | 1   | `profile.low`  |
//! | 0    | 0   | `profile.high` |
//!
//! Only the gate is debounced; the sensors are read as-is at each poll.

use conveyor_hal::{Clock, InputPin, PwmOutput};
use embedded_hal_async::delay::DelayNs;

use super::guard::ActuatorGuard;
use crate::config::{ControllerTiming, SpeedLevel, SpeedProfile};
use crate::debounce::{wait_for_level, Debouncer, SAMPLE_INTERVAL_MS};

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DualSpeedState {
    /// Gate low, motor stopped
    Idle,
    /// Gate high, duty follows the sensors
    Running,
}

/// Duty cycle for the current sensor readings
///
/// Always one of `0`, `profile.low()` or `profile.high()`.
pub fn select_duty(profile: SpeedProfile, stop: bool, low: bool) -> u16 {
    profile.duty_for(SpeedLevel::from_sensors(stop, low))
}

/// Gate-driven motor with stop and low-speed sensors
pub struct DualSpeedController<G, S, L, M> {
    gate: G,
    stop_sensor: S,
    low_sensor: L,
    motor: M,
    profile: SpeedProfile,
    timing: ControllerTiming,
    state: DualSpeedState,
}

impl<G, S, L, M> DualSpeedController<G, S, L, M>
where
    G: InputPin,
    S: InputPin,
    L: InputPin,
    M: PwmOutput,
{
    /// Create an idle controller; the motor is stopped immediately
    pub fn new(
        gate: G,
        stop_sensor: S,
        low_sensor: L,
        mut motor: M,
        profile: SpeedProfile,
        timing: ControllerTiming,
    ) -> Self {
        motor.set_duty(0);
        Self {
            gate,
            stop_sensor,
            low_sensor,
            motor,
            profile,
            timing,
            state: DualSpeedState::Idle,
        }
    }

    pub fn state(&self) -> DualSpeedState {
        self.state
    }

    pub fn profile(&self) -> SpeedProfile {
        self.profile
    }

    pub fn timing(&self) -> ControllerTiming {
        self.timing
    }

    /// The owned motor output (read-only)
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Wait in `Idle` until the gate is confirmed high
    pub async fn wait_for_gate<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        wait_for_level(&self.gate, true, self.timing.debounce_ms, clock, delay).await;
    }

    /// Run the motor until the gate is confirmed low
    ///
    /// The first duty is commanded on entry, then once per polling period.
    /// The gate is sampled every millisecond in between. On return, or if
    /// this future is dropped, the motor is at duty 0 and the state is
    /// `Idle`.
    pub async fn drive<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        let profile = self.profile;
        let period_ms = u64::from(self.timing.effective_poll_period_ms());
        let mut gate_low = Debouncer::new(false, self.timing.debounce_ms);

        let mut motor = ActuatorGuard::pwm(
            &mut self.motor,
            &mut self.state,
            DualSpeedState::Running,
            DualSpeedState::Idle,
        );

        let mut next_poll_ms = clock.now_ms();
        loop {
            let now_ms = clock.now_ms();
            if gate_low.sample(self.gate.is_high(), now_ms) {
                break;
            }

            if now_ms >= next_poll_ms {
                let duty = select_duty(
                    profile,
                    self.stop_sensor.is_high(),
                    self.low_sensor.is_high(),
                );
                motor.set_duty(duty);
                next_poll_ms = now_ms + period_ms;
            }

            delay.delay_ms(SAMPLE_INTERVAL_MS).await;
        }
    }

    /// One full `Idle -> Running -> Idle` cycle
    pub async fn run_cycle<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        self.wait_for_gate(clock, delay).await;
        self.drive(clock, delay).await;
    }

    /// Alternate between `Idle` and `Running` forever
    pub async fn run<C: Clock, D: DelayNs>(&mut self, clock: &C, delay: &mut D) {
        loop {
            self.run_cycle(clock, delay).await;
        }
    }
}
