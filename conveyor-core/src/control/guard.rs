//! Scoped "actuator is live" acquisition
//!
//! An [`ActuatorGuard`] is taken when a controller enters its active state.
//! Dropping it forces the actuator to its safe output and only then puts
//! the controller state back to idle. Drop runs on the normal exit path and
//! also when the controller future is dropped mid-cycle.

use core::ops::{Deref, DerefMut};

use conveyor_hal::{OutputPin, PwmOutput};

/// Live actuator borrowed from a controller
pub struct ActuatorGuard<'a, A, S: Copy> {
    actuator: &'a mut A,
    state: &'a mut S,
    idle: S,
    release: fn(&mut A),
}

impl<'a, P: PwmOutput, S: Copy> ActuatorGuard<'a, P, S> {
    /// Mark a PWM actuator live; release commands duty 0
    pub fn pwm(actuator: &'a mut P, state: &'a mut S, active: S, idle: S) -> Self {
        *state = active;
        Self {
            actuator,
            state,
            idle,
            release: |pwm| pwm.set_duty(0),
        }
    }
}

impl<'a, O: OutputPin, S: Copy> ActuatorGuard<'a, O, S> {
    /// Mark a binary actuator live; release drives it low
    pub fn binary(actuator: &'a mut O, state: &'a mut S, active: S, idle: S) -> Self {
        *state = active;
        Self {
            actuator,
            state,
            idle,
            release: |pin| pin.set_low(),
        }
    }
}

impl<A, S: Copy> Deref for ActuatorGuard<'_, A, S> {
    type Target = A;

    fn deref(&self) -> &A {
        &*self.actuator
    }
}

impl<A, S: Copy> DerefMut for ActuatorGuard<'_, A, S> {
    fn deref_mut(&mut self) -> &mut A {
        &mut *self.actuator
    }
}

impl<A, S: Copy> Drop for ActuatorGuard<'_, A, S> {
    fn drop(&mut self) {
        (self.release)(&mut *self.actuator);
        *self.state = self.idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RecordingOutput, RecordingPwm, SimClock};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        Idle,
        Live,
    }

    #[test]
    fn test_pwm_released_on_scope_exit() {
        let clock = SimClock::new();
        let mut pwm = RecordingPwm::new(&clock);
        let mut phase = Phase::Idle;

        {
            let mut live = ActuatorGuard::pwm(&mut pwm, &mut phase, Phase::Live, Phase::Idle);
            live.set_duty(40000);
            assert_eq!(live.duty(), 40000);
        }

        assert_eq!(pwm.duty(), 0);
        assert_eq!(phase, Phase::Idle);
    }

    #[test]
    fn test_binary_released_on_scope_exit() {
        let clock = SimClock::new();
        let mut out = RecordingOutput::new(&clock);
        let mut phase = Phase::Idle;

        {
            let mut live = ActuatorGuard::binary(&mut out, &mut phase, Phase::Live, Phase::Idle);
            live.set_high();
        }

        assert!(out.is_set_low());
        assert_eq!(phase, Phase::Idle);
        assert_eq!(out.log, vec![(0, true), (0, false)]);
    }

    #[test]
    fn test_state_is_active_while_held() {
        let clock = SimClock::new();
        let mut pwm = RecordingPwm::new(&clock);
        let mut phase = Phase::Idle;

        let live = ActuatorGuard::pwm(&mut pwm, &mut phase, Phase::Live, Phase::Idle);
        assert_eq!(*live.state, Phase::Live);
        drop(live);
        assert_eq!(phase, Phase::Idle);
    }
}
