//! Signal bindings
//!
//! Which gate and sensors drive which actuator is decided once at startup
//! and never changes while controllers run. Re-binding produces a new
//! [`Deployment`]; the original is left as it was.

use heapless::Vec;

use super::timing::ControllerTiming;

/// Logical signal, sensor or actuator name (e.g. `"Sig14"`, `"S-IR5"`)
pub type SignalName = &'static str;

/// Maximum number of motor controllers
pub const MAX_MOTORS: usize = 2;

/// Maximum number of solenoid controllers
pub const MAX_SOLENOIDS: usize = 2;

/// Inputs driving one dual-speed motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorBinding {
    /// PWM actuator name
    pub motor: SignalName,
    /// Gate signal enabling the motor
    pub gate: SignalName,
    /// Sensor forcing a full stop
    pub stop_sensor: SignalName,
    /// Sensor selecting reduced speed
    pub low_sensor: SignalName,
}

/// Input driving one latching solenoid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SolenoidBinding {
    /// Binary actuator name
    pub solenoid: SignalName,
    /// Gate signal engaging the solenoid
    pub gate: SignalName,
}

/// Name-to-GPIO table for one class of board lines
#[derive(Debug, Clone, Copy)]
pub struct PinMap {
    entries: &'static [(SignalName, u8)],
}

impl PinMap {
    pub const fn new(entries: &'static [(SignalName, u8)]) -> Self {
        Self { entries }
    }

    /// GPIO number for `name`
    pub fn resolve(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, gpio)| *gpio)
    }

    /// Check if `name` is known
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// All entries in table order
    pub fn entries(&self) -> &'static [(SignalName, u8)] {
        self.entries
    }
}

/// Board line tables a deployment is checked against
#[derive(Debug, Clone, Copy)]
pub struct BoardMap {
    /// Gate signals (system I/O)
    pub signals: PinMap,
    /// Proximity sensors
    pub sensors: PinMap,
    /// PWM motor outputs
    pub motors: PinMap,
    /// Solenoid outputs
    pub solenoids: PinMap,
}

impl BoardMap {
    /// GPIO of a gate or sensor line
    pub fn resolve_input(&self, name: &str) -> Option<u8> {
        self.signals
            .resolve(name)
            .or_else(|| self.sensors.resolve(name))
    }
}

/// Binding problems found before any controller starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BindingError {
    /// Name not present on the board
    UnknownSignal(SignalName),
    /// No room for another controller
    TooManyBindings,
}

/// Immutable set of controller bindings plus their timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    motors: Vec<MotorBinding, MAX_MOTORS>,
    solenoids: Vec<SolenoidBinding, MAX_SOLENOIDS>,
    timing: ControllerTiming,
}

/// Installed machine: output and input belts
const DEFAULT_MOTORS: [MotorBinding; 2] = [
    MotorBinding {
        motor: "MotS",
        gate: "Sig14",
        stop_sensor: "S-IR5",
        low_sensor: "S-IR4",
    },
    MotorBinding {
        motor: "MotE",
        gate: "Sig2",
        stop_sensor: "E-IR1",
        low_sensor: "E-IR2",
    },
];

/// Installed machine: left solenoid only
const DEFAULT_SOLENOIDS: [SolenoidBinding; 1] = [SolenoidBinding {
    solenoid: "SoleL",
    gate: "Sig15",
}];

const _: () = assert!(DEFAULT_MOTORS.len() <= MAX_MOTORS);
const _: () = assert!(DEFAULT_SOLENOIDS.len() <= MAX_SOLENOIDS);

impl Default for Deployment {
    fn default() -> Self {
        Self {
            motors: DEFAULT_MOTORS.into_iter().collect(),
            solenoids: DEFAULT_SOLENOIDS.into_iter().collect(),
            timing: ControllerTiming::default(),
        }
    }
}

impl Deployment {
    /// Deployment with no controllers
    pub fn empty(timing: ControllerTiming) -> Self {
        Self {
            motors: Vec::new(),
            solenoids: Vec::new(),
            timing,
        }
    }

    pub fn motors(&self) -> &[MotorBinding] {
        &self.motors
    }

    pub fn solenoids(&self) -> &[SolenoidBinding] {
        &self.solenoids
    }

    pub fn timing(&self) -> ControllerTiming {
        self.timing
    }

    /// New deployment with `binding` replacing the one for the same motor,
    /// or added if that motor was unbound
    pub fn rebind_motor(&self, binding: MotorBinding) -> Result<Self, BindingError> {
        let mut next = self.clone();
        match next.motors.iter_mut().find(|m| m.motor == binding.motor) {
            Some(slot) => *slot = binding,
            None => next
                .motors
                .push(binding)
                .map_err(|_| BindingError::TooManyBindings)?,
        }
        Ok(next)
    }

    /// New deployment with `binding` replacing the one for the same
    /// solenoid, or added if that solenoid was unbound
    pub fn rebind_solenoid(&self, binding: SolenoidBinding) -> Result<Self, BindingError> {
        let mut next = self.clone();
        match next.solenoids.iter_mut().find(|s| s.solenoid == binding.solenoid) {
            Some(slot) => *slot = binding,
            None => next
                .solenoids
                .push(binding)
                .map_err(|_| BindingError::TooManyBindings)?,
        }
        Ok(next)
    }

    /// New deployment with other timing
    pub fn with_timing(&self, timing: ControllerTiming) -> Self {
        Self {
            timing,
            ..self.clone()
        }
    }

    /// Check every bound name against the board
    ///
    /// Actuator names are unique by construction: re-binding an actuator
    /// replaces its previous binding.
    pub fn check(&self, board: &BoardMap) -> Result<(), BindingError> {
        let known_input = |name: SignalName| {
            board
                .resolve_input(name)
                .map(|_| ())
                .ok_or(BindingError::UnknownSignal(name))
        };

        for m in &self.motors {
            if !board.motors.contains(m.motor) {
                return Err(BindingError::UnknownSignal(m.motor));
            }
            known_input(m.gate)?;
            known_input(m.stop_sensor)?;
            known_input(m.low_sensor)?;
        }

        for s in &self.solenoids {
            if !board.solenoids.contains(s.solenoid) {
                return Err(BindingError::UnknownSignal(s.solenoid));
            }
            known_input(s.gate)?;
        }

        Ok(())
    }
}
