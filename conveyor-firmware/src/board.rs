//! Board wiring for the transfer station controller (RP2350B)
//!
//! Signal lines come from the upstream system I/O connector and are pulled
//! down. Sensor returns are pulled up. Motors are driven through PWM,
//! solenoids through plain outputs.

use conveyor_core::config::{
    BindingError, BoardMap, MotorBinding, PinMap, SignalName, SolenoidBinding,
};
use conveyor_core::{ControllerTiming, DualSpeedController, LatchingController, SpeedProfile};
use conveyor_hal::InputPin;
use conveyor_hal_rp2350::{bank_pins, PinBank, PinError, PwmChannel, PwmSide, RpInput, RpOutput};
use defmt::*;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::{FLASH, WATCHDOG};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::{Peri, Peripherals};
use heapless::Vec;

use crate::tasks::{MotorController, SolenoidController};

/// System I/O signal lines
const SIGNALS: PinMap = PinMap::new(&[
    ("Sig23", 0),
    ("Sig21", 1),
    ("Sig16", 2),
    ("Sig15", 3),
    ("Sig14", 4),
    ("Sig12", 5),
    ("Sig11", 6),
    ("Sig1", 36),
    ("Sig2", 37),
    ("Sig3", 38),
    ("Sig10", 39),
]);

/// Sensor returns (S-* on the output belt, E-* on the input belt)
const SENSORS: PinMap = PinMap::new(&[
    ("SOTL", 10),
    ("SOTU", 25),
    ("S-IR1", 15),
    ("S-IR2", 9),
    ("S-IR3", 14),
    ("S-IR4", 8),
    ("S-IR5", 13),
    ("PMS", 21),
    ("E-IR1", 26),
    ("E-IR2", 19),
    ("E-IR3", 29),
    ("E-IR4", 23),
    ("E-IR5", 28),
    ("E-IR6", 20),
    ("E-IR7", 22),
    ("E-IR8", 27),
]);

const MOTORS: PinMap = PinMap::new(&[("MotS", 35), ("MotE", 32)]);

const SOLENOIDS: PinMap = PinMap::new(&[("SoleL", 31), ("SoleR", 30)]);

pub const BOARD: BoardMap = BoardMap {
    signals: SIGNALS,
    sensors: SENSORS,
    motors: MOTORS,
    solenoids: SOLENOIDS,
};

const MAX_INPUTS: usize = 32;
const MAX_ACTUATORS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum BoardError {
    Pin(PinError),
    Binding(BindingError),
    /// Name not found among the configured lines
    Missing(SignalName),
    /// Too many lines for the fixed-capacity tables
    Capacity,
}

impl From<PinError> for BoardError {
    fn from(e: PinError) -> Self {
        BoardError::Pin(e)
    }
}

impl From<BindingError> for BoardError {
    fn from(e: BindingError) -> Self {
        BoardError::Binding(e)
    }
}

/// Every configured input line, by name
///
/// Lives in a `StaticCell` so controllers can share lines by reference.
pub struct Inputs {
    lines: Vec<(SignalName, RpInput<'static>), MAX_INPUTS>,
}

impl Inputs {
    pub fn get(&'static self, name: SignalName) -> Result<&'static RpInput<'static>, BoardError> {
        self.lines
            .iter()
            .find(|(line, _)| *line == name)
            .map(|(_, input)| input)
            .ok_or(BoardError::Missing(name))
    }

    /// Log the level of every input line
    pub fn log_levels(&self) {
        for (name, input) in &self.lines {
            debug!("{}: {}", name, input.is_high());
        }
    }
}

/// Owned actuators waiting to be handed to a controller
pub struct Actuators<T> {
    slots: Vec<(SignalName, Option<T>), MAX_ACTUATORS>,
}

impl<T> Actuators<T> {
    fn new() -> Self {
        Self { slots: Vec::new() }
    }

    fn push(&mut self, name: SignalName, actuator: T) -> Result<(), BoardError> {
        self.slots
            .push((name, Some(actuator)))
            .map_err(|_| BoardError::Capacity)
    }

    /// Move an actuator out; each name can be taken once
    pub fn take(&mut self, name: SignalName) -> Result<T, BoardError> {
        self.slots
            .iter_mut()
            .find(|(slot, _)| *slot == name)
            .and_then(|(_, actuator)| actuator.take())
            .ok_or(BoardError::Missing(name))
    }

    /// Names of actuators no controller took
    pub fn unbound(&self) -> impl Iterator<Item = SignalName> + '_ {
        self.slots
            .iter()
            .filter(|(_, actuator)| actuator.is_some())
            .map(|(name, _)| *name)
    }
}

/// Board peripherals, configured and parked in their safe state
pub struct Hardware {
    pub inputs: Inputs,
    pub motors: Actuators<PwmChannel<'static>>,
    pub solenoids: Actuators<RpOutput<'static>>,
    pub flash: Peri<'static, FLASH>,
    pub watchdog: Peri<'static, WATCHDOG>,
}

impl Hardware {
    /// Configure every board line
    ///
    /// Motors start at duty 0 and solenoids low before any controller runs.
    pub fn new(p: Peripherals) -> Result<Self, BoardError> {
        let mut motors = Actuators::new();
        motors.push(
            "MotS",
            PwmChannel::new(
                Pwm::new_output_b(p.PWM_SLICE9, p.PIN_35, PwmConfig::default()),
                PwmSide::B,
            ),
        )?;
        motors.push(
            "MotE",
            PwmChannel::new(
                Pwm::new_output_a(p.PWM_SLICE8, p.PIN_32, PwmConfig::default()),
                PwmSide::A,
            ),
        )?;

        let mut bank = PinBank::new();
        bank_pins!(bank, p, [
            0 => PIN_0, 1 => PIN_1, 2 => PIN_2, 3 => PIN_3, 4 => PIN_4,
            5 => PIN_5, 6 => PIN_6, 36 => PIN_36, 37 => PIN_37, 38 => PIN_38,
            39 => PIN_39,
        ]);
        bank_pins!(bank, p, [
            8 => PIN_8, 9 => PIN_9, 10 => PIN_10, 13 => PIN_13, 14 => PIN_14,
            15 => PIN_15, 19 => PIN_19, 20 => PIN_20, 21 => PIN_21, 22 => PIN_22,
            23 => PIN_23, 25 => PIN_25, 26 => PIN_26, 27 => PIN_27, 28 => PIN_28,
            29 => PIN_29,
        ]);
        bank_pins!(bank, p, [30 => PIN_30, 31 => PIN_31]);

        let mut lines = Vec::new();
        for &(name, gpio) in SIGNALS.entries() {
            let input = RpInput::new(bank.take(gpio)?, Pull::Down);
            lines.push((name, input)).map_err(|_| BoardError::Capacity)?;
        }
        for &(name, gpio) in SENSORS.entries() {
            let input = RpInput::new(bank.take(gpio)?, Pull::Up);
            lines.push((name, input)).map_err(|_| BoardError::Capacity)?;
        }

        let mut solenoids = Actuators::new();
        for &(name, gpio) in SOLENOIDS.entries() {
            solenoids.push(name, RpOutput::new(bank.take(gpio)?))?;
        }

        Ok(Self {
            inputs: Inputs { lines },
            motors,
            solenoids,
            flash: p.FLASH,
            watchdog: p.WATCHDOG,
        })
    }
}

/// Wire a motor binding to its lines
pub fn motor_controller(
    inputs: &'static Inputs,
    motors: &mut Actuators<PwmChannel<'static>>,
    binding: &MotorBinding,
    profile: SpeedProfile,
    timing: ControllerTiming,
) -> Result<MotorController, BoardError> {
    Ok(DualSpeedController::new(
        inputs.get(binding.gate)?,
        inputs.get(binding.stop_sensor)?,
        inputs.get(binding.low_sensor)?,
        motors.take(binding.motor)?,
        profile,
        timing,
    ))
}

/// Wire a solenoid binding to its lines
pub fn solenoid_controller(
    inputs: &'static Inputs,
    solenoids: &mut Actuators<RpOutput<'static>>,
    binding: &SolenoidBinding,
    timing: ControllerTiming,
) -> Result<SolenoidController, BoardError> {
    Ok(LatchingController::new(
        inputs.get(binding.gate)?,
        solenoids.take(binding.solenoid)?,
        timing,
    ))
}
