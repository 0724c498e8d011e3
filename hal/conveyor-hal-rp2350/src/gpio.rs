//! GPIO wrappers implementing the `conveyor-hal` pin traits

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Digital input (gate signal or proximity sensor)
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl conveyor_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Push-pull output, low on creation
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl conveyor_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
