//! PWM channel driver
//!
//! One `PwmChannel` wraps one output of an RP2350 PWM slice. The counter
//! wraps at `PWM_TOP`, so a compare value of `u16::MAX` holds the output
//! high for the whole period and `0` holds it low.

use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;

/// Counter wrap value
pub const PWM_TOP: u16 = u16::MAX - 1;

/// Clock divider 4.5 (~510 Hz at 150 MHz)
pub const PWM_DIVIDER: U12F4 = U12F4::from_bits(0x48);

/// Slice output driven by a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmSide {
    A,
    B,
}

pub struct PwmChannel<'d> {
    pwm: Pwm<'d>,
    config: Config,
    side: PwmSide,
    duty: u16,
}

impl<'d> PwmChannel<'d> {
    /// Take over a configured slice output and park it at duty 0
    pub fn new(mut pwm: Pwm<'d>, side: PwmSide) -> Self {
        let mut config = Config::default();
        config.top = PWM_TOP;
        config.divider = PWM_DIVIDER;
        config.compare_a = 0;
        config.compare_b = 0;
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            side,
            duty: 0,
        }
    }
}

impl conveyor_hal::PwmOutput for PwmChannel<'_> {
    fn set_duty(&mut self, duty: u16) {
        match self.side {
            PwmSide::A => self.config.compare_a = duty,
            PwmSide::B => self.config.compare_b = duty,
        }
        self.pwm.set_config(&self.config);
        self.duty = duty;
    }

    fn duty(&self) -> u16 {
        self.duty
    }
}
