//! RP2350-specific HAL for the conveyor firmware
//!
//! Implements the `conveyor-hal` traits on top of `embassy-rp`:
//!
//! - GPIO inputs and binary outputs
//! - Pin bank for taking pins by GPIO number at startup
//! - PWM channels with a 16-bit duty range
//! - Flash-backed NVM region (implements `conveyor_hal::NvmStorage`)
//! - Monotonic clock from `embassy-time`
//! - Hardware watchdog (implements `conveyor_hal::Watchdog`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod pins;
pub mod pwm;
pub mod time;
pub mod watchdog;

pub use flash::FlashNvm;
pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError};
pub use pwm::{PwmChannel, PwmSide};
pub use time::EmbassyClock;
pub use watchdog::RpWatchdog;
