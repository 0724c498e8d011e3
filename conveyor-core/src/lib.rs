//! Board-agnostic control core for the conveyor transfer station
//!
//! This crate contains all control logic that does not depend on a
//! specific chip:
//!
//! - Debounced level watching for gate signals
//! - Speed profile record stored in non-volatile memory
//! - Controller timing and signal bindings
//! - Dual-speed motor controller (gate + stop/low sensors)
//! - Latching solenoid controller (gate only)
//! - Watchdog keep-alive for the supervisor
//!
//! Hardware access goes exclusively through the `conveyor-hal` traits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod debounce;
pub mod supervisor;

#[cfg(test)]
pub(crate) mod sim;

pub use config::{ControllerTiming, Deployment, SpeedProfile, SpeedStore};
pub use control::{DualSpeedController, LatchingController};
pub use debounce::{wait_for_level, Debouncer};
pub use supervisor::keep_alive;
