//! Conveyor Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the control core depends on.
//! Chip-specific HALs implement them so the core never sees a pin number,
//! a PWM slice or a flash sector.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  conveyor-firmware (supervisor, tasks)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  conveyor-core (debounce, controllers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  conveyor-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            ┌─────────────────┐
//!            │ conveyor-hal-   │
//!            │    rp2350       │
//!            └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`gpio::OutputPin`] - Digital I/O
//! - [`pwm::PwmOutput`] - Duty-cycle outputs
//! - [`nvm::NvmStorage`] - Raw non-volatile byte storage
//! - [`time::Clock`] - Monotonic millisecond clock
//! - [`watchdog::Watchdog`] - Reset on stall

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod nvm;
pub mod pwm;
pub mod time;
pub mod watchdog;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use nvm::{NvmError, NvmStorage};
pub use pwm::{PwmOutput, MAX_DUTY};
pub use time::Clock;
pub use watchdog::Watchdog;
