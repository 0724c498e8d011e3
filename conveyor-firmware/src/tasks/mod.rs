//! Embassy async tasks
//!
//! One task per controller. Tasks share nothing but read-only input lines.

pub mod motor;
pub mod solenoid;

pub use motor::{motor_task, MotorController};
pub use solenoid::{solenoid_task, SolenoidController};
