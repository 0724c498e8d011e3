//! Actuator controllers
//!
//! One controller per actuator, each owning its actuator handle. Handles
//! are moved in, so the same actuator cannot end up in two controllers.

pub mod dual_speed;
pub mod guard;
pub mod latching;

pub use dual_speed::{select_duty, DualSpeedController, DualSpeedState};
pub use guard::ActuatorGuard;
pub use latching::{LatchingController, LatchingState};
