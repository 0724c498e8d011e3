//! Configuration types
//!
//! The calibrated speed record persisted in NVM, controller timing, and the
//! immutable table binding named signals to controllers.

pub mod deployment;
pub mod speed;
pub mod store;
pub mod timing;

pub use deployment::*;
pub use speed::*;
pub use store::*;
pub use timing::*;
