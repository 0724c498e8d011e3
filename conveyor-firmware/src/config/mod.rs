//! Startup configuration
//!
//! Everything here is resolved once, before any controller task runs:
//! the binding table (with optional build-time timing overrides) and the
//! calibrated motor speeds from flash.

mod deployment;
mod speeds;

pub use deployment::deployment;
pub use speeds::{apply_bench_calibration, load_profile};
