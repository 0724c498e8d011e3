//! Hardware watchdog abstraction

/// Started watchdog that resets the chip unless fed in time
///
/// A reset returns every GPIO to its power-on input state, which is the
/// only safe-output path left once the executor has stopped running.
pub trait Watchdog {
    /// Restart the countdown
    fn feed(&mut self);
}
