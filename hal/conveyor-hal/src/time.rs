//! Time source abstraction

/// Monotonic millisecond clock
///
/// Never goes backwards. The firmware backs this with the embassy time
/// driver; tests back it with a simulated counter.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
