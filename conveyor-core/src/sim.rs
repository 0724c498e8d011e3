//! Simulated hardware for host tests
//!
//! Time only moves when a controller awaits [`SimDelay`], so every test is
//! deterministic. Inputs replay a trace of timestamped edges; outputs record
//! every command with the time it was issued.

use core::cell::Cell;

use conveyor_hal::nvm::check_bounds;
use conveyor_hal::{Clock, InputPin, NvmError, NvmStorage, OutputPin, PwmOutput, Watchdog};
use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;

/// Simulated monotonic clock
pub struct SimClock {
    now_ns: Cell<u64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now_ns: Cell::new(0) }
    }

    pub fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }
}

/// Delay that advances the simulated clock and yields once
pub struct SimDelay<'a> {
    clock: &'a SimClock,
}

impl<'a> SimDelay<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self { clock }
    }
}

impl DelayNs for SimDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
        yield_now().await;
    }
}

/// Resolve once the simulated clock reaches `ms`
pub async fn until(clock: &SimClock, ms: u64) {
    while clock.now_ms() < ms {
        yield_now().await;
    }
}

/// Input replaying a level trace against the simulated clock
pub struct TraceInput<'a> {
    clock: &'a SimClock,
    initial: bool,
    edges: Vec<(u64, bool)>,
}

impl<'a> TraceInput<'a> {
    pub fn new(clock: &'a SimClock, initial: bool) -> Self {
        Self {
            clock,
            initial,
            edges: Vec::new(),
        }
    }

    /// Switch to `level` at `ms` (edges must be added in time order)
    pub fn at(mut self, ms: u64, level: bool) -> Self {
        self.edges.push((ms, level));
        self
    }
}

impl InputPin for TraceInput<'_> {
    fn is_high(&self) -> bool {
        let now = self.clock.now_ms();
        self.edges
            .iter()
            .take_while(|(at, _)| *at <= now)
            .last()
            .map_or(self.initial, |(_, level)| *level)
    }
}

/// PWM output recording every commanded duty
pub struct RecordingPwm<'a> {
    clock: &'a SimClock,
    duty: u16,
    pub log: Vec<(u64, u16)>,
}

impl<'a> RecordingPwm<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            duty: 0,
            log: Vec::new(),
        }
    }

    /// First time `duty` was commanded, if ever
    pub fn first_time_of(&self, duty: u16) -> Option<u64> {
        self.log.iter().find(|(_, d)| *d == duty).map(|(t, _)| *t)
    }
}

impl PwmOutput for RecordingPwm<'_> {
    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
        self.log.push((self.clock.now_ms(), duty));
    }

    fn duty(&self) -> u16 {
        self.duty
    }
}

/// Binary output recording every level change
pub struct RecordingOutput<'a> {
    clock: &'a SimClock,
    high: bool,
    pub log: Vec<(u64, bool)>,
}

impl<'a> RecordingOutput<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            high: false,
            log: Vec::new(),
        }
    }
}

impl OutputPin for RecordingOutput<'_> {
    fn set_high(&mut self) {
        self.high = true;
        self.log.push((self.clock.now_ms(), true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.push((self.clock.now_ms(), false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Watchdog recording the time of every feed
pub struct RecordingWatchdog<'a> {
    clock: &'a SimClock,
    pub feeds: Vec<u64>,
}

impl<'a> RecordingWatchdog<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            feeds: Vec::new(),
        }
    }
}

impl Watchdog for RecordingWatchdog<'_> {
    fn feed(&mut self) {
        self.feeds.push(self.clock.now_ms());
    }
}

/// RAM-backed NVM region, erased (`0xFF`) on creation
pub struct MemoryNvm<const N: usize> {
    pub bytes: [u8; N],
    pub writes: usize,
}

impl<const N: usize> MemoryNvm<N> {
    pub fn erased() -> Self {
        Self {
            bytes: [0xFF; N],
            writes: 0,
        }
    }
}

impl<const N: usize> NvmStorage for MemoryNvm<N> {
    async fn read(&mut self, offset: u32, buffer: &mut [u8]) -> Result<(), NvmError> {
        check_bounds(offset, buffer.len(), N)?;
        let start = offset as usize;
        buffer.copy_from_slice(&self.bytes[start..start + buffer.len()]);
        Ok(())
    }

    async fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), NvmError> {
        check_bounds(offset, data.len(), N)?;
        let start = offset as usize;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        self.writes += 1;
        Ok(())
    }

    fn capacity(&self) -> usize {
        N
    }
}
