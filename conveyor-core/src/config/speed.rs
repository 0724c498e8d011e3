//! Speed profile and its persisted record
//!
//! The record occupies the first 12 bytes of the NVM region:
//!
//! | Offset | Field | Encoding |
//! |--------|-------|----------|
//! | 0 | magic | u32 LE, must be [`SPEED_RECORD_MAGIC`] |
//! | 4 | low   | u32 LE, `0..=65535` |
//! | 8 | high  | u32 LE, `0..=65535` |

/// Magic number identifying a written speed record
pub const SPEED_RECORD_MAGIC: u32 = 0x0FAB;

/// Value of a never-written (erased flash) word
pub const ERASED_WORD: u32 = 0xFFFF_FFFF;

/// Size of the persisted record in bytes
pub const RECORD_LEN: usize = 12;

/// Low speed used when no valid record is stored
pub const DEFAULT_LOW_DUTY: u16 = 32000;

/// High speed used when no valid record is stored
pub const DEFAULT_HIGH_DUTY: u16 = 64000;

/// Calibrated duty cycles for reduced and full speed
///
/// Loaded once at startup and handed by value to every motor controller.
/// There is no setter: a new calibration only takes effect after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedProfile {
    low: u16,
    high: u16,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_DUTY, DEFAULT_HIGH_DUTY)
    }
}

impl SpeedProfile {
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Validate operator-supplied speeds
    ///
    /// The low bound is checked first.
    pub fn try_new(low: i32, high: i32) -> Result<Self, ValidationError> {
        let low = u16::try_from(low).map_err(|_| ValidationError::LowOutOfRange(low))?;
        let high = u16::try_from(high).map_err(|_| ValidationError::HighOutOfRange(high))?;
        Ok(Self { low, high })
    }

    /// Reduced speed duty cycle
    pub const fn low(&self) -> u16 {
        self.low
    }

    /// Full speed duty cycle
    pub const fn high(&self) -> u16 {
        self.high
    }

    /// Duty cycle for a speed level
    pub const fn duty_for(&self, level: SpeedLevel) -> u16 {
        match level {
            SpeedLevel::Stop => 0,
            SpeedLevel::Low => self.low,
            SpeedLevel::High => self.high,
        }
    }
}

/// Speed a motor should run at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedLevel {
    /// Fully stopped (duty 0)
    Stop,
    /// Reduced speed
    Low,
    /// Full speed
    High,
}

impl SpeedLevel {
    /// Pick a level from the stop and low sensors
    ///
    /// The stop sensor wins over the low sensor.
    pub const fn from_sensors(stop: bool, low: bool) -> Self {
        if stop {
            SpeedLevel::Stop
        } else if low {
            SpeedLevel::Low
        } else {
            SpeedLevel::High
        }
    }
}

/// Operator-supplied speed outside `0..=65535`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// Low speed out of range (value given)
    LowOutOfRange(i32),
    /// High speed out of range (value given)
    HighOutOfRange(i32),
}

/// Reasons a stored record is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Magic word does not match (value found)
    BadMagic(u32),
    /// A speed word still holds the erased pattern
    Erased,
    /// A speed word is above 65535 (value found)
    OutOfRange(u32),
}

/// Raw speed record as laid out in NVM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PersistedRecord {
    pub magic: u32,
    pub low: u32,
    pub high: u32,
}

impl PersistedRecord {
    /// Record holding `profile` with the valid magic
    pub const fn from_profile(profile: SpeedProfile) -> Self {
        Self {
            magic: SPEED_RECORD_MAGIC,
            low: profile.low as u32,
            high: profile.high as u32,
        }
    }

    /// Decode three little-endian words
    pub fn from_bytes(bytes: &[u8; RECORD_LEN]) -> Self {
        let word = |i: usize| {
            u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Self {
            magic: word(0),
            low: word(4),
            high: word(8),
        }
    }

    /// Encode as three little-endian words
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut bytes = [0u8; RECORD_LEN];
        bytes[0..4].copy_from_slice(&self.magic.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.low.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.high.to_le_bytes());
        bytes
    }

    /// Check the record and extract the profile
    pub fn validate(&self) -> Result<SpeedProfile, RecordError> {
        if self.magic != SPEED_RECORD_MAGIC {
            return Err(RecordError::BadMagic(self.magic));
        }
        if self.low == ERASED_WORD || self.high == ERASED_WORD {
            return Err(RecordError::Erased);
        }
        let low = u16::try_from(self.low).map_err(|_| RecordError::OutOfRange(self.low))?;
        let high = u16::try_from(self.high).map_err(|_| RecordError::OutOfRange(self.high))?;
        Ok(SpeedProfile::new(low, high))
    }
}
