//! Speed profile persistence
//!
//! Reads and writes the speed record at the start of the NVM region.
//! Nothing is cached: every load re-reads storage and every save is durable
//! when it returns.

use conveyor_hal::{NvmError, NvmStorage};

use super::speed::{PersistedRecord, RecordError, SpeedProfile, ValidationError, RECORD_LEN};

/// Offset of the speed record inside the NVM region
pub const RECORD_OFFSET: u32 = 0;

/// Why a stored profile could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Record present but rejected
    Record(RecordError),
    /// Storage access failed
    Storage(NvmError),
}

impl From<RecordError> for StoreError {
    fn from(e: RecordError) -> Self {
        StoreError::Record(e)
    }
}

impl From<NvmError> for StoreError {
    fn from(e: NvmError) -> Self {
        StoreError::Storage(e)
    }
}

/// Why a calibration save was refused or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SaveError {
    /// Speeds rejected; storage untouched
    Invalid(ValidationError),
    /// Storage write failed
    Storage(NvmError),
}

impl From<ValidationError> for SaveError {
    fn from(e: ValidationError) -> Self {
        SaveError::Invalid(e)
    }
}

impl From<NvmError> for SaveError {
    fn from(e: NvmError) -> Self {
        SaveError::Storage(e)
    }
}

/// Configuration store for the speed profile
pub struct SpeedStore<N> {
    nvm: N,
}

impl<N: NvmStorage> SpeedStore<N> {
    pub fn new(nvm: N) -> Self {
        Self { nvm }
    }

    /// Read and validate the stored profile
    ///
    /// Use this when the reason for a rejection matters (logging);
    /// controllers should get their profile from [`SpeedStore::load`].
    pub async fn read(&mut self) -> Result<SpeedProfile, StoreError> {
        let mut bytes = [0u8; RECORD_LEN];
        self.nvm.read(RECORD_OFFSET, &mut bytes).await?;
        let profile = PersistedRecord::from_bytes(&bytes).validate()?;
        Ok(profile)
    }

    /// Load the stored profile, or the default one if there is none
    ///
    /// Blank or corrupt storage is not an error here.
    pub async fn load(&mut self) -> SpeedProfile {
        self.read().await.unwrap_or_default()
    }

    /// Validate and persist a new calibration
    ///
    /// Only the record bytes are replaced; the rest of the region is kept.
    /// Takes effect at the next startup.
    pub async fn save(&mut self, low: i32, high: i32) -> Result<(), SaveError> {
        let profile = SpeedProfile::try_new(low, high)?;
        let bytes = PersistedRecord::from_profile(profile).to_bytes();
        self.nvm.write(RECORD_OFFSET, &bytes).await?;
        Ok(())
    }

    /// Get the underlying storage back
    pub fn into_inner(self) -> N {
        self.nvm
    }
}
