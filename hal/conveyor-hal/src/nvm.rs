//! Non-volatile storage abstraction
//!
//! Raw byte access to a small persistent region (a reserved flash sector on
//! the RP2350). The region survives power loss; a never-written region reads
//! back as `0xFF` bytes.

/// Errors from non-volatile storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NvmError {
    /// Offset plus length falls outside the region
    OutOfBounds,
    /// Underlying flash operation failed
    Flash,
}

/// Raw non-volatile byte storage
///
/// Offsets are relative to the start of the region. A write replaces only
/// the addressed bytes: implementations backed by erase-before-write flash
/// must read the rest of the sector back and restore it.
pub trait NvmStorage {
    /// Fill `buffer` with the bytes starting at `offset`
    fn read(
        &mut self,
        offset: u32,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<(), NvmError>>;

    /// Replace the bytes starting at `offset` with `data`
    ///
    /// Completes only once the data is durable.
    fn write(
        &mut self,
        offset: u32,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), NvmError>>;

    /// Size of the region in bytes
    fn capacity(&self) -> usize;
}

/// Check that `len` bytes at `offset` fit a region of `capacity` bytes
pub fn check_bounds(offset: u32, len: usize, capacity: usize) -> Result<(), NvmError> {
    let end = (offset as usize)
        .checked_add(len)
        .ok_or(NvmError::OutOfBounds)?;
    if end > capacity {
        return Err(NvmError::OutOfBounds);
    }
    Ok(())
}
