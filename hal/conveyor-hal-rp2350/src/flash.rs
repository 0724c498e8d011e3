//! Flash-backed NVM region for RP2350
//!
//! The last erase sector of the first 2 MiB of flash is reserved as the
//! NVM region (see `memory.x` in the firmware crate). Writes patch the
//! sector in RAM, erase it and program it back, so bytes outside the
//! written range are preserved.

use conveyor_hal::nvm::check_bounds;
use conveyor_hal::NvmError;
use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;

/// Flash size assumed by the firmware image
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// NVM region size: one erase sector
pub const NVM_SIZE: usize = ERASE_SIZE;

/// NVM region start, as an offset into flash
pub const NVM_OFFSET: u32 = (FLASH_SIZE - NVM_SIZE) as u32;

pub struct FlashNvm<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> FlashNvm<'d> {
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        Self {
            flash: Flash::new_blocking(flash),
        }
    }
}

impl conveyor_hal::NvmStorage for FlashNvm<'_> {
    async fn read(&mut self, offset: u32, buffer: &mut [u8]) -> Result<(), NvmError> {
        check_bounds(offset, buffer.len(), NVM_SIZE)?;
        self.flash
            .blocking_read(NVM_OFFSET + offset, buffer)
            .map_err(|_| NvmError::Flash)
    }

    async fn write(&mut self, offset: u32, data: &[u8]) -> Result<(), NvmError> {
        check_bounds(offset, data.len(), NVM_SIZE)?;

        let mut sector = [0u8; NVM_SIZE];
        self.flash
            .blocking_read(NVM_OFFSET, &mut sector)
            .map_err(|_| NvmError::Flash)?;

        let start = offset as usize;
        sector[start..start + data.len()].copy_from_slice(data);

        self.flash
            .blocking_erase(NVM_OFFSET, NVM_OFFSET + NVM_SIZE as u32)
            .map_err(|_| NvmError::Flash)?;
        self.flash
            .blocking_write(NVM_OFFSET, &sector)
            .map_err(|_| NvmError::Flash)
    }

    fn capacity(&self) -> usize {
        NVM_SIZE
    }
}
