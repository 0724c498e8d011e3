//! Pin allocation by GPIO number
//!
//! Signal and sensor inputs are bound by name at startup. The board table
//! turns a name into a GPIO number; the bank hands out the matching pin
//! exactly once.

use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// GPIO count on RP2350B
pub const PIN_COUNT: usize = 48;

/// Move a set of typed pins into a [`PinBank`]
///
/// Expands to one `insert(..)?` per pin, so it must be used in a function
/// whose error type converts from [`PinError`].
///
/// ```ignore
/// bank_pins!(bank, p, [2 => PIN_2, 14 => PIN_14]);
/// ```
#[macro_export]
macro_rules! bank_pins {
    ($bank:expr, $p:expr, [$($num:literal => $pin:ident),* $(,)?]) => {
        $(
            $bank.insert(
                $num,
                embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.$pin),
            )?;
        )*
    };
}

/// Error when placing or taking a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-47 valid)
    InvalidPin(u8),
    /// Pin already taken, or never placed in the bank
    Unavailable(u8),
    /// Slot already holds a pin
    Occupied(u8),
}

/// Pins available for name-based binding
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; PIN_COUNT],
}

impl PinBank {
    pub fn new() -> Self {
        Self {
            pins: [const { None }; PIN_COUNT],
        }
    }

    /// Place a pin in its slot
    pub fn insert(&mut self, pin_num: u8, pin: Peri<'static, AnyPin>) -> Result<(), PinError> {
        let slot = self
            .pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?;
        if slot.is_some() {
            return Err(PinError::Occupied(pin_num));
        }
        *slot = Some(pin);
        Ok(())
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?
            .take()
            .ok_or(PinError::Unavailable(pin_num))
    }
}

impl Default for PinBank {
    fn default() -> Self {
        Self::new()
    }
}
