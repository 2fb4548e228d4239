use bitfield_struct::bitfield;

use crate::{ArDelay, DataRate, PaLevel};

/// The CONFIG register.
///
/// The default value (`0x0E`) is what [`EsbInit::initialise()`](fn@crate::radio::prelude::EsbInit::initialise)
/// writes: all IRQ events reflected on the IRQ pin, 16 bit CRC, and powered up as a transmitter.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _reserved: u8,

    pub mask_rx_dr: bool,

    pub mask_tx_ds: bool,

    pub mask_max_rt: bool,

    #[bits(1, default = true)]
    pub en_crc: bool,

    /// CRC encoding scheme; `true` means 2 bytes.
    #[bits(1, default = true)]
    pub crco: bool,

    #[bits(1, default = true)]
    pub pwr_up: bool,

    pub prim_rx: bool,
}

/// The SETUP_RETR register.
#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    #[bits(4, access = None, default = 1)]
    ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 10)]
    pub arc: u8,
}

impl SetupRetry {
    const ARD_MASK: u8 = 0xF0;

    #[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
    pub const fn ard(&self) -> ArDelay {
        ArDelay::from_bits(self.into_bits() & Self::ARD_MASK)
    }

    pub fn with_ard(self, delay: ArDelay) -> Self {
        let new_val = self.into_bits() & !Self::ARD_MASK;
        Self::from_bits(new_val | delay.into_bits())
    }
}

/// The RF_SETUP register.
#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    #[bits(2)]
    _cont_wave: u8,

    #[bits(3, access = None)]
    data_rate: u8,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    #[bits(1)]
    _obsolete: u8,
}

impl RfSetup {
    pub const fn data_rate(&self) -> DataRate {
        DataRate::from_bits(self.into_bits())
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_val = self.into_bits() & !DataRate::MASK;
        Self::from_bits(new_val | data_rate.into_bits())
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_val = self.into_bits() & !PaLevel::MASK;
        Self::from_bits(new_val | level.into_bits())
    }
}
