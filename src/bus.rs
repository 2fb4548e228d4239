//! Pin-to-SPI-instance validation for the RP2040.
//!
//! The RP2040 routes each SPI peripheral to a fixed set of GPIO pins.
//! Within every group of 4 consecutive pins the roles are fixed
//! (CIPO, CSn, SCK, COPI), and the groups alternate between the two
//! SPI instances in pairs (pins 0-7 are SPI0, pins 8-15 are SPI1, and so on).
//!
//! Everything here is pure validation. Nothing touches hardware.
//!
//! ```
//! use nrf24::bus::{BusConfig, PinAssignment, SpiInstance};
//!
//! let pins = PinAssignment {
//!     sck: 2,
//!     copi: 3,
//!     cipo: 4,
//!     csn: 5,
//!     ce: 6,
//! };
//! let bus = BusConfig::new(pins, 10_000_000).unwrap();
//! assert_eq!(bus.instance(), SpiInstance::Spi0);
//! // the baudrate is capped
//! assert_eq!(bus.baudrate_hz(), 7_500_000);
//! ```

use core::fmt::{Display, Formatter, Result};

use crate::ParameterError;

/// The highest SPI clock rate (in Hz) the radio is driven at.
pub const MAX_BAUDRATE_HZ: u32 = 7_500_000;

/// The highest GPIO number on the RP2040.
const MAX_GPIO: u8 = 29;

const CIPO_MAX: u8 = 28;
const COPI_MAX: u8 = 27;
const SCK_MAX: u8 = 26;

/// The GPIO numbers assigned to each of the radio's 5 logical lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinAssignment {
    /// SPI clock.
    pub sck: u8,
    /// Controller out, peripheral in (radio's MOSI).
    pub copi: u8,
    /// Controller in, peripheral out (radio's MISO).
    pub cipo: u8,
    /// Chip select (active low).
    pub csn: u8,
    /// Chip enable.
    pub ce: u8,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PinAssignment {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "sck: GP{}, copi: GP{}, cipo: GP{}, csn: GP{}, ce: GP{}",
            self.sck,
            self.copi,
            self.cipo,
            self.csn,
            self.ce
        )
    }
}

/// One of the RP2040's two SPI peripherals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpiInstance {
    Spi0,
    Spi1,
}

impl SpiInstance {
    /// The instance a pin in a valid role position belongs to.
    const fn of_pin(pin: u8) -> Self {
        if (pin / 4) % 4 < 2 {
            SpiInstance::Spi0
        } else {
            SpiInstance::Spi1
        }
    }

    fn for_role(pin: u8, offset: u8, max: u8) -> Option<Self> {
        if pin <= max && pin % 4 == offset {
            Some(Self::of_pin(pin))
        } else {
            None
        }
    }

    /// Resolve the SPI instance that the 3 bus pins belong to.
    ///
    /// Each pin must sit at its role's position within a group of 4 pins,
    /// and all 3 pins must belong to the same instance.
    pub fn from_pins(sck: u8, copi: u8, cipo: u8) -> core::result::Result<Self, ParameterError> {
        let sck = Self::for_role(sck, 2, SCK_MAX);
        let copi = Self::for_role(copi, 3, COPI_MAX);
        let cipo = Self::for_role(cipo, 0, CIPO_MAX);
        match (sck, copi, cipo) {
            (Some(a), Some(b), Some(c)) if a == b && b == c => Ok(a),
            _ => Err(ParameterError::Pins),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for SpiInstance {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SpiInstance::Spi0 => defmt::write!(fmt, "SPI0"),
            SpiInstance::Spi1 => defmt::write!(fmt, "SPI1"),
        }
    }
}

impl Display for SpiInstance {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SpiInstance::Spi0 => write!(f, "SPI0"),
            SpiInstance::Spi1 => write!(f, "SPI1"),
        }
    }
}

/// A validated pin assignment bound to its SPI instance and clock rate.
///
/// This is immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusConfig {
    pins: PinAssignment,
    instance: SpiInstance,
    baudrate_hz: u32,
}

impl BusConfig {
    /// Validate `pins` and bind them to an SPI instance.
    ///
    /// `baudrate_hz` is capped at [`MAX_BAUDRATE_HZ`]; zero is rejected.
    /// The CSN and CE pins may be any GPIO that no other line uses.
    pub fn new(pins: PinAssignment, baudrate_hz: u32) -> core::result::Result<Self, ParameterError> {
        if baudrate_hz == 0 {
            return Err(ParameterError::Baudrate);
        }
        let instance = SpiInstance::from_pins(pins.sck, pins.copi, pins.cipo)?;
        if pins.csn > MAX_GPIO || pins.ce > MAX_GPIO {
            return Err(ParameterError::Pins);
        }
        let all = [pins.sck, pins.copi, pins.cipo, pins.csn, pins.ce];
        for (i, pin) in all.iter().enumerate() {
            if all[i + 1..].contains(pin) {
                return Err(ParameterError::Pins);
            }
        }
        Ok(Self {
            pins,
            instance,
            baudrate_hz: baudrate_hz.min(MAX_BAUDRATE_HZ),
        })
    }

    pub const fn pins(&self) -> PinAssignment {
        self.pins
    }

    pub const fn instance(&self) -> SpiInstance {
        self.instance
    }

    pub const fn baudrate_hz(&self) -> u32 {
        self.baudrate_hz
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for BusConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} @ {} Hz ({})",
            self.instance,
            self.baudrate_hz,
            self.pins
        )
    }
}
