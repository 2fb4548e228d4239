use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod auto_retries;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod data_rate;
mod details;
mod fifo;
mod init;
mod pa_level;
mod payload_length;
mod pipe;
mod radio;
pub use constants::{commands, mnemonics, registers, timing};
mod status;

use super::RadioConfig;
use crate::{
    bus::{BusConfig, PinAssignment},
    types::{AddressWidth, Mode, ParameterError},
    StatusFlags,
};

/// The largest payload the radio's FIFOs can hold.
pub const MAX_PAYLOAD_SIZE: u8 = 32;

/// An collection of error types to describe hardware malfunctions
/// and rejected operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (the CE pin).
    Gpo(DO),
    /// A user input was rejected before anything was written to the radio.
    Parameter(ParameterError),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
    /// The payload was not acknowledged within the configured number of retransmits.
    ///
    /// This is a normal outcome when the receiving radio is absent or out of range.
    MaxRetries,
    /// The deadline given to
    /// [`EsbRadio::send_packet_timeout()`](fn@crate::radio::prelude::EsbRadio::send_packet_timeout)
    /// elapsed before the radio reported an outcome.
    Timeout,
}

impl<SPI, DO> From<ParameterError> for Nrf24Error<SPI, DO> {
    fn from(value: ParameterError) -> Self {
        Nrf24Error::Parameter(value)
    }
}

impl<SPI: Debug, DO: Debug> Display for Nrf24Error<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Nrf24Error::Spi(e) => write!(f, "SPI error: {e:?}"),
            Nrf24Error::Gpo(e) => write!(f, "CE pin error: {e:?}"),
            Nrf24Error::Parameter(e) => write!(f, "{e}"),
            Nrf24Error::BinaryCorruption => write!(f, "binary corruption"),
            Nrf24Error::MaxRetries => write!(f, "maximum retransmits reached"),
            Nrf24Error::Timeout => write!(f, "timed out"),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<SPI: Debug, DO: Debug> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(e) => defmt::write!(fmt, "SPI error: {}", defmt::Debug2Format(e)),
            Nrf24Error::Gpo(e) => defmt::write!(fmt, "CE pin error: {}", defmt::Debug2Format(e)),
            Nrf24Error::Parameter(e) => defmt::write!(fmt, "{}", e),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "binary corruption"),
            Nrf24Error::MaxRetries => defmt::write!(fmt, "maximum retransmits reached"),
            Nrf24Error::Timeout => defmt::write!(fmt, "timed out"),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// It owns the SPI device (whose chip select is the radio's CSN pin),
/// the CE pin and a delay provider. The operating mode, the configured
/// address width and the pipe 0 address are cached here; only the
/// mode transition functions in [`EsbRadio`](trait@crate::radio::prelude::EsbRadio)
/// change the cached mode.
pub struct NRF24<SPI, DO, DELAY> {
    _spi: SPI,
    _ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _bus: BusConfig,
    _config: RadioConfig,
    _mode: Mode,
    _pipe0_rx_addr: Option<[u8; 5]>,
    _payload_size: u8,
}

impl<SPI, DO, DELAY> NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Validate the pin assignment and bind it to the given peripherals.
    ///
    /// The `pins` are checked against the RP2040's SPI pin map and must all
    /// belong to one SPI instance (see [`BusConfig::new()`]). The `spi` device
    /// is expected to be built on that instance, with `pins.csn` as its chip select,
    /// SPI mode 0 and a clock no faster than [`BusConfig::baudrate_hz()`].
    ///
    /// Nothing is written to the radio until
    /// [`EsbInit::initialise()`](fn@crate::radio::prelude::EsbInit::initialise) is called.
    pub fn configure(
        pins: PinAssignment,
        baudrate_hz: u32,
        ce_pin: DO,
        spi: SPI,
        delay_impl: DELAY,
    ) -> Result<Self, ParameterError> {
        let bus = BusConfig::new(pins, baudrate_hz)?;
        debug!("Bound radio to {}", bus);
        Ok(NRF24 {
            _spi: spi,
            _ce_pin: ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _bus: bus,
            _config: RadioConfig::default(),
            _mode: Mode::StandbyI,
            _pipe0_rx_addr: None,
            // no static payload size until one is set explicitly
            _payload_size: 0,
        })
    }

    /// The current (cached) operating mode.
    pub fn mode(&self) -> Mode {
        self._mode
    }

    /// The configuration last committed by
    /// [`EsbInit::initialise()`](fn@crate::radio::prelude::EsbInit::initialise)
    /// and the individual setters.
    pub fn config(&self) -> &RadioConfig {
        &self._config
    }

    /// The validated bus configuration.
    pub fn bus(&self) -> &BusConfig {
        &self._bus
    }

    /// The address width committed by
    /// [`EsbInit::initialise()`](fn@crate::radio::prelude::EsbInit::initialise).
    pub fn address_width(&self) -> AddressWidth {
        self._config.address_width()
    }

    /// The static payload size last set with
    /// [`EsbPayloadLength::set_payload_size()`](fn@crate::radio::prelude::EsbPayloadLength::set_payload_size).
    ///
    /// `0` means no size was set yet.
    pub fn payload_size(&self) -> u8 {
        self._payload_size
    }

    /// Perform one chip-select framed transfer of the first `len` bytes in `_buf`.
    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Send a command that has no payload (like `FLUSH_TX` or `NOP`).
    fn send_command(&mut self, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self.spi_transfer(1)
    }

    fn write_register(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        if len > MAX_PAYLOAD_SIZE as usize {
            return Err(ParameterError::PayloadSize.into());
        }
        self._buf[0] = (register & registers::REGISTER_MASK) | commands::W_REGISTER;
        self._buf[1..(len + 1)].copy_from_slice(buf);
        self.spi_transfer(len + 1)
    }

    fn write_register_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_register(register, &[byte])
    }

    /// Read a single byte register.
    ///
    /// This is mainly useful for debugging; the STATUS byte clocked out
    /// alongside is cached as well.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = (register & registers::REGISTER_MASK) | commands::R_REGISTER;
        self._buf[1] = commands::NOP;
        self.spi_transfer(2)?;
        Ok(self._buf[1])
    }

    /// Read a multi-byte register (like a pipe address) into `buf`.
    ///
    /// `buf.len()` (in range [1, 32]) determines how many bytes are read.
    pub fn read_register_bytes(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        if len == 0 || len > MAX_PAYLOAD_SIZE as usize {
            return Err(ParameterError::PayloadSize.into());
        }
        self._buf[0] = (register & registers::REGISTER_MASK) | commands::R_REGISTER;
        self._buf[1..(len + 1)].fill(commands::NOP);
        self.spi_transfer(len + 1)?;
        buf.copy_from_slice(&self._buf[1..(len + 1)]);
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, Nrf24Error, NRF24};
    use crate::{
        bus::PinAssignment,
        spi_test_expects,
        test::{mk_radio, PINS},
        Mode, ParameterError,
    };
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::Mock as PinMock,
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::{format, vec};

    #[test]
    fn write_opcode_framing() {
        let mut spi_expectations = vec![];
        for register in 0..=0x1Du8 {
            spi_expectations.extend(spi_test_expects![(
                vec![(register & 0x1F) | 0x20, 0x55],
                vec![0xEu8, 0u8],
            ),]);
        }
        // only the 5 LSBs address a register
        spi_expectations.extend(spi_test_expects![(vec![0x27u8, 0x70], vec![0xEu8, 0u8]),]);
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        for register in 0..=0x1Du8 {
            radio.write_register_byte(register, 0x55).unwrap();
        }
        radio.write_register_byte(0xE7, 0x70).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn read_opcode_framing() {
        let mut spi_expectations = vec![];
        for register in 0..=0x1Du8 {
            spi_expectations.extend(spi_test_expects![(
                vec![register & 0x1F, commands::NOP],
                vec![0xEu8, register],
            ),]);
        }
        spi_expectations.extend(spi_test_expects![(
            vec![registers::STATUS, commands::NOP],
            vec![0xEu8, 0xEu8],
        ),]);
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        for register in 0..=0x1Du8 {
            assert_eq!(radio.read_register(register), Ok(register));
        }
        // top 3 bits are dropped from the opcode
        assert_eq!(radio.read_register(0xE7), Ok(0xE));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn read_register_bytes() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::TX_ADDR, 0xFFu8, 0xFF, 0xFF, 0xFF, 0xFF],
                vec![0xEu8, 1, 2, 3, 4, 5],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut address = [0u8; 5];
        radio
            .read_register_bytes(registers::TX_ADDR, &mut address)
            .unwrap();
        assert_eq!(address, [1, 2, 3, 4, 5]);
        assert_eq!(
            radio.read_register_bytes(registers::TX_ADDR, &mut []),
            Err(Nrf24Error::Parameter(ParameterError::PayloadSize))
        );
        assert_eq!(
            radio.read_register_bytes(registers::TX_ADDR, &mut [0u8; 33]),
            Err(Nrf24Error::Parameter(ParameterError::PayloadSize))
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn send_command_caches_status() {
        let spi_expectations = spi_test_expects![(vec![commands::NOP], vec![0x4Eu8]),];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.send_command(commands::NOP).unwrap();
        assert!(radio._status.rx_dr());
        assert_eq!(radio._status.rx_pipe(), 7);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn configure() {
        let mocks = mk_radio(&[], &[]);
        let (radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.mode(), Mode::StandbyI);
        assert_eq!(radio.payload_size(), 0);
        assert_eq!(radio.bus().pins(), PINS);
        assert_eq!(radio.config().channel(), 110);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn configure_bad_pins() {
        let mut spi = SpiMock::new(&[]);
        let mut ce_pin = PinMock::new(&[]);
        let pins = PinAssignment { sck: 10, ..PINS };
        let result = NRF24::configure(pins, 1_000_000, ce_pin.clone(), spi.clone(), NoopDelay);
        assert_eq!(result.err(), Some(ParameterError::Pins));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn display_error() {
        let err: Nrf24Error<(), ()> = ParameterError::Channel.into();
        assert_eq!(format!("{err}"), "invalid channel");
        let err: Nrf24Error<(), ()> = Nrf24Error::MaxRetries;
        assert_eq!(format!("{err}"), "maximum retransmits reached");
    }
}
