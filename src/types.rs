//! This module defines types used by various traits.
//!
//! Every enum here maps onto a field of the nRF24L01 register map.
//! Conversions from raw register units are fallible ([`TryFrom<u8>`])
//! so that out-of-domain values are caught before any bus activity.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// An enumeration of the user inputs that can be rejected.
///
/// A [`ParameterError`] is always detected before the radio is touched,
/// so it never leaves the radio in a partially configured state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterError {
    /// The SPI pins do not resolve to one SPI instance, or a control pin collides
    /// with another pin.
    Pins,
    /// The SPI baudrate was zero.
    Baudrate,
    /// The RF channel was not in range [2, 125].
    Channel,
    /// The auto-retransmit count was not in range [0, 15].
    RetransmitCount,
    /// The auto-retransmit delay was not one of the raw values `0`, `16`, `32` or `48`.
    RetransmitDelay,
    /// The raw data rate bits were not a valid RF_SETUP encoding.
    DataRate,
    /// The raw power amplifier bits were not a valid RF_SETUP encoding.
    PaLevel,
    /// The raw address width was not in range [1, 3].
    AddressWidth,
    /// A payload size was not in range [1, 32], or exceeded the configured static width.
    PayloadSize,
    /// A data pipe index was not in range [0, 5], or [`DataPipe::All`] was used
    /// where a single pipe is required.
    Pipe,
    /// The given address buffer was shorter than required.
    AddressLength,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for ParameterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ParameterError::Pins => defmt::write!(fmt, "invalid pin assignment"),
            ParameterError::Baudrate => defmt::write!(fmt, "invalid baudrate"),
            ParameterError::Channel => defmt::write!(fmt, "invalid channel"),
            ParameterError::RetransmitCount => defmt::write!(fmt, "invalid retransmit count"),
            ParameterError::RetransmitDelay => defmt::write!(fmt, "invalid retransmit delay"),
            ParameterError::DataRate => defmt::write!(fmt, "invalid data rate"),
            ParameterError::PaLevel => defmt::write!(fmt, "invalid PA level"),
            ParameterError::AddressWidth => defmt::write!(fmt, "invalid address width"),
            ParameterError::PayloadSize => defmt::write!(fmt, "invalid payload size"),
            ParameterError::Pipe => defmt::write!(fmt, "invalid data pipe"),
            ParameterError::AddressLength => defmt::write!(fmt, "address too short"),
        }
    }
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ParameterError::Pins => write!(f, "invalid pin assignment"),
            ParameterError::Baudrate => write!(f, "invalid baudrate"),
            ParameterError::Channel => write!(f, "invalid channel"),
            ParameterError::RetransmitCount => write!(f, "invalid retransmit count"),
            ParameterError::RetransmitDelay => write!(f, "invalid retransmit delay"),
            ParameterError::DataRate => write!(f, "invalid data rate"),
            ParameterError::PaLevel => write!(f, "invalid PA level"),
            ParameterError::AddressWidth => write!(f, "invalid address width"),
            ParameterError::PayloadSize => write!(f, "invalid payload size"),
            ParameterError::Pipe => write!(f, "invalid data pipe"),
            ParameterError::AddressLength => write!(f, "address too short"),
        }
    }
}

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "-18 dBm"),
            PaLevel::Low => defmt::write!(fmt, "-12 dBm"),
            PaLevel::High => defmt::write!(fmt, "-6 dBm"),
            PaLevel::Max => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl PaLevel {
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl TryFrom<u8> for PaLevel {
    type Error = ParameterError;

    /// Convert the raw RF_PWR bits (already in position 1-2 of RF_SETUP).
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        if value & !Self::MASK != 0 {
            return Err(ParameterError::PaLevel);
        }
        Ok(Self::from_bits(value))
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "-18 dBm"),
            PaLevel::Low => write!(f, "-12 dBm"),
            PaLevel::High => write!(f, "-6 dBm"),
            PaLevel::Max => write!(f, "0 dBm"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// RF_DR_LOW (bit 5) and RF_DR_HIGH (bit 3).
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

impl TryFrom<u8> for DataRate {
    type Error = ParameterError;

    /// Convert the raw RF_DR bits (already in position 3 and 5 of RF_SETUP).
    ///
    /// Setting both RF_DR_LOW and RF_DR_HIGH is reserved by the datasheet.
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(DataRate::Mbps1),
            0x8 => Ok(DataRate::Mbps2),
            0x20 => Ok(DataRate::Kbps250),
            _ => Err(ParameterError::DataRate),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The number of bytes used for every pipe address.
///
/// The SETUP_AW register stores this as `width - 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressWidth {
    Bytes3,
    Bytes4,
    Bytes5,
}

impl AddressWidth {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AddressWidth::Bytes3 => 1,
            AddressWidth::Bytes4 => 2,
            AddressWidth::Bytes5 => 3,
        }
    }

    /// The number of address bytes, which is always the register value plus 2.
    pub const fn len(self) -> usize {
        self.into_bits() as usize + 2
    }
}

impl TryFrom<u8> for AddressWidth {
    type Error = ParameterError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(AddressWidth::Bytes3),
            2 => Ok(AddressWidth::Bytes4),
            3 => Ok(AddressWidth::Bytes5),
            _ => Err(ParameterError::AddressWidth),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for AddressWidth {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} bytes", self.len())
    }
}

impl Display for AddressWidth {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} bytes", self.len())
    }
}

/// The Auto Retransmit Delay (ARD).
///
/// This is how long the transmitter waits for an ACK packet before it
/// retransmits the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArDelay {
    Us250,
    Us500,
    Us750,
    Us1000,
}

impl ArDelay {
    /// The raw value, already shifted into the upper nibble of SETUP_RETR.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            ArDelay::Us250 => 0,
            ArDelay::Us500 => 0x10,
            ArDelay::Us750 => 0x20,
            ArDelay::Us1000 => 0x30,
        }
    }

    #[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 0x30 {
            0 => ArDelay::Us250,
            0x10 => ArDelay::Us500,
            0x20 => ArDelay::Us750,
            _ => ArDelay::Us1000,
        }
    }

    /// The delay in microseconds.
    pub const fn as_micros(self) -> u32 {
        ((self.into_bits() >> 4) as u32 + 1) * 250
    }
}

impl TryFrom<u8> for ArDelay {
    type Error = ParameterError;

    /// Convert a raw delay value (`0`, `16`, `32` or `48`).
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(ArDelay::Us250),
            0x10 => Ok(ArDelay::Us500),
            0x20 => Ok(ArDelay::Us750),
            0x30 => Ok(ArDelay::Us1000),
            _ => Err(ParameterError::RetransmitDelay),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for ArDelay {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} us", self.as_micros())
    }
}

impl Display for ArDelay {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} us", self.as_micros())
    }
}

/// A receiving data pipe.
///
/// [`DataPipe::All`] is only accepted where an operation applies to every pipe
/// at once (like setting the static payload size).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataPipe {
    Pipe0,
    Pipe1,
    Pipe2,
    Pipe3,
    Pipe4,
    Pipe5,
    All,
}

impl DataPipe {
    /// The pipe number, or [`None`] for [`DataPipe::All`].
    pub const fn index(self) -> Option<u8> {
        match self {
            DataPipe::Pipe0 => Some(0),
            DataPipe::Pipe1 => Some(1),
            DataPipe::Pipe2 => Some(2),
            DataPipe::Pipe3 => Some(3),
            DataPipe::Pipe4 => Some(4),
            DataPipe::Pipe5 => Some(5),
            DataPipe::All => None,
        }
    }
}

impl TryFrom<u8> for DataPipe {
    type Error = ParameterError;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(DataPipe::Pipe0),
            1 => Ok(DataPipe::Pipe1),
            2 => Ok(DataPipe::Pipe2),
            3 => Ok(DataPipe::Pipe3),
            4 => Ok(DataPipe::Pipe4),
            5 => Ok(DataPipe::Pipe5),
            _ => Err(ParameterError::Pipe),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataPipe {
    fn format(&self, fmt: defmt::Formatter) {
        match self.index() {
            Some(n) => defmt::write!(fmt, "pipe {}", n),
            None => defmt::write!(fmt, "all pipes"),
        }
    }
}

impl Display for DataPipe {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.index() {
            Some(n) => write!(f, "pipe {n}"),
            None => write!(f, "all pipes"),
        }
    }
}

/// The operating mode tracked by the driver.
///
/// Standby-II is only entered by the radio itself while it waits out a
/// retransmit delay, so it is never stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    StandbyI,
    Tx,
    Rx,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::StandbyI => defmt::write!(fmt, "Standby-I"),
            Mode::Tx => defmt::write!(fmt, "TX"),
            Mode::Rx => defmt::write!(fmt, "RX"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Mode::StandbyI => write!(f, "Standby-I"),
            Mode::Tx => write!(f, "TX"),
            Mode::Rx => write!(f, "RX"),
        }
    }
}

/// The outcome of a transmission started with
/// [`EsbRadio::write_packet()`](fn@crate::radio::prelude::EsbRadio::write_packet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxResponse {
    /// Neither TX_DS nor MAX_RT has been asserted yet.
    Waiting,
    /// The payload was acknowledged (TX_DS).
    Acknowledged,
    /// The radio gave up after the configured retransmit count (MAX_RT).
    TimedOut,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for TxResponse {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TxResponse::Waiting => defmt::write!(fmt, "Waiting"),
            TxResponse::Acknowledged => defmt::write!(fmt, "Acknowledged"),
            TxResponse::TimedOut => defmt::write!(fmt, "TimedOut"),
        }
    }
}

impl Display for TxResponse {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            TxResponse::Waiting => write!(f, "Waiting"),
            TxResponse::Acknowledged => write!(f, "Acknowledged"),
            TxResponse::TimedOut => write!(f, "TimedOut"),
        }
    }
}

/// A snapshot of the STATUS register.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use nrf24::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all IRQ flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// `7` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all IRQ flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        self.with_flag(Self::RX_DR_OFFSET, flag)
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        self.with_flag(Self::TX_DS_OFFSET, flag)
    }

    /// A flag to describe if the maximum number of retransmits was reached.
    pub fn with_max_rt(self, flag: bool) -> Self {
        self.with_flag(Self::MAX_RT_OFFSET, flag)
    }

    fn with_flag(self, offset: usize, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << offset);
        Self::from_bits(new_val | ((flag as u8) << offset))
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

#[cfg(test)]
mod test {
    use super::{
        AddressWidth, ArDelay, DataPipe, DataRate, Mode, PaLevel, ParameterError, StatusFlags,
    };
    extern crate std;
    use std::{format, string::String};

    fn display_data_rate(param: DataRate, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn data_rate_1mbps() {
        assert!(display_data_rate(DataRate::Mbps1, String::from("1 Mbps")));
    }

    #[test]
    fn data_rate_2mbps() {
        assert!(display_data_rate(DataRate::Mbps2, String::from("2 Mbps")));
    }

    #[test]
    fn data_rate_250kbps() {
        assert!(display_data_rate(
            DataRate::Kbps250,
            String::from("250 Kbps")
        ));
    }

    #[test]
    fn data_rate_raw() {
        assert_eq!(DataRate::try_from(0), Ok(DataRate::Mbps1));
        assert_eq!(DataRate::try_from(8), Ok(DataRate::Mbps2));
        assert_eq!(DataRate::try_from(0x20), Ok(DataRate::Kbps250));
        assert_eq!(DataRate::try_from(0x28), Err(ParameterError::DataRate));
        assert_eq!(DataRate::try_from(1), Err(ParameterError::DataRate));
    }

    fn display_pa_level(param: PaLevel, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn pa_level_min() {
        assert!(display_pa_level(PaLevel::Min, String::from("-18 dBm")));
    }

    #[test]
    fn pa_level_max() {
        assert!(display_pa_level(PaLevel::Max, String::from("0 dBm")));
    }

    #[test]
    fn pa_level_raw() {
        for (raw, level) in [
            (0, PaLevel::Min),
            (2, PaLevel::Low),
            (4, PaLevel::High),
            (6, PaLevel::Max),
        ] {
            assert_eq!(PaLevel::try_from(raw), Ok(level));
            assert_eq!(level.into_bits(), raw);
        }
        assert_eq!(PaLevel::try_from(1), Err(ParameterError::PaLevel));
        assert_eq!(PaLevel::try_from(8), Err(ParameterError::PaLevel));
    }

    #[test]
    fn address_width() {
        assert_eq!(AddressWidth::try_from(0), Err(ParameterError::AddressWidth));
        assert_eq!(AddressWidth::try_from(4), Err(ParameterError::AddressWidth));
        for raw in 1..=3u8 {
            let width = AddressWidth::try_from(raw).unwrap();
            assert_eq!(width.into_bits(), raw);
            assert_eq!(width.len(), raw as usize + 2);
        }
        assert_eq!(format!("{}", AddressWidth::Bytes5), String::from("5 bytes"));
    }

    #[test]
    fn ar_delay() {
        assert_eq!(ArDelay::try_from(0), Ok(ArDelay::Us250));
        assert_eq!(ArDelay::try_from(16), Ok(ArDelay::Us500));
        assert_eq!(ArDelay::try_from(32), Ok(ArDelay::Us750));
        assert_eq!(ArDelay::try_from(48), Ok(ArDelay::Us1000));
        assert_eq!(ArDelay::try_from(1), Err(ParameterError::RetransmitDelay));
        assert_eq!(ArDelay::try_from(64), Err(ParameterError::RetransmitDelay));
        assert_eq!(ArDelay::Us1000.as_micros(), 1000);
        assert_eq!(format!("{}", ArDelay::Us500), String::from("500 us"));
    }

    #[test]
    fn data_pipe() {
        assert_eq!(DataPipe::try_from(5), Ok(DataPipe::Pipe5));
        assert_eq!(DataPipe::try_from(6), Err(ParameterError::Pipe));
        assert_eq!(DataPipe::All.index(), None);
        assert_eq!(DataPipe::Pipe2.index(), Some(2));
        assert_eq!(format!("{}", DataPipe::Pipe3), String::from("pipe 3"));
        assert_eq!(format!("{}", DataPipe::All), String::from("all pipes"));
    }

    #[test]
    fn display_mode() {
        assert_eq!(format!("{}", Mode::StandbyI), String::from("Standby-I"));
        assert_eq!(format!("{}", Mode::Rx), String::from("RX"));
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", StatusFlags::default()),
            String::from("StatusFlags rx_dr: false, tx_ds: false, max_rt: false")
        );
    }

    fn set_flags(rx_dr: bool, tx_ds: bool, max_rt: bool) {
        let flags = StatusFlags::default()
            .with_rx_dr(rx_dr)
            .with_tx_ds(tx_ds)
            .with_max_rt(max_rt);
        assert_eq!(flags.rx_dr(), rx_dr);
        assert_eq!(flags.tx_ds(), tx_ds);
        assert_eq!(flags.max_rt(), max_rt);
    }

    #[test]
    fn flags_0x50() {
        set_flags(true, false, true);
    }

    #[test]
    fn flags_0x20() {
        set_flags(false, true, false);
    }

    #[test]
    fn status_byte() {
        let flags = StatusFlags::from_bits(0x49);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert_eq!(flags.rx_pipe(), 4);
        assert!(flags.tx_full());
        assert_eq!(StatusFlags::new().into_bits(), 0x70);
    }
}
