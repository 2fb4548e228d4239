//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24::radio::prelude::*;
//! ```

use crate::types::{ArDelay, DataPipe, DataRate, PaLevel, StatusFlags, TxResponse};

use super::RadioConfig;

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the receiving address of a data `pipe` and make sure the pipe is enabled.
    ///
    /// Pipes 0 and 1 store a full address (as long as the configured address width).
    /// Pipes 2 - 5 only store a single byte (the first byte of `address`);
    /// the remaining bytes are shared with pipe 1's address.
    ///
    /// ```ignore
    /// radio.rx_destination(DataPipe::Pipe1, &[0xC7; 5]).unwrap();
    /// radio.rx_destination(DataPipe::Pipe4, &[0xCA]).unwrap();
    /// // pipe 4 now listens on 0xCA, 0xC7, 0xC7, 0xC7, 0xC7
    /// ```
    ///
    /// <div class="warning">
    ///
    /// The address given for pipe 0 is cached and restored at every call to
    /// [`EsbRadio::receiver_mode()`], because [`EsbPipe::tx_destination()`]
    /// overwrites pipe 0's address.
    ///
    /// </div>
    ///
    /// [`DataPipe::All`] is rejected because every pipe needs its own address.
    fn rx_destination(&mut self, pipe: DataPipe, address: &[u8])
        -> Result<(), Self::PipeErrorType>;

    /// Set the address used for transmitting.
    ///
    /// The same address is also written to pipe 0, which is where the
    /// auto-ack packets are received.
    fn tx_destination(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Read back the full address a `pipe` listens on.
    ///
    /// For pipes 2 - 5, the first byte is the pipe's own byte and the
    /// remaining bytes come from pipe 1's address.
    /// `address` must be at least as long as the configured address width.
    fn get_rx_address(
        &mut self,
        pipe: DataPipe,
        address: &mut [u8],
    ) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// Valid channels are in range [2, 125].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self, flags: &mut StatusFlags);

    /// Read the STATUS register and clear every IRQ flag that is asserted.
    ///
    /// Each asserted flag is cleared with its own register write, so an
    /// event that fires between the read and the clearing is never lost.
    /// The returned [`StatusFlags`] are the flags as they were read.
    fn check_status_irq(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    ///
    /// This function is automatically called by [`EsbRadio::send_packet()`]
    /// when the maximum number of retransmits was reached.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent manipulation of payload lengths (static or dynamic)
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the static payload size (in range [1, 32]) of a `pipe`,
    /// or of every pipe with [`DataPipe::All`].
    ///
    /// The size is also remembered as the largest payload
    /// [`EsbRadio::send_packet()`] accepts while dynamic payloads are disabled.
    fn set_payload_size(
        &mut self,
        pipe: DataPipe,
        size: u8,
    ) -> Result<(), Self::PayloadLengthErrorType>;

    /// Enable dynamic payload lengths on all pipes.
    fn dyn_payloads_enable(&mut self) -> Result<(), Self::PayloadLengthErrorType>;

    /// Disable dynamic payload lengths on all pipes.
    fn dyn_payloads_disable(&mut self) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the current setting of the dynamic payloads feature.
    fn get_dynamic_payloads(&self) -> bool;

    /// Get the dynamic length of the next available payload in the RX FIFO.
    ///
    /// A width greater than 32 means the payload was corrupted; the RX FIFO is
    /// flushed and an error is returned.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of the automatic retransmission feature
/// for an ESB capable transceiver.
pub trait EsbAutoRetries {
    type AutoRetriesErrorType;

    /// Set the auto-retransmit `delay` and `count` (in range [0, 15]).
    fn set_auto_retransmission(
        &mut self,
        delay: ArDelay,
        count: u8,
    ) -> Result<(), Self::AutoRetriesErrorType>;
}

/// A trait to represent manipulation of a power amplifier
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Set the radio's Power Amplifier level.
    ///
    /// The data rate bits sharing the same register are preserved.
    fn set_pa_level(&mut self, level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the Data Rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Set the radio's Data Rate.
    ///
    /// The power amplifier bits sharing the same register are preserved.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// Without the `defmt` or `std` feature, this does nothing.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware with the given `config`
    /// (or [`RadioConfig::default()`] if [`None`]).
    ///
    /// The `config` is validated before anything is written to the radio.
    /// Afterward, the radio is powered up in Standby-I mode with
    /// both FIFOs flushed and all IRQ flags cleared.
    ///
    /// This waits at least 106 milliseconds (power on reset and crystal start up).
    fn initialise(&mut self, config: Option<&RadioConfig>) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent manipulation of an ESB capable transceiver.
///
/// Although the name is rather generic, this trait describes the
/// behavior of a radio's rudimentary modes (RX and TX).
pub trait EsbRadio {
    type RadioErrorType;

    /// Leave RX mode and return to Standby-I.
    ///
    /// This does nothing if the radio is not in RX mode.
    fn standby_mode(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into active RX mode.
    ///
    /// Conventionally, this should be called after setting the RX addresses via
    /// [`EsbPipe::rx_destination()`]. The cached pipe 0 address is restored here.
    fn receiver_mode(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Blocking function to transmit a given payload.
    ///
    /// This waits until the payload is acknowledged or the radio gives up after
    /// the configured number of retransmits (in which case the TX FIFO is flushed).
    /// There is no time limit; use [`EsbRadio::send_packet_timeout()`] to bound the wait.
    fn send_packet(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Similar to [`EsbRadio::send_packet()`] but gives up after `timeout_us` microseconds.
    ///
    /// On timeout, the TX FIFO is flushed.
    fn send_packet_timeout(&mut self, buf: &[u8], timeout_us: u32)
        -> Result<(), Self::RadioErrorType>;

    /// Non-blocking function to start transmitting a given payload.
    ///
    /// Use [`EsbRadio::tx_response()`] to find out how the transmission ended.
    fn write_packet(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Poll the outcome of a transmission started with [`EsbRadio::write_packet()`].
    ///
    /// The TX FIFO is flushed when [`TxResponse::TimedOut`] is returned.
    fn tx_response(&mut self) -> Result<TxResponse, Self::RadioErrorType>;

    /// Read a payload from the radio's RX FIFO into `buf`.
    ///
    /// The length of `buf` (in range [1, 32]) determines how many bytes are read.
    fn read_packet(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType>;

    /// Is there a payload ready to read?
    ///
    /// If so, the pipe that received it is stored in `pipe` (when given).
    /// If not, `pipe` is left untouched.
    fn is_packet(&mut self, pipe: Option<&mut u8>) -> Result<bool, Self::RadioErrorType>;
}

/// The complete set of operations offered by a radio driver.
///
/// This is implemented for every type that implements all the `Esb*` traits,
/// so application code can be written against `impl EsbDriver`.
pub trait EsbDriver:
    EsbInit
    + EsbPipe
    + EsbChannel
    + EsbStatus
    + EsbFifo
    + EsbPayloadLength
    + EsbAutoRetries
    + EsbPaLevel
    + EsbDataRate
    + EsbRadio
    + EsbDetails
{
}

impl<T> EsbDriver for T where
    T: EsbInit
        + EsbPipe
        + EsbChannel
        + EsbStatus
        + EsbFifo
        + EsbPayloadLength
        + EsbAutoRetries
        + EsbPaLevel
        + EsbDataRate
        + EsbRadio
        + EsbDetails
{
}
