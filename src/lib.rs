//! A poll-based driver for the nRF24L01 transceiver wired to the SPI pins of an RP2040.
//!
//! The driver is built on [`embedded-hal`](https://docs.rs/embedded-hal) 1.0 traits:
//! an [`SpiDevice`](embedded_hal::spi::SpiDevice) (whose chip select is the radio's CSN pin),
//! an [`OutputPin`](embedded_hal::digital::OutputPin) for the radio's CE pin and a
//! [`DelayNs`](embedded_hal::delay::DelayNs) implementation for the datasheet's settle times.
//!
//! ```ignore
//! use nrf24::{bus::PinAssignment, radio::{prelude::*, Nrf24Error, NRF24}, DataPipe};
//!
//! let pins = PinAssignment { sck: 2, copi: 3, cipo: 4, csn: 5, ce: 6 };
//! let mut radio = NRF24::configure(pins, 7_500_000, ce_pin, spi, delay).unwrap();
//! radio.initialise(None).unwrap();
//! radio.tx_destination(b"1Node").unwrap();
//! radio.set_payload_size(DataPipe::All, 4).unwrap();
//! match radio.send_packet(&[1, 2, 3, 4]) {
//!     Ok(()) => { /* acknowledged */ }
//!     Err(Nrf24Error::MaxRetries) => { /* nobody answered */ }
//!     Err(e) => { /* SPI or CE pin error */ }
//! }
//! ```
//!
//! ## Basic API
//!
//! - [`NRF24::configure()`](fn@crate::radio::NRF24::configure)
//! - [`NRF24::initialise()`](radio/struct.NRF24.html#method.initialise)
//! - [`NRF24::rx_destination()`](radio/struct.NRF24.html#method.rx_destination)
//! - [`NRF24::tx_destination()`](radio/struct.NRF24.html#method.tx_destination)
//! - [`NRF24::receiver_mode()`](radio/struct.NRF24.html#method.receiver_mode)
//! - [`NRF24::standby_mode()`](radio/struct.NRF24.html#method.standby_mode)
//! - [`NRF24::send_packet()`](radio/struct.NRF24.html#method.send_packet)
//! - [`NRF24::is_packet()`](radio/struct.NRF24.html#method.is_packet)
//! - [`NRF24::read_packet()`](radio/struct.NRF24.html#method.read_packet)
//!
//! ## Configuration API
//!
//! - [`NRF24::set_payload_size()`](radio/struct.NRF24.html#method.set_payload_size)
//! - [`NRF24::dyn_payloads_enable()`](radio/struct.NRF24.html#method.dyn_payloads_enable)
//! - [`NRF24::dyn_payloads_disable()`](radio/struct.NRF24.html#method.dyn_payloads_disable)
//! - [`NRF24::set_auto_retransmission()`](radio/struct.NRF24.html#method.set_auto_retransmission)
//! - [`NRF24::set_channel()`](radio/struct.NRF24.html#method.set_channel)
//! - [`NRF24::set_data_rate()`](radio/struct.NRF24.html#method.set_data_rate)
//! - [`NRF24::set_pa_level()`](radio/struct.NRF24.html#method.set_pa_level)
//!
//! ## Advanced API
//!
//! - [`NRF24::write_packet()`](radio/struct.NRF24.html#method.write_packet)
//! - [`NRF24::tx_response()`](radio/struct.NRF24.html#method.tx_response)
//! - [`NRF24::send_packet_timeout()`](radio/struct.NRF24.html#method.send_packet_timeout)
//! - [`NRF24::check_status_irq()`](radio/struct.NRF24.html#method.check_status_irq)
//! - [`NRF24::get_rx_address()`](radio/struct.NRF24.html#method.get_rx_address)
//! - [`NRF24::flush_rx()`](radio/struct.NRF24.html#method.flush_rx)
//! - [`NRF24::flush_tx()`](radio/struct.NRF24.html#method.flush_tx)
//! - [`NRF24::read_register()`](fn@crate::radio::NRF24::read_register)
//! - [`NRF24::print_details()`](radio/struct.NRF24.html#method.print_details)
//!
#![no_std]

#[macro_use]
mod macros;

mod types;
pub use types::{
    AddressWidth, ArDelay, DataPipe, DataRate, Mode, PaLevel, ParameterError, StatusFlags,
    TxResponse,
};
pub mod bus;
pub mod radio;
