//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod rf24;
pub use rf24::{commands, mnemonics, registers, timing, Nrf24Error, MAX_PAYLOAD_SIZE, NRF24};

mod config;
pub use config::{RadioConfig, CHANNEL_RANGE, MAX_RETRANSMIT_COUNT};
