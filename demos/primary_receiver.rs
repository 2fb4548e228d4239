//! Prints every one byte payload received from `primary_transmitter`.
#[path = "board.rs"]
mod board;

use board::{debug_err, DelayImpl, DigitalOutImpl, SpiImpl, BAUDRATE_HZ, PINS};
use nrf24::{
    radio::{prelude::*, NRF24},
    DataPipe,
};
use std::string::String;

fn main() -> Result<(), String> {
    let mut radio = NRF24::configure(PINS, BAUDRATE_HZ, DigitalOutImpl, SpiImpl, DelayImpl)
        .map_err(debug_err)?;

    radio.initialise(None).map_err(debug_err)?;
    radio.set_payload_size(DataPipe::All, 1).map_err(debug_err)?;
    radio
        .rx_destination(DataPipe::Pipe0, &[0x37; 5])
        .map_err(debug_err)?;
    radio
        .rx_destination(DataPipe::Pipe1, &[0xC7; 5])
        .map_err(debug_err)?;
    radio.receiver_mode().map_err(debug_err)?;
    radio.print_details().map_err(debug_err)?;

    let mut packet = [0u8; 1];
    let mut pipe = 0u8;
    loop {
        if radio.is_packet(Some(&mut pipe)).map_err(debug_err)? {
            radio.read_packet(&mut packet).map_err(debug_err)?;
            println!("Packet receipt success:- Payload: {} (pipe {pipe})", packet[0]);
        }
    }
}
