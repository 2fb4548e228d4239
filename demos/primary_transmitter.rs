//! Sends a one byte counter to the primary receiver every 5 seconds.
//!
//! Run `primary_receiver` on a second radio. The transmitter gives up
//! once a packet is not acknowledged after all the automatic retransmits.
#[path = "board.rs"]
mod board;

use board::{debug_err, DelayImpl, DigitalOutImpl, SpiImpl, BAUDRATE_HZ, PINS};
use embedded_hal::delay::DelayNs;
use nrf24::{
    radio::{prelude::*, Nrf24Error, NRF24},
    DataPipe,
};
use std::{string::String, time::Instant};

/// The address of the primary receiver's pipe 0.
const RX_NODE: [u8; 5] = [0x37; 5];

fn main() -> Result<(), String> {
    let mut radio = NRF24::configure(PINS, BAUDRATE_HZ, DigitalOutImpl, SpiImpl, DelayImpl)
        .map_err(debug_err)?;

    // channel 110, 1 Mbps, maximum power
    radio.initialise(None).map_err(debug_err)?;
    radio.set_payload_size(DataPipe::All, 1).map_err(debug_err)?;
    radio.tx_destination(&RX_NODE).map_err(debug_err)?;
    radio.print_details().map_err(debug_err)?;

    let mut delay = DelayImpl;
    let mut packet = 1u8;
    loop {
        let start = Instant::now();
        match radio.send_packet(&[packet]) {
            Ok(()) => {
                println!(
                    "Transmission success:- Response time: {} us | Payload: {packet}",
                    start.elapsed().as_micros()
                );
                packet = packet.wrapping_add(1);
                delay.delay_ms(5000);
            }
            Err(e) => {
                if matches!(e, Nrf24Error::MaxRetries) {
                    println!("Transmission failed: receiver unreachable");
                }
                return Err(debug_err(e));
            }
        }
    }
}
