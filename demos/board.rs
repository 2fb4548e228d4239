//! Placeholders for the board's peripherals.
//!
//! Swap these for the SPI device, CE pin and delay of your board's HAL
//! (e.g. `rp2040-hal` or `embassy-rp`). The SPI device must use the radio's
//! CSN pin as its chip select.
#![allow(dead_code)]

extern crate std;

use core::time::Duration;
use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin},
    spi::{self, Operation, SpiDevice},
};
use nrf24::bus::PinAssignment;

/// The wiring used by both demos.
pub const PINS: PinAssignment = PinAssignment {
    sck: 2,
    copi: 3,
    cipo: 4,
    csn: 5,
    ce: 6,
};

pub const BAUDRATE_HZ: u32 = 6_000_000;

/// Format any driver error for `main()`.
pub fn debug_err(err: impl core::fmt::Debug) -> std::string::String {
    std::format!("{err:?}")
}

pub struct DelayImpl;

impl DelayNs for DelayImpl {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

#[derive(Default)]
pub struct DigitalOutImpl;

impl digital::ErrorType for DigitalOutImpl {
    type Error = digital::ErrorKind;
}

impl OutputPin for DigitalOutImpl {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        todo!()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        todo!()
    }
}

#[derive(Default)]
pub struct SpiImpl;

impl spi::ErrorType for SpiImpl {
    type Error = spi::ErrorKind;
}

impl SpiDevice for SpiImpl {
    fn transaction(&mut self, _operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        todo!()
    }
}
