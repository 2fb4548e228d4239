use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbPipe, Nrf24Error, NRF24},
    DataPipe, ParameterError,
};

use super::registers;

impl<SPI, DO, DELAY> EsbPipe for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn rx_destination(
        &mut self,
        pipe: DataPipe,
        address: &[u8],
    ) -> Result<(), Self::PipeErrorType> {
        let pipe = pipe.index().ok_or(ParameterError::Pipe)?;
        // Pipes 2-5 only hold their LSByte; the rest is borrowed from pipe 1.
        let width = if pipe < 2 {
            self._config.address_width().len()
        } else {
            1
        };
        if address.len() < width {
            return Err(ParameterError::AddressLength.into());
        }

        let enabled = self.read_register(registers::EN_RXADDR)?;
        self.write_register(registers::RX_ADDR_P0 + pipe, &address[..width])?;

        // Cache the pipe 0 address because tx_destination() overwrites it.
        // receiver_mode() restores it.
        if pipe == 0 {
            let mut cached_addr = [0u8; 5];
            cached_addr[..width].copy_from_slice(&address[..width]);
            self._pipe0_rx_addr = Some(cached_addr);
        }

        if enabled & (1 << pipe) == 0 {
            self.write_register_byte(registers::EN_RXADDR, enabled | (1 << pipe))?;
        }
        trace!("Pipe {} bound to {=[u8]:x}", pipe, &address[..width]);
        Ok(())
    }

    fn tx_destination(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let width = self._config.address_width().len();
        if address.len() < width {
            return Err(ParameterError::AddressLength.into());
        }
        self.write_register(registers::TX_ADDR, &address[..width])?;
        // auto-ack packets are received on pipe 0
        self.write_register(registers::RX_ADDR_P0, &address[..width])
    }

    fn get_rx_address(
        &mut self,
        pipe: DataPipe,
        address: &mut [u8],
    ) -> Result<(), Self::PipeErrorType> {
        let pipe = pipe.index().ok_or(ParameterError::Pipe)?;
        let width = self._config.address_width().len();
        if address.len() < width {
            return Err(ParameterError::AddressLength.into());
        }
        if pipe < 2 {
            self.read_register_bytes(registers::RX_ADDR_P0 + pipe, &mut address[..width])
        } else {
            self.read_register_bytes(registers::RX_ADDR_P1, &mut address[..width])?;
            address[0] = self.read_register(registers::RX_ADDR_P0 + pipe)?;
            Ok(())
        }
    }
}
