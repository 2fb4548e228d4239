use crate::{
    radio::{prelude::EsbPayloadLength, Nrf24Error, NRF24},
    DataPipe, ParameterError,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{commands, mnemonics, registers, MAX_PAYLOAD_SIZE};

impl<SPI, DO, DELAY> EsbPayloadLength for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_payload_size(
        &mut self,
        pipe: DataPipe,
        size: u8,
    ) -> Result<(), Self::PayloadLengthErrorType> {
        if size == 0 || size > MAX_PAYLOAD_SIZE {
            return Err(ParameterError::PayloadSize.into());
        }
        match pipe.index() {
            Some(index) => self.write_register_byte(registers::RX_PW_P0 + index, size)?,
            None => {
                for register in registers::RX_PW_P0..=registers::RX_PW_P5 {
                    self.write_register_byte(register, size)?;
                }
            }
        }
        self._payload_size = size;
        Ok(())
    }

    fn dyn_payloads_enable(&mut self) -> Result<(), Self::PayloadLengthErrorType> {
        self.write_register_byte(
            registers::FEATURE,
            mnemonics::EN_DPL | mnemonics::EN_DYN_ACK,
        )?;
        self.write_register_byte(registers::DYNPD, mnemonics::ALL_PIPES)?;
        self._config = self._config.with_dynamic_payloads(true);
        Ok(())
    }

    fn dyn_payloads_disable(&mut self) -> Result<(), Self::PayloadLengthErrorType> {
        self.write_register_byte(registers::DYNPD, 0)?;
        self._config = self._config.with_dynamic_payloads(false);
        Ok(())
    }

    fn get_dynamic_payloads(&self) -> bool {
        self._config.dynamic_payloads()
    }

    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        self._buf[0] = commands::R_RX_PL_WID;
        self._buf[1] = commands::NOP;
        self.spi_transfer(2)?;
        let width = self._buf[1];
        if width > MAX_PAYLOAD_SIZE {
            warn!("Discarding RX FIFO (reported payload width {})", width);
            self.send_command(commands::FLUSH_RX)?;
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(width)
    }
}
