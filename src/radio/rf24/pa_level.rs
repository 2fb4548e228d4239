use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbPaLevel, Nrf24Error, NRF24};
use crate::PaLevel;

impl<SPI, DO, DELAY> EsbPaLevel for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let rf_setup = RfSetup::from_bits(self.read_register(registers::RF_SETUP)?);
        self.write_register_byte(
            registers::RF_SETUP,
            rf_setup.with_pa_level(pa_level).into_bits(),
        )?;
        self._config = self._config.with_pa_level(pa_level);
        Ok(())
    }
}
