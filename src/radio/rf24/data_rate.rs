use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::RfSetup, registers};
use crate::radio::{prelude::EsbDataRate, Nrf24Error, NRF24};
use crate::DataRate;

impl<SPI, DO, DELAY> EsbDataRate for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let rf_setup = RfSetup::from_bits(self.read_register(registers::RF_SETUP)?);
        self.write_register_byte(
            registers::RF_SETUP,
            rf_setup.with_data_rate(data_rate).into_bits(),
        )?;
        self._config = self._config.with_data_rate(data_rate);
        Ok(())
    }
}
