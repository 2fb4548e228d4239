use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::SetupRetry, registers};
use crate::radio::{config::check_retransmit_count, prelude::EsbAutoRetries, Nrf24Error, NRF24};
use crate::ArDelay;

impl<SPI, DO, DELAY> EsbAutoRetries for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoRetriesErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_auto_retransmission(
        &mut self,
        delay: ArDelay,
        count: u8,
    ) -> Result<(), Self::AutoRetriesErrorType> {
        check_retransmit_count(count)?;
        let setup_retry = SetupRetry::new().with_ard(delay).with_arc(count);
        self.write_register_byte(registers::SETUP_RETR, setup_retry.into_bits())?;
        self._config = self._config.with_auto_retries(delay, count);
        Ok(())
    }
}
