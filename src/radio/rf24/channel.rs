use super::registers;
use crate::radio::{config::check_channel, prelude::EsbChannel, Nrf24Error, NRF24};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbChannel for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The specified `channel` must be in range [2, 125].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        check_channel(channel)?;
        self.write_register_byte(registers::RF_CH, channel)?;
        self._config = self._config.with_channel(channel);
        Ok(())
    }
}
