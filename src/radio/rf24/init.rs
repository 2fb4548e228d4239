use super::{bit_fields::Config, commands, mnemonics, registers, timing, Nrf24Error, NRF24};
use crate::{
    radio::{prelude::EsbInit, RadioConfig},
    Mode, StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbInit for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`NRF24::configure()`].
    ///
    /// A failed bus transaction aborts the sequence without undoing the
    /// registers already written; the `config` is committed regardless.
    fn initialise(&mut self, config: Option<&RadioConfig>) -> Result<(), Self::ConfigErrorType> {
        let config = config.copied().unwrap_or_default();
        config.validate()?;
        self._config = config;
        self._pipe0_rx_addr = None;

        // power on reset
        self._delay_impl.delay_ms(timing::POWER_ON_RESET_MS);

        // CSN idles high (owned by the SpiDevice), so only CE needs to be driven.
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_ms(timing::CE_SETTLE_MS);

        // 16 bit CRC, all IRQ events enabled and power up as a transmitter
        self.write_register_byte(registers::CONFIG, Config::default().into_bits())?;
        // crystal start up (Power Down -> Standby-I)
        self._delay_impl.delay_ms(timing::CRYSTAL_STARTUP_MS);

        self.write_register_byte(registers::EN_AA, mnemonics::ALL_PIPES)?;
        self.write_register_byte(registers::SETUP_AW, config.address_width().into_bits())?;
        self.write_register_byte(registers::SETUP_RETR, config.setup_retry().into_bits())?;
        self.write_register_byte(registers::RF_CH, config.channel())?;
        self.write_register_byte(registers::RF_SETUP, config.rf_setup.into_bits())?;

        self.write_register_byte(
            registers::FEATURE,
            mnemonics::EN_DPL | mnemonics::EN_DYN_ACK,
        )?;
        self.write_register_byte(
            registers::DYNPD,
            mnemonics::ALL_PIPES * (config.dynamic_payloads() as u8),
        )?;

        self.write_register_byte(registers::STATUS, StatusFlags::IRQ_MASK)?;
        self.send_command(commands::FLUSH_TX)?;
        self.send_command(commands::FLUSH_RX)?;

        self._mode = Mode::StandbyI;
        debug!(
            "Radio initialised on channel {} at {} ({})",
            config.channel(),
            config.data_rate(),
            config.pa_level()
        );
        Ok(())
    }
}
