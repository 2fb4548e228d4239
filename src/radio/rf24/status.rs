use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, NRF24},
    types::StatusFlags,
};

use super::{mnemonics, registers};

impl<SPI, DO, DELAY> EsbStatus for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_status_flags(&self, flags: &mut StatusFlags) {
        *flags = self._status;
    }

    fn check_status_irq(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        let flags = StatusFlags::from_bits(self.read_register(registers::STATUS)?);
        // the flags are write-1-to-clear
        for (asserted, mask) in [
            (flags.rx_dr(), mnemonics::MASK_RX_DR),
            (flags.tx_ds(), mnemonics::MASK_TX_DS),
            (flags.max_rt(), mnemonics::MASK_MAX_RT),
        ] {
            if asserted {
                self.write_register_byte(registers::STATUS, mask)?;
            }
        }
        Ok(flags)
    }
}
