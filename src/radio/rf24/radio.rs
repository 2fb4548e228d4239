use super::{bit_fields::Config, commands, registers, timing, Nrf24Error, NRF24};
use crate::{
    radio::prelude::{EsbFifo, EsbRadio, EsbStatus},
    Mode, ParameterError, TxResponse,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::MAX_PAYLOAD_SIZE;

impl<SPI, DO, DELAY> NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Check the length of a payload about to be uploaded.
    ///
    /// With dynamic payloads disabled, the payload may not be longer
    /// than the static payload size.
    fn check_payload_len(&self, len: usize) -> Result<(), ParameterError> {
        let max_len = if self._config.dynamic_payloads() {
            MAX_PAYLOAD_SIZE
        } else {
            self._payload_size
        };
        if len == 0 || len > max_len as usize {
            return Err(ParameterError::PayloadSize);
        }
        Ok(())
    }
}

impl<SPI, DO, DELAY> EsbRadio for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn standby_mode(&mut self) -> Result<(), Self::RadioErrorType> {
        if self._mode != Mode::Rx {
            return Ok(());
        }
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register_byte(registers::CONFIG, config.with_prim_rx(false).into_bits())?;
        self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(timing::RX_SETTLE_US);
        self._mode = Mode::StandbyI;
        debug!("Entered {}", self._mode);
        Ok(())
    }

    fn receiver_mode(&mut self) -> Result<(), Self::RadioErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        if !config.prim_rx() {
            self.write_register_byte(registers::CONFIG, config.with_prim_rx(true).into_bits())?;
        }

        // undo the pipe 0 address set by tx_destination()
        if let Some(addr) = self._pipe0_rx_addr {
            let width = self._config.address_width().len();
            self.write_register(registers::RX_ADDR_P0, &addr[..width])?;
        }

        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(timing::RX_SETTLE_US);
        self._mode = Mode::Rx;
        debug!("Entered {}", self._mode);
        Ok(())
    }

    /// See [`EsbRadio::send_packet()`] for implementation-agnostic detail.
    ///
    /// This polls the STATUS register without any delay between polls.
    /// An IRQ event unrelated to the transmission (like `rx_dr`) is cleared as a side effect.
    fn send_packet(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.write_packet(buf)?;
        loop {
            match self.tx_response()? {
                TxResponse::Waiting => continue,
                TxResponse::Acknowledged => return Ok(()),
                TxResponse::TimedOut => return Err(Nrf24Error::MaxRetries),
            }
        }
    }

    /// See [`EsbRadio::send_packet_timeout()`] for implementation-agnostic detail.
    ///
    /// Only the delays between polls count toward `timeout_us`,
    /// so the actual time spent is a bit longer.
    fn send_packet_timeout(
        &mut self,
        buf: &[u8],
        timeout_us: u32,
    ) -> Result<(), Self::RadioErrorType> {
        self.write_packet(buf)?;
        let mut elapsed = 0u32;
        loop {
            match self.tx_response()? {
                TxResponse::Acknowledged => return Ok(()),
                TxResponse::TimedOut => return Err(Nrf24Error::MaxRetries),
                TxResponse::Waiting if elapsed >= timeout_us => {
                    warn!("No TX outcome after {} us; discarding payload", elapsed);
                    self.flush_tx()?;
                    return Err(Nrf24Error::Timeout);
                }
                TxResponse::Waiting => {
                    self._delay_impl.delay_us(timing::POLL_INTERVAL_US);
                    elapsed = elapsed.saturating_add(timing::POLL_INTERVAL_US);
                }
            }
        }
    }

    /// See [`EsbRadio::write_packet()`] for implementation-agnostic detail.
    ///
    /// If the radio is in RX mode, it is put in Standby-I mode first.
    /// The CE pin is pulsed for [`timing::CE_PULSE_US`], after which the radio
    /// handles the transmission (and any retransmits) on its own.
    fn write_packet(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.check_payload_len(buf.len())?;
        self.standby_mode()?;

        let len = buf.len();
        self._buf[0] = commands::W_TX_PAYLOAD;
        self._buf[1..(len + 1)].copy_from_slice(buf);
        self.spi_transfer(len + 1)?;

        self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._mode = Mode::Tx;
        self._delay_impl.delay_us(timing::CE_PULSE_US);
        // back to Standby-I even if CE cannot be driven low
        let ce_low = self._ce_pin.set_low().map_err(Nrf24Error::Gpo);
        self._mode = Mode::StandbyI;
        ce_low?;
        trace!("Uploaded {} byte payload", len);
        Ok(())
    }

    fn tx_response(&mut self) -> Result<TxResponse, Self::RadioErrorType> {
        let flags = self.check_status_irq()?;
        if flags.tx_ds() {
            Ok(TxResponse::Acknowledged)
        } else if flags.max_rt() {
            warn!("Maximum retransmits reached; discarding payload");
            self.flush_tx()?;
            Ok(TxResponse::TimedOut)
        } else {
            Ok(TxResponse::Waiting)
        }
    }

    /// See [`EsbRadio::read_packet()`] for implementation-agnostic detail.
    ///
    /// The payload is not removed from the RX FIFO until its entire length is fetched.
    /// Reading past the end of a payload yields its last byte repeatedly.
    fn read_packet(&mut self, buf: &mut [u8]) -> Result<(), Self::RadioErrorType> {
        let len = buf.len();
        if len == 0 || len > MAX_PAYLOAD_SIZE as usize {
            return Err(ParameterError::PayloadSize.into());
        }
        self._buf[0] = commands::R_RX_PAYLOAD;
        self._buf[1..(len + 1)].fill(commands::NOP);
        self.spi_transfer(len + 1)?;
        buf.copy_from_slice(&self._buf[1..(len + 1)]);
        Ok(())
    }

    fn is_packet(&mut self, pipe: Option<&mut u8>) -> Result<bool, Self::RadioErrorType> {
        let flags = self.check_status_irq()?;
        if !flags.rx_dr() {
            return Ok(false);
        }
        if let Some(pipe) = pipe {
            *pipe = flags.rx_pipe();
        }
        Ok(true)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, EsbRadio, Nrf24Error};
    use crate::radio::{
        mnemonics,
        prelude::{EsbPayloadLength, EsbPipe},
    };
    use crate::{spi_test_expects, test::mk_radio, DataPipe, Mode, ParameterError, TxResponse};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
        MockError,
    };
    use std::{io::ErrorKind, vec, vec::Vec};

    const STATUS_READ: [u8; 2] = [registers::STATUS, commands::NOP];
    const CLEAR_TX_DS: [u8; 2] = [registers::STATUS | commands::W_REGISTER, mnemonics::MASK_TX_DS];
    const CLEAR_MAX_RT: [u8; 2] = [
        registers::STATUS | commands::W_REGISTER,
        mnemonics::MASK_MAX_RT,
    ];

    fn pulse_ce() -> [PinTransaction; 2] {
        [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]
    }

    /// The bus traffic of a payload upload
    fn upload(payload: &[u8]) -> Vec<SpiTransaction<u8>> {
        let mut expected = vec![commands::W_TX_PAYLOAD];
        expected.extend_from_slice(payload);
        spi_test_expects![(expected, vec![0xEu8; payload.len() + 1]),].to_vec()
    }

    /// `count` polls of the STATUS register without any IRQ event
    fn idle_polls(count: usize) -> Vec<SpiTransaction<u8>> {
        let mut expectations = vec![];
        for _ in 0..count {
            expectations.extend(spi_test_expects![(
                STATUS_READ.to_vec(),
                vec![0xEu8, 0xEu8]
            ),]);
        }
        expectations
    }

    #[test]
    pub fn standby_mode() {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0xFu8]),
            // clear PRIM_RX flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xEu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        // not in RX mode: nothing to do
        radio.standby_mode().unwrap();
        radio._mode = Mode::Rx;
        radio.standby_mode().unwrap();
        assert_eq!(radio.mode(), Mode::StandbyI);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn receiver_mode_idempotent() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0xEu8]),
            // assert PRIM_RX flag
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            // PRIM_RX is already asserted; no write
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0xFu8]),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.receiver_mode().unwrap();
        assert_eq!(radio.mode(), Mode::Rx);
        radio.receiver_mode().unwrap();
        assert_eq!(radio.mode(), Mode::Rx);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn receiver_mode_restores_pipe0() {
        let rx_addr = [0xA1u8, 0xA2, 0xA3, 0xA4, 0xA5];
        let tx_addr = [0xB1u8, 0xB2, 0xB3, 0xB4, 0xB5];
        let mut rx_addr_p0 = vec![registers::RX_ADDR_P0 | commands::W_REGISTER];
        rx_addr_p0.extend_from_slice(&rx_addr);
        let mut tx_addr_reg = vec![registers::TX_ADDR | commands::W_REGISTER];
        tx_addr_reg.extend_from_slice(&tx_addr);
        let mut tx_addr_p0 = vec![registers::RX_ADDR_P0 | commands::W_REGISTER];
        tx_addr_p0.extend_from_slice(&tx_addr);

        let ce_expectations = [PinTransaction::set(PinState::High)];
        let spi_expectations = spi_test_expects![
            // rx_destination(Pipe0, A)
            (vec![registers::EN_RXADDR, commands::NOP], vec![0xEu8, 3u8]),
            (rx_addr_p0.clone(), vec![0xEu8; 6]),
            // tx_destination(B)
            (tx_addr_reg, vec![0xEu8; 6]),
            (tx_addr_p0, vec![0xEu8; 6]),
            // receiver_mode()
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0xEu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            // RX_ADDR_P0 is A again
            (rx_addr_p0, vec![0xEu8; 6]),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.rx_destination(DataPipe::Pipe0, &rx_addr).unwrap();
        radio.tx_destination(&tx_addr).unwrap();
        radio.receiver_mode().unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn receiver_mode_ce_error() {
        let err = MockError::Io(ErrorKind::NotConnected);
        let ce_expectations = [PinTransaction::set(PinState::High).with_error(err.clone())];
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0xEu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.receiver_mode(), Err(Nrf24Error::Gpo(err)));
        assert_eq!(radio.mode(), Mode::StandbyI);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_packet_ce_error() {
        let payload = [0x55u8; 8];
        let err = MockError::Io(ErrorKind::NotConnected);
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low).with_error(err.clone()),
        ];
        let mut spi_expectations = vec![];
        spi_expectations.extend(spi_test_expects![(
            vec![registers::RX_PW_P0 | commands::W_REGISTER, 8u8],
            vec![0xEu8, 0u8],
        ),]);
        // no STATUS polls follow the failed CE pulse
        spi_expectations.extend(upload(&payload));
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_size(DataPipe::Pipe0, 8).unwrap();
        assert_eq!(radio.send_packet(&payload), Err(Nrf24Error::Gpo(err)));
        assert_eq!(radio.mode(), Mode::StandbyI);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn write_packet_ce_high_error() {
        let payload = [0x55u8; 8];
        let err = MockError::Io(ErrorKind::NotConnected);
        let ce_expectations = [PinTransaction::set(PinState::High).with_error(err.clone())];
        let mut spi_expectations = vec![];
        spi_expectations.extend(spi_test_expects![(
            vec![registers::RX_PW_P0 | commands::W_REGISTER, 8u8],
            vec![0xEu8, 0u8],
        ),]);
        spi_expectations.extend(upload(&payload));
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_size(DataPipe::Pipe0, 8).unwrap();
        assert_eq!(radio.write_packet(&payload), Err(Nrf24Error::Gpo(err)));
        assert_eq!(radio.mode(), Mode::StandbyI);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_packet_acknowledged() {
        let payload = [0x55u8; 8];
        let mut spi_expectations = vec![];
        spi_expectations.extend(spi_test_expects![(
            vec![registers::RX_PW_P0 | commands::W_REGISTER, 8u8],
            vec![0xEu8, 0u8],
        ),]);
        spi_expectations.extend(upload(&payload));
        // TX_DS is asserted at the 4th poll
        spi_expectations.extend(idle_polls(3));
        spi_expectations.extend(spi_test_expects![
            (STATUS_READ.to_vec(), vec![0x2Eu8, 0x2Eu8]),
            // only TX_DS is cleared
            (CLEAR_TX_DS.to_vec(), vec![0x2Eu8, 0u8]),
        ]);
        let mocks = mk_radio(&pulse_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_size(DataPipe::Pipe0, 8).unwrap();
        radio.send_packet(&payload).unwrap();
        assert_eq!(radio.mode(), Mode::StandbyI);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_packet_max_retries() {
        let payload = [0xAAu8; 4];
        let mut spi_expectations = upload(&payload);
        spi_expectations.extend(idle_polls(1));
        spi_expectations.extend(spi_test_expects![
            (STATUS_READ.to_vec(), vec![0x1Eu8, 0x1Eu8]),
            (CLEAR_MAX_RT.to_vec(), vec![0x1Eu8, 0u8]),
            // the unacknowledged payload is discarded
            (vec![commands::FLUSH_TX], vec![0xEu8]),
        ]);
        let mocks = mk_radio(&pulse_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_size = 32;
        assert_eq!(radio.send_packet(&payload), Err(Nrf24Error::MaxRetries));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_packet_from_rx_mode() {
        let payload = [1u8, 2, 3];
        let mut ce_expectations = vec![PinTransaction::set(PinState::Low)];
        ce_expectations.extend(pulse_ce());
        let mut spi_expectations = spi_test_expects![
            // standby_mode()
            (vec![registers::CONFIG, commands::NOP], vec![0xEu8, 0xFu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xEu8],
                vec![0xEu8, 0u8],
            ),
        ]
        .to_vec();
        spi_expectations.extend(upload(&payload));
        spi_expectations.extend(spi_test_expects![
            (STATUS_READ.to_vec(), vec![0x2Eu8, 0x2Eu8]),
            (CLEAR_TX_DS.to_vec(), vec![0x2Eu8, 0u8]),
        ]);
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._mode = Mode::Rx;
        radio._payload_size = 3;
        radio.send_packet(&payload).unwrap();
        assert_eq!(radio.mode(), Mode::StandbyI);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_packet_timeout() {
        let payload = [0x55u8; 2];
        let mut spi_expectations = upload(&payload);
        // polls at 0, 10 and 20 us
        spi_expectations.extend(idle_polls(3));
        spi_expectations.extend(spi_test_expects![(vec![commands::FLUSH_TX], vec![0xEu8]),]);
        let mocks = mk_radio(&pulse_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_size = 2;
        assert_eq!(
            radio.send_packet_timeout(&payload, 20),
            Err(Nrf24Error::Timeout)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn send_packet_timeout_acknowledged() {
        let payload = [0x55u8; 2];
        let mut spi_expectations = upload(&payload);
        spi_expectations.extend(idle_polls(1));
        spi_expectations.extend(spi_test_expects![
            (STATUS_READ.to_vec(), vec![0x2Eu8, 0x2Eu8]),
            (CLEAR_TX_DS.to_vec(), vec![0x2Eu8, 0u8]),
        ]);
        let mocks = mk_radio(&pulse_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_size = 2;
        radio.send_packet_timeout(&payload, 1000).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn payload_bounds() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::FEATURE | commands::W_REGISTER, 5u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let rejected = Err(Nrf24Error::Parameter(ParameterError::PayloadSize));
        // no static payload size was set
        assert_eq!(radio.send_packet(&[1u8]), rejected);
        radio._payload_size = 4;
        assert_eq!(radio.send_packet(&[0u8; 5]), rejected);
        assert_eq!(radio.write_packet(&[]), rejected);
        radio.dyn_payloads_enable().unwrap();
        assert_eq!(radio.send_packet(&[0u8; 33]), rejected);
        let mut buf = [0u8; 33];
        assert_eq!(radio.read_packet(&mut buf), rejected);
        assert_eq!(radio.read_packet(&mut buf[..0]), rejected);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn tx_response() {
        let payload = [0x55u8; 2];
        let mut spi_expectations = upload(&payload);
        spi_expectations.extend(idle_polls(1));
        spi_expectations.extend(spi_test_expects![
            (STATUS_READ.to_vec(), vec![0x1Eu8, 0x1Eu8]),
            (CLEAR_MAX_RT.to_vec(), vec![0x1Eu8, 0u8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
        ]);
        let mocks = mk_radio(&pulse_ce(), &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio._payload_size = 2;
        radio.write_packet(&payload).unwrap();
        assert_eq!(radio.tx_response(), Ok(TxResponse::Waiting));
        assert_eq!(radio.tx_response(), Ok(TxResponse::TimedOut));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn read_packet() {
        let mut expected = vec![commands::R_RX_PAYLOAD];
        expected.extend_from_slice(&[commands::NOP; 32]);
        let mut response = vec![0xEu8];
        response.extend_from_slice(&[0x55u8; 32]);
        let spi_expectations = spi_test_expects![
            (expected, response),
            (vec![commands::R_RX_PAYLOAD, commands::NOP], vec![0xEu8, 0xAAu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut payload = [0u8; 32];
        radio.read_packet(&mut payload).unwrap();
        assert_eq!(payload, [0x55u8; 32]);
        let mut payload = [0u8; 1];
        radio.read_packet(&mut payload).unwrap();
        assert_eq!(payload, [0xAAu8]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn is_packet() {
        let spi_expectations = spi_test_expects![
            // nothing received
            (STATUS_READ.to_vec(), vec![0xEu8, 0xEu8]),
            // received on pipe 2
            (STATUS_READ.to_vec(), vec![0x44u8, 0x44u8]),
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR,
                ],
                vec![0x44u8, 0u8],
            ),
            // received on pipe 5 but no pipe requested
            (STATUS_READ.to_vec(), vec![0x4Au8, 0x4Au8]),
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR,
                ],
                vec![0x4Au8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut pipe = 9u8;
        assert!(!radio.is_packet(Some(&mut pipe)).unwrap());
        assert_eq!(pipe, 9);
        assert!(radio.is_packet(Some(&mut pipe)).unwrap());
        assert_eq!(pipe, 2);
        assert!(radio.is_packet(None).unwrap());
        spi.done();
        ce_pin.done();
    }
}
