use super::{Nrf24Error, NRF24};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
use super::{
    bit_fields::{Config, RfSetup, SetupRetry},
    registers,
};
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std"))]
use super::mnemonics;

#[cfg(feature = "std")]
extern crate std;

/// A snapshot of the registers shown by [`EsbDetails::print_details()`].
#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
struct RegisterDump {
    channel: u8,
    rf_setup: RfSetup,
    setup_retry: SetupRetry,
    observe_tx: u8,
    config: Config,
    fifo_status: u8,
    dynpd: u8,
    en_aa: u8,
    en_rxaddr: u8,
    width: usize,
    tx_addr: [u8; 5],
    /// Full addresses of pipes 0 and 1
    rx_addr: [[u8; 5]; 2],
    /// The LSByte of pipes 2 - 5
    rx_addr_lsb: [u8; 4],
}

#[cfg(any(all(feature = "defmt", target_os = "none"), feature = "std", test))]
impl<SPI, DO, DELAY> NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn dump_registers(&mut self) -> Result<RegisterDump, Nrf24Error<SPI::Error, DO::Error>> {
        let width = self._config.address_width().len();
        let mut dump = RegisterDump {
            channel: self.read_register(registers::RF_CH)?,
            rf_setup: RfSetup::from_bits(self.read_register(registers::RF_SETUP)?),
            setup_retry: SetupRetry::from_bits(self.read_register(registers::SETUP_RETR)?),
            observe_tx: self.read_register(registers::OBSERVE_TX)?,
            config: Config::from_bits(self.read_register(registers::CONFIG)?),
            fifo_status: self.read_register(registers::FIFO_STATUS)?,
            dynpd: self.read_register(registers::DYNPD)?,
            en_aa: self.read_register(registers::EN_AA)?,
            en_rxaddr: self.read_register(registers::EN_RXADDR)?,
            width,
            tx_addr: [0; 5],
            rx_addr: [[0; 5]; 2],
            rx_addr_lsb: [0; 4],
        };
        self.read_register_bytes(registers::TX_ADDR, &mut dump.tx_addr[..width])?;
        for (pipe, addr) in dump.rx_addr.iter_mut().enumerate() {
            self.read_register_bytes(registers::RX_ADDR_P0 + pipe as u8, &mut addr[..width])?;
        }
        for (pipe, lsb) in dump.rx_addr_lsb.iter_mut().enumerate() {
            *lsb = self.read_register(registers::RX_ADDR_P0 + 2 + pipe as u8)?;
        }
        Ok(dump)
    }
}

impl<SPI, DO, DELAY> EsbDetails for NRF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let dump = self.dump_registers()?;
        defmt::println!("Mode______________________{}", self._mode);
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            dump.channel,
            dump.channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", dump.rf_setup.data_rate());
        defmt::println!("RF Power Amplifier________{}", dump.rf_setup.pa_level());
        defmt::println!("Address length____________{=usize} bytes", dump.width);
        defmt::println!(
            "Static payload size_______{=u8} bytes",
            self._payload_size
        );
        defmt::println!(
            "Auto retry delay__________{=u32} microseconds",
            dump.setup_retry.ard().as_micros()
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            dump.setup_retry.arc()
        );
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            dump.observe_tx >> 4
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            dump.observe_tx & 0xF
        );
        defmt::println!(
            "IRQ on Data Ready_________{=bool}",
            !dump.config.mask_rx_dr()
        );
        defmt::println!(
            "IRQ on Data Sent__________{=bool}",
            !dump.config.mask_tx_ds()
        );
        defmt::println!(
            "IRQ on Max Retries________{=bool}",
            !dump.config.mask_max_rt()
        );
        defmt::println!("Powered Up________________{=bool}", dump.config.pwr_up());
        defmt::println!("PRIM_RX___________________{=bool}", dump.config.prim_rx());
        defmt::println!(
            "RX FIFO empty_____________{=bool}",
            dump.fifo_status & mnemonics::RX_EMPTY > 0
        );
        defmt::println!("Dynamic Payloads__________0b{=0..8}", dump.dynpd);
        defmt::println!("Auto Acknowledgment_______0b{=0..8}", dump.en_aa);
        defmt::println!(
            "TX address________________{=[u8]:02X}",
            &dump.tx_addr[..dump.width]
        );
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for (pipe, addr) in dump.rx_addr.iter().enumerate() {
            defmt::println!(
                "Pipe {=usize} ({=istr}) bound to {=[u8]:02X}",
                pipe,
                if dump.en_rxaddr & (1 << pipe) > 0 {
                    opened
                } else {
                    closed
                },
                &addr[..dump.width]
            );
        }
        for (pipe, lsb) in dump.rx_addr_lsb.iter().enumerate() {
            defmt::println!(
                "Pipe {=usize} ({=istr}) bound to {=u8:02X} (+ pipe 1)",
                pipe + 2,
                if dump.en_rxaddr & (1 << (pipe + 2)) > 0 {
                    opened
                } else {
                    closed
                },
                *lsb
            );
        }
        Ok(())
    }

    #[cfg(not(any(all(feature = "defmt", target_os = "none"), feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(all(feature = "defmt", target_os = "none")))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let dump = self.dump_registers()?;
        std::println!("Mode______________________{}", self._mode);
        std::println!(
            "Channel___________________{} ~ {} MHz",
            dump.channel,
            dump.channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", dump.rf_setup.data_rate());
        std::println!("RF Power Amplifier________{}", dump.rf_setup.pa_level());
        std::println!("Address length____________{} bytes", dump.width);
        std::println!("Static payload size_______{} bytes", self._payload_size);
        std::println!(
            "Auto retry delay__________{} microseconds",
            dump.setup_retry.ard().as_micros()
        );
        std::println!(
            "Auto retry attempts_______{} maximum",
            dump.setup_retry.arc()
        );
        std::println!(
            "Packets lost\n    on current channel____{}",
            dump.observe_tx >> 4
        );
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            dump.observe_tx & 0xF
        );
        std::println!("IRQ on Data Ready_________{}", !dump.config.mask_rx_dr());
        std::println!("IRQ on Data Sent__________{}", !dump.config.mask_tx_ds());
        std::println!("IRQ on Max Retries________{}", !dump.config.mask_max_rt());
        std::println!("Powered Up________________{}", dump.config.pwr_up());
        std::println!("PRIM_RX___________________{}", dump.config.prim_rx());
        std::println!(
            "RX FIFO empty_____________{}",
            dump.fifo_status & mnemonics::RX_EMPTY > 0
        );
        std::println!("Dynamic Payloads__________{:#010b}", dump.dynpd);
        std::println!("Auto Acknowledgment_______{:#010b}", dump.en_aa);
        std::println!(
            "TX address________________{:02X?}",
            &dump.tx_addr[..dump.width]
        );
        for (pipe, addr) in dump.rx_addr.iter().enumerate() {
            std::println!(
                "Pipe {pipe} ({}) bound to {:02X?}",
                if dump.en_rxaddr & (1 << pipe) > 0 {
                    " open "
                } else {
                    "closed"
                },
                &addr[..dump.width]
            );
        }
        for (pipe, lsb) in dump.rx_addr_lsb.iter().enumerate() {
            std::println!(
                "Pipe {} ({}) bound to {lsb:02X} (+ pipe 1)",
                pipe + 2,
                if dump.en_rxaddr & (1 << (pipe + 2)) > 0 {
                    " open "
                } else {
                    "closed"
                }
            );
        }
        Ok(())
    }
}
