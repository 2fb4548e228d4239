/// Register offsets for the nRF24L01 register map.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const RX_PW_P5: u8 = 0x16;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;

    /// Only the 5 LSBs of a command byte address a register.
    pub const REGISTER_MASK: u8 = 0x1F;
}

/// SPI commands for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// Bit mnemonics for registers that are not described with a bit field struct.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    /// FEATURE: enable dynamic payload length.
    pub const EN_DPL: u8 = 1 << 2;
    /// FEATURE: enable the `W_TX_PAYLOAD_NOACK` command.
    pub const EN_DYN_ACK: u8 = 1;

    /// All 6 pipes (EN_AA, EN_RXADDR and DYNPD registers).
    pub const ALL_PIPES: u8 = 0x3F;

    /// FIFO_STATUS: RX FIFO empty flag.
    pub const RX_EMPTY: u8 = 1;
}

/// Settle times mandated by the datasheet.
pub mod timing {
    /// Power on reset until the radio enters Power Down mode.
    pub const POWER_ON_RESET_MS: u32 = 100;
    /// CE held low before CSN is first released.
    pub const CE_SETTLE_MS: u32 = 1;
    /// Crystal oscillator start up (Power Down -> Standby-I).
    pub const CRYSTAL_STARTUP_MS: u32 = 5;
    /// Standby -> RX/TX settling (Tstby2a).
    pub const RX_SETTLE_US: u32 = 130;
    /// Minimum CE pulse width that starts a transmission.
    pub const CE_PULSE_US: u32 = 10;
    /// Interval between STATUS polls when a send deadline is given.
    pub const POLL_INTERVAL_US: u32 = 10;
}
