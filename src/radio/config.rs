use core::ops::RangeInclusive;

use crate::radio::rf24::bit_fields::{RfSetup, SetupRetry};
use crate::{AddressWidth, ArDelay, DataRate, PaLevel, ParameterError};

/// The RF channels accepted by the driver.
///
/// Channels 100 - 124 are recommended to avoid WiFi interference, but that is not enforced.
pub const CHANNEL_RANGE: RangeInclusive<u8> = 2..=125;

/// The highest auto-retransmit count (a 4 bit field).
pub const MAX_RETRANSMIT_COUNT: u8 = 15;

pub(crate) fn check_channel(channel: u8) -> Result<(), ParameterError> {
    if CHANNEL_RANGE.contains(&channel) {
        Ok(())
    } else {
        Err(ParameterError::Channel)
    }
}

pub(crate) fn check_retransmit_count(count: u8) -> Result<(), ParameterError> {
    if count <= MAX_RETRANSMIT_COUNT {
        Ok(())
    } else {
        Err(ParameterError::RetransmitCount)
    }
}

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24::radio::RadioConfig;
/// let mut config = RadioConfig::default();
/// config = config.with_channel(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Numeric fields are only checked by [`RadioConfig::validate()`], which
/// [`EsbInit::initialise()`](fn@crate::radio::prelude::EsbInit::initialise)
/// calls before touching the radio.
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) rf_setup: RfSetup,
    address_width: AddressWidth,
    ar_delay: ArDelay,
    retransmit_count: u8,
    channel: u8,
    dynamic_payloads: bool,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `110` |
    /// | [`RadioConfig::address_width()`] | [`AddressWidth::Bytes5`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] (0 dBm) |
    /// | [`RadioConfig::auto_retry_delay()`] | [`ArDelay::Us500`] |
    /// | [`RadioConfig::auto_retry_count()`] | `10` |
    /// | [`RadioConfig::dynamic_payloads()`] | `false` |
    ///
    /// CRC is always 2 bytes and auto-ack is always enabled on all pipes.
    fn default() -> Self {
        Self {
            /*
                - 1 Mbps data rate
                - 0 dBm PA level
            */
            rf_setup: RfSetup::default(),
            address_width: AddressWidth::Bytes5,
            ar_delay: ArDelay::Us500,
            retransmit_count: 10,
            channel: 110,
            dynamic_payloads: false,
        }
    }
}

impl RadioConfig {
    /// Check the numeric fields that the type system does not constrain.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_channel(self.channel)?;
        check_retransmit_count(self.retransmit_count)
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.rf_setup.data_rate()
    }

    /// The Data Rate (over the air).
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        let new_config = self.rf_setup.with_data_rate(data_rate);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.rf_setup.pa_level()
    }

    /// The Power Amplitude (PA) level.
    ///
    /// See [`EsbPaLevel::set_pa_level()`](fn@crate::radio::prelude::EsbPaLevel::set_pa_level).
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        let new_config = self.rf_setup.with_pa_level(level);
        Self {
            rf_setup: new_config,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_address_width()`].
    pub const fn address_width(&self) -> AddressWidth {
        self.address_width
    }

    /// The address width used by all pipes.
    pub fn with_address_width(self, address_width: AddressWidth) -> Self {
        Self {
            address_width,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The RF channel (frequency offset in MHz from 2400 MHz).
    ///
    /// Must be in [`CHANNEL_RANGE`].
    pub fn with_channel(self, channel: u8) -> Self {
        Self { channel, ..self }
    }

    /// Returns the delay set by [`RadioConfig::with_auto_retries()`].
    pub const fn auto_retry_delay(&self) -> ArDelay {
        self.ar_delay
    }

    /// Returns the count set by [`RadioConfig::with_auto_retries()`].
    pub const fn auto_retry_count(&self) -> u8 {
        self.retransmit_count
    }

    /// Set the auto-retransmit `delay` and `count`.
    ///
    /// `count` must not exceed [`MAX_RETRANSMIT_COUNT`].
    pub fn with_auto_retries(self, delay: ArDelay, count: u8) -> Self {
        Self {
            ar_delay: delay,
            retransmit_count: count,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_dynamic_payloads()`].
    pub const fn dynamic_payloads(&self) -> bool {
        self.dynamic_payloads
    }

    /// Enable or disable dynamic payload lengths on all pipes.
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        Self {
            dynamic_payloads: enable,
            ..self
        }
    }

    /// The SETUP_RETR register value.
    ///
    /// Only meaningful after [`RadioConfig::validate()`] passed.
    pub(crate) fn setup_retry(&self) -> SetupRetry {
        SetupRetry::default()
            .with_ard(self.ar_delay)
            .with_arc(self.retransmit_count)
    }
}
