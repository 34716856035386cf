//! Configuration types for the SGPIO DMA driver

use crate::dma::{AhbMaster, BurstSize, Endpoint};
use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::{
    DEFAULT_CHANNEL, DEFAULT_DMAMUX_OPTION, DEFAULT_REQUEST_LINE, DEFAULT_SGPIO_SLICE,
    MAX_DMAMUX_OPTION, MAX_REQUEST_LINE, MAX_SGPIO_SLICE,
};
use crate::internal::register::gpdma::CHANNEL_COUNT;
use crate::internal::register::sgpio::reg_ss_address;

/// Channel routing and bus assignment for SGPIO streaming
///
/// The defaults reproduce the usual LPC43xx SGPIO setup: channel 0,
/// request line 0 muxed to SGPIO14, slice A's shadow register as the data
/// port, single transfers, memory on master 1 and the peripheral on master 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SgpioDmaConfig {
    /// GPDMA channel used for streaming (0-7)
    pub channel: u8,
    /// Peripheral request line the channel listens to (0-15)
    pub request_line: u8,
    /// DMAMUX option selected for the request line (0-3)
    pub dmamux_option: u8,
    /// SGPIO slice whose shadow register is the data port, if one was chosen
    pub sgpio_slice: Option<u8>,
    /// Bus address of the SGPIO data register
    pub peripheral_address: u32,
    /// Burst size on both sides of every transfer
    pub burst: BurstSize,
    /// Master for buffer accesses and descriptor fetches
    pub memory_master: AhbMaster,
    /// Master for the SGPIO register
    pub peripheral_master: AhbMaster,
}

impl Default for SgpioDmaConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SgpioDmaConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            request_line: DEFAULT_REQUEST_LINE,
            dmamux_option: DEFAULT_DMAMUX_OPTION,
            sgpio_slice: Some(DEFAULT_SGPIO_SLICE),
            peripheral_address: reg_ss_address(DEFAULT_SGPIO_SLICE),
            burst: BurstSize::Single,
            memory_master: AhbMaster::Master1,
            peripheral_master: AhbMaster::Master0,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the GPDMA channel
    #[must_use]
    pub const fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Set the peripheral request line and its DMAMUX option
    #[must_use]
    pub const fn with_request(mut self, request_line: u8, dmamux_option: u8) -> Self {
        self.request_line = request_line;
        self.dmamux_option = dmamux_option;
        self
    }

    /// Use the shadow register of SGPIO slice `slice` (A = 0) as the data port
    #[must_use]
    pub const fn with_sgpio_slice(mut self, slice: u8) -> Self {
        self.sgpio_slice = Some(slice);
        self.peripheral_address = reg_ss_address(slice);
        self
    }

    /// Set an arbitrary peripheral data register address
    #[must_use]
    pub const fn with_peripheral_address(mut self, address: u32) -> Self {
        self.sgpio_slice = None;
        self.peripheral_address = address;
        self
    }

    /// Set the burst size
    #[must_use]
    pub const fn with_burst(mut self, burst: BurstSize) -> Self {
        self.burst = burst;
        self
    }

    /// Set the memory-side and peripheral-side masters
    #[must_use]
    pub const fn with_masters(mut self, memory: AhbMaster, peripheral: AhbMaster) -> Self {
        self.memory_master = memory;
        self.peripheral_master = peripheral;
        self
    }

    /// Check ranges and master assignment
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidChannel`] if `channel` is 8 or more
    /// - [`ConfigError::InvalidRequestLine`] if `request_line` is 16 or more
    /// - [`ConfigError::InvalidMuxOption`] if `dmamux_option` is 4 or more
    /// - [`ConfigError::InvalidSgpioSlice`] if `sgpio_slice` is 16 or more
    /// - [`ConfigError::MasterConflict`] if both sides use the same master
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.channel >= CHANNEL_COUNT {
            return Err(ConfigError::InvalidChannel);
        }
        if self.request_line > MAX_REQUEST_LINE {
            return Err(ConfigError::InvalidRequestLine);
        }
        if self.dmamux_option > MAX_DMAMUX_OPTION {
            return Err(ConfigError::InvalidMuxOption);
        }
        if matches!(self.sgpio_slice, Some(slice) if slice > MAX_SGPIO_SLICE) {
            return Err(ConfigError::InvalidSgpioSlice);
        }
        if self.memory_master as u8 == self.peripheral_master as u8 {
            return Err(ConfigError::MasterConflict);
        }
        Ok(())
    }

    /// Peripheral side of the descriptor rings
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        Endpoint {
            peripheral_address: self.peripheral_address,
            memory_master: self.memory_master,
            peripheral_master: self.peripheral_master,
            burst: self.burst,
        }
    }
}

/// Streaming driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Rings not built yet
    #[default]
    Uninitialized,
    /// Rings built, channel disabled
    Idle,
    /// Channel running the receive ring
    Receiving,
    /// Channel running the transmit ring
    Transmitting,
}

impl State {
    /// Whether the rings have been built
    #[must_use]
    pub const fn is_initialized(self) -> bool {
        !matches!(self, State::Uninitialized)
    }

    /// Whether the channel is streaming in either direction
    #[must_use]
    pub const fn is_streaming(self) -> bool {
        matches!(self, State::Receiving | State::Transmitting)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SgpioDmaConfig::new();

        assert_eq!(config.channel, 0);
        assert_eq!(config.request_line, 0);
        assert_eq!(config.dmamux_option, 2);
        assert_eq!(config.sgpio_slice, Some(0));
        assert_eq!(config.peripheral_address, 0x4010_1100);
        assert_eq!(config.burst, BurstSize::Single);
        assert_eq!(config.memory_master, AhbMaster::Master1);
        assert_eq!(config.peripheral_master, AhbMaster::Master0);
        assert_eq!(config, SgpioDmaConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SgpioDmaConfig::new()
            .with_channel(7)
            .with_request(3, 1)
            .with_sgpio_slice(8)
            .with_burst(BurstSize::Burst4)
            .with_masters(AhbMaster::Master0, AhbMaster::Master1);

        assert_eq!(config.channel, 7);
        assert_eq!(config.request_line, 3);
        assert_eq!(config.dmamux_option, 1);
        assert_eq!(config.peripheral_address, 0x4010_1120);
        assert_eq!(config.burst, BurstSize::Burst4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_channel() {
        let config = SgpioDmaConfig::new().with_channel(8);
        assert_eq!(config.validate(), Err(ConfigError::InvalidChannel));
    }

    #[test]
    fn validate_rejects_out_of_range_request() {
        let config = SgpioDmaConfig::new().with_request(16, 0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidRequestLine));

        let config = SgpioDmaConfig::new().with_request(0, 4);
        assert_eq!(config.validate(), Err(ConfigError::InvalidMuxOption));
    }

    #[test]
    fn validate_rejects_out_of_range_slice() {
        let config = SgpioDmaConfig::new().with_sgpio_slice(15);
        assert_eq!(config.peripheral_address, 0x4010_113C);
        assert!(config.validate().is_ok());

        let config = SgpioDmaConfig::new().with_sgpio_slice(16);
        assert_eq!(config.validate(), Err(ConfigError::InvalidSgpioSlice));
    }

    #[test]
    fn explicit_address_clears_slice() {
        let config = SgpioDmaConfig::new()
            .with_sgpio_slice(16)
            .with_peripheral_address(0x4010_1140);
        assert_eq!(config.sgpio_slice, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_shared_master() {
        let config = SgpioDmaConfig::new().with_masters(AhbMaster::Master1, AhbMaster::Master1);
        assert_eq!(config.validate(), Err(ConfigError::MasterConflict));
    }

    #[test]
    fn endpoint_carries_peripheral_side() {
        let config = SgpioDmaConfig::new().with_peripheral_address(0x4010_1140);
        let endpoint = config.endpoint();
        assert_eq!(endpoint.peripheral_address, 0x4010_1140);
        assert_eq!(endpoint.memory_master, AhbMaster::Master1);
        assert_eq!(endpoint.peripheral_master, AhbMaster::Master0);
    }

    #[test]
    fn state_predicates() {
        assert!(!State::Uninitialized.is_initialized());
        assert!(State::Idle.is_initialized());
        assert!(!State::Idle.is_streaming());
        assert!(State::Receiving.is_streaming());
        assert!(State::Transmitting.is_streaming());
        assert_eq!(State::default(), State::Uninitialized);
    }
}
