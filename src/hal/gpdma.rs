//! GPDMA channel HAL
//!
//! [`GpdmaBus`] is the register surface the streaming driver needs: channel
//! enable/disable, interrupt flag clearing, loading the first descriptor and
//! reading back the live LLI register. [`Gpdma`] implements it on the real
//! LPC43xx controller; host tests use a mock.

use crate::dma::{ChannelConfig, Descriptor};
use crate::internal::register::creg::CregRegs;
use crate::internal::register::gpdma::{CCONFIG_E, CONFIG_E, GpdmaRegs};

// =============================================================================
// GPDMA Bus Trait
// =============================================================================

/// Register-level operations on the GPDMA controller
///
/// Channel numbers are validated by the caller; implementations may assume
/// `channel < 8`.
pub trait GpdmaBus {
    /// Set the controller-wide enable bit
    fn enable_controller(&mut self);

    /// Route DMAMUX `option` onto peripheral request line `request_line`
    fn select_request_source(&mut self, request_line: u8, option: u8);

    /// Clear the channel enable bit, leaving the rest of CConfig intact
    fn disable_channel(&mut self, channel: u8);

    /// Set the channel enable bit, leaving the rest of CConfig intact
    fn enable_channel(&mut self, channel: u8);

    /// Clear the channel's pending terminal count flag
    fn clear_terminal_count(&mut self, channel: u8);

    /// Clear the channel's pending error flag
    fn clear_error(&mut self, channel: u8);

    /// Copy a descriptor's four words into the channel registers
    fn load_descriptor(&mut self, channel: u8, descriptor: &Descriptor);

    /// Write the channel configuration word
    fn set_channel_config(&mut self, channel: u8, config: &ChannelConfig);

    /// One read of the channel's live LLI register
    fn next_descriptor(&self, channel: u8) -> u32;

    /// Raw terminal count status, one bit per channel
    fn terminal_count_status(&self) -> u32;

    /// Raw error status, one bit per channel
    fn error_status(&self) -> u32;

    /// Whether the channel's enable bit is set
    fn is_channel_enabled(&self, channel: u8) -> bool;
}

// =============================================================================
// GPDMA Controller
// =============================================================================

/// The LPC43xx GPDMA controller at its fixed address
#[derive(Debug, Default)]
pub struct Gpdma {
    _private: (),
}

impl Gpdma {
    /// Handle to the controller
    ///
    /// Only one handle should drive a given channel at a time.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl GpdmaBus for Gpdma {
    fn enable_controller(&mut self) {
        GpdmaRegs::set_config(GpdmaRegs::config() | CONFIG_E);
    }

    fn select_request_source(&mut self, request_line: u8, option: u8) {
        CregRegs::select_dmamux(request_line, option);
    }

    fn disable_channel(&mut self, channel: u8) {
        let config = GpdmaRegs::channel_config(channel);
        GpdmaRegs::set_channel_config(channel, config & !CCONFIG_E);
    }

    fn enable_channel(&mut self, channel: u8) {
        let config = GpdmaRegs::channel_config(channel);
        GpdmaRegs::set_channel_config(channel, config | CCONFIG_E);
    }

    fn clear_terminal_count(&mut self, channel: u8) {
        GpdmaRegs::set_int_tc_clear(1 << channel);
    }

    fn clear_error(&mut self, channel: u8) {
        GpdmaRegs::set_int_err_clear(1 << channel);
    }

    fn load_descriptor(&mut self, channel: u8, descriptor: &Descriptor) {
        GpdmaRegs::set_source_address(channel, descriptor.source_address());
        GpdmaRegs::set_destination_address(channel, descriptor.destination_address());
        GpdmaRegs::set_linked_list_item(channel, descriptor.raw_next());
        GpdmaRegs::set_control(channel, descriptor.raw_control());
    }

    fn set_channel_config(&mut self, channel: u8, config: &ChannelConfig) {
        GpdmaRegs::set_channel_config(channel, config.to_raw());
    }

    fn next_descriptor(&self, channel: u8) -> u32 {
        GpdmaRegs::linked_list_item(channel)
    }

    fn terminal_count_status(&self) -> u32 {
        GpdmaRegs::int_tc_stat()
    }

    fn error_status(&self) -> u32 {
        GpdmaRegs::int_err_stat()
    }

    fn is_channel_enabled(&self, channel: u8) -> bool {
        GpdmaRegs::enabled_channels() & (1 << channel) != 0
    }
}
