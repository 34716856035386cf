//! Per-channel interrupt status.
//!
//! This module provides the [`ChannelStatus`] structure for reading one
//! channel's flags out of the controller-wide status registers.

// =============================================================================
// Channel Status
// =============================================================================

/// Interrupt flags of a single GPDMA channel
///
/// # Example
///
/// ```ignore
/// let status = dma.interrupt_status();
/// if status.terminal_count {
///     dma.acknowledge_completion();
///     // two slices are ready
/// }
/// if status.error {
///     dma.stop();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelStatus {
    /// Terminal count: an interrupt-flagged descriptor completed
    pub terminal_count: bool,
    /// Error: a bus error ended a transfer or descriptor fetch
    pub error: bool,
}

impl ChannelStatus {
    /// Extract `channel`'s bits from the raw status registers
    #[inline]
    #[must_use]
    pub const fn from_raw(terminal_count_status: u32, error_status: u32, channel: u8) -> Self {
        let mask = 1u32 << channel;
        Self {
            terminal_count: terminal_count_status & mask != 0,
            error: error_status & mask != 0,
        }
    }

    /// Check if any flag is set
    #[inline]
    #[must_use]
    pub const fn any(&self) -> bool {
        self.terminal_count || self.error
    }

    /// Check if the error flag is set
    #[inline]
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }
}
