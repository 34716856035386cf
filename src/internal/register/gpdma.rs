//! GPDMA Controller Register Definitions
//!
//! The LPC43xx general purpose DMA controller has eight channels. Each channel
//! walks a chain of linked list items (LLIs) held in memory; the first LLI is
//! written directly into the channel registers.

use super::{GPDMA_BASE, channel_reg_rw, reg_ro, reg_rw, reg_wo};

// =============================================================================
// Register Offsets
// =============================================================================

/// Interrupt Status Register offset
pub const INTSTAT_OFFSET: usize = 0x000;
/// Interrupt Terminal Count Status Register offset
pub const INTTCSTAT_OFFSET: usize = 0x004;
/// Interrupt Terminal Count Clear Register offset (write-1-to-clear)
pub const INTTCCLEAR_OFFSET: usize = 0x008;
/// Interrupt Error Status Register offset
pub const INTERRSTAT_OFFSET: usize = 0x00C;
/// Interrupt Error Clear Register offset (write-1-to-clear)
pub const INTERRCLR_OFFSET: usize = 0x010;
/// Enabled Channel Register offset
pub const ENBLDCHNS_OFFSET: usize = 0x01C;
/// Configuration Register offset
pub const CONFIG_OFFSET: usize = 0x030;

/// First channel register block offset
pub const CHANNEL_OFFSET: usize = 0x100;
/// Distance between channel register blocks
pub const CHANNEL_STRIDE: usize = 0x20;

/// Channel Source Address Register offset (within a channel block)
pub const CSRCADDR_OFFSET: usize = 0x00;
/// Channel Destination Address Register offset
pub const CDESTADDR_OFFSET: usize = 0x04;
/// Channel Linked List Item Register offset
pub const CLLI_OFFSET: usize = 0x08;
/// Channel Control Register offset
pub const CCONTROL_OFFSET: usize = 0x0C;
/// Channel Configuration Register offset
pub const CCONFIG_OFFSET: usize = 0x10;

/// Number of channels on the controller
pub const CHANNEL_COUNT: u8 = 8;

// =============================================================================
// Configuration Register (CONFIG) Bits
// =============================================================================

/// Controller enable
pub const CONFIG_E: u32 = 1 << 0;
/// AHB master 0 big-endian
pub const CONFIG_M0: u32 = 1 << 1;
/// AHB master 1 big-endian
pub const CONFIG_M1: u32 = 1 << 2;

// =============================================================================
// Channel Linked List Item Register (CLLI) Bits
// =============================================================================

/// AHB master used to fetch the next LLI
pub const CLLI_LM: u32 = 1 << 0;
/// Next LLI address mask (word aligned)
pub const CLLI_LLI_MASK: u32 = !0x3;

// =============================================================================
// Channel Control Register (CCONTROL) Bits
// =============================================================================

/// Transfer size shift (count of source-width transfers)
pub const CCONTROL_TRANSFERSIZE_SHIFT: u32 = 0;
/// Transfer size mask (12 bits)
pub const CCONTROL_TRANSFERSIZE_MASK: u32 = 0xFFF;
/// Source burst size shift
pub const CCONTROL_SBSIZE_SHIFT: u32 = 12;
/// Destination burst size shift
pub const CCONTROL_DBSIZE_SHIFT: u32 = 15;
/// Burst size field mask (3 bits, unshifted)
pub const CCONTROL_BSIZE_MASK: u32 = 0x7;
/// Source width shift
pub const CCONTROL_SWIDTH_SHIFT: u32 = 18;
/// Destination width shift
pub const CCONTROL_DWIDTH_SHIFT: u32 = 21;
/// Width field mask (3 bits, unshifted)
pub const CCONTROL_WIDTH_MASK: u32 = 0x7;
/// Source AHB master select
pub const CCONTROL_S: u32 = 1 << 24;
/// Destination AHB master select
pub const CCONTROL_D: u32 = 1 << 25;
/// Source increment
pub const CCONTROL_SI: u32 = 1 << 26;
/// Destination increment
pub const CCONTROL_DI: u32 = 1 << 27;
/// Protection: privileged mode
pub const CCONTROL_PROT1: u32 = 1 << 28;
/// Protection: bufferable
pub const CCONTROL_PROT2: u32 = 1 << 29;
/// Protection: cacheable
pub const CCONTROL_PROT3: u32 = 1 << 30;
/// Terminal count interrupt enable
pub const CCONTROL_I: u32 = 1 << 31;

// =============================================================================
// Channel Configuration Register (CCONFIG) Bits
// =============================================================================

/// Channel enable
pub const CCONFIG_E: u32 = 1 << 0;
/// Source peripheral shift
pub const CCONFIG_SRCPERIPHERAL_SHIFT: u32 = 1;
/// Destination peripheral shift
pub const CCONFIG_DESTPERIPHERAL_SHIFT: u32 = 6;
/// Peripheral field mask (5 bits, unshifted)
pub const CCONFIG_PERIPHERAL_MASK: u32 = 0x1F;
/// Flow control shift
pub const CCONFIG_FLOWCNTRL_SHIFT: u32 = 11;
/// Flow control mask (3 bits, unshifted)
pub const CCONFIG_FLOWCNTRL_MASK: u32 = 0x7;
/// Interrupt error mask (1 = error interrupt enabled)
pub const CCONFIG_IE: u32 = 1 << 14;
/// Terminal count interrupt mask (1 = terminal count interrupt enabled)
pub const CCONFIG_ITC: u32 = 1 << 15;
/// Locked transfers
pub const CCONFIG_L: u32 = 1 << 16;
/// Active (read-only: data in the channel FIFO)
pub const CCONFIG_A: u32 = 1 << 17;
/// Halt (ignore further source requests)
pub const CCONFIG_H: u32 = 1 << 18;

// =============================================================================
// GPDMA Register Access Functions
// =============================================================================

/// GPDMA register block for type-safe access
pub struct GpdmaRegs;

impl GpdmaRegs {
    /// Get the base address
    #[inline(always)]
    pub const fn base() -> usize {
        GPDMA_BASE
    }

    /// Base address of a channel register block
    #[inline(always)]
    pub const fn channel_base(channel: u8) -> usize {
        GPDMA_BASE + CHANNEL_OFFSET + (channel as usize) * CHANNEL_STRIDE
    }

    // -------------------------------------------------------------------------
    // Controller registers
    // -------------------------------------------------------------------------

    reg_rw!(config, set_config, GPDMA_BASE, CONFIG_OFFSET, "Configuration register");

    reg_ro!(int_stat, GPDMA_BASE, INTSTAT_OFFSET, "Interrupt Status register");
    reg_ro!(int_tc_stat, GPDMA_BASE, INTTCSTAT_OFFSET, "Terminal Count Status register");
    reg_ro!(int_err_stat, GPDMA_BASE, INTERRSTAT_OFFSET, "Error Status register");
    reg_ro!(enabled_channels, GPDMA_BASE, ENBLDCHNS_OFFSET, "Enabled Channel register");

    reg_wo!(set_int_tc_clear, GPDMA_BASE, INTTCCLEAR_OFFSET, "Terminal Count Clear register");
    reg_wo!(set_int_err_clear, GPDMA_BASE, INTERRCLR_OFFSET, "Error Clear register");

    // -------------------------------------------------------------------------
    // Channel registers
    // -------------------------------------------------------------------------

    channel_reg_rw!(source_address, set_source_address, CSRCADDR_OFFSET, "Source Address register");
    channel_reg_rw!(
        destination_address,
        set_destination_address,
        CDESTADDR_OFFSET,
        "Destination Address register"
    );
    channel_reg_rw!(linked_list_item, set_linked_list_item, CLLI_OFFSET, "Linked List Item register");
    channel_reg_rw!(control, set_control, CCONTROL_OFFSET, "Control register");
    channel_reg_rw!(channel_config, set_channel_config, CCONFIG_OFFSET, "Configuration register");
}
