//! Structured GPDMA control and configuration words.
//!
//! [`TransferControl`] describes one LLI's CControl word and
//! [`ChannelConfig`] a channel's CConfig word. Both are kept in structured
//! form everywhere and only packed into the hardware layout when written
//! into a descriptor or register.

use super::Direction;
use crate::internal::register::gpdma::{
    CCONFIG_DESTPERIPHERAL_SHIFT, CCONFIG_E, CCONFIG_FLOWCNTRL_MASK, CCONFIG_FLOWCNTRL_SHIFT,
    CCONFIG_H, CCONFIG_IE, CCONFIG_ITC, CCONFIG_L, CCONFIG_PERIPHERAL_MASK,
    CCONFIG_SRCPERIPHERAL_SHIFT, CCONTROL_BSIZE_MASK, CCONTROL_D, CCONTROL_DBSIZE_SHIFT,
    CCONTROL_DI, CCONTROL_DWIDTH_SHIFT, CCONTROL_I, CCONTROL_PROT1, CCONTROL_PROT2,
    CCONTROL_PROT3, CCONTROL_S, CCONTROL_SBSIZE_SHIFT, CCONTROL_SI, CCONTROL_SWIDTH_SHIFT,
    CCONTROL_TRANSFERSIZE_MASK, CCONTROL_TRANSFERSIZE_SHIFT, CCONTROL_WIDTH_MASK,
};

// =============================================================================
// Field Types
// =============================================================================

/// Width of one transfer on either side of the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TransferWidth {
    /// 8-bit transfers
    Byte = 0,
    /// 16-bit transfers
    HalfWord = 1,
    /// 32-bit transfers
    #[default]
    Word = 2,
}

impl TransferWidth {
    /// Bytes moved per transfer
    #[must_use]
    pub const fn bytes(self) -> usize {
        1 << (self as usize)
    }

    /// Decode a 3-bit width field. Reserved encodings read as `Word`.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & CCONTROL_WIDTH_MASK {
            0 => TransferWidth::Byte,
            1 => TransferWidth::HalfWord,
            _ => TransferWidth::Word,
        }
    }
}

/// Transfers per burst request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BurstSize {
    /// 1 transfer per request
    #[default]
    Single = 0,
    /// 4 transfers per request
    Burst4 = 1,
    /// 8 transfers per request
    Burst8 = 2,
    /// 16 transfers per request
    Burst16 = 3,
    /// 32 transfers per request
    Burst32 = 4,
    /// 64 transfers per request
    Burst64 = 5,
    /// 128 transfers per request
    Burst128 = 6,
    /// 256 transfers per request
    Burst256 = 7,
}

impl BurstSize {
    /// Number of transfers per burst
    #[must_use]
    pub const fn transfers(self) -> usize {
        match self {
            BurstSize::Single => 1,
            other => 1 << (other as usize + 1),
        }
    }

    /// Decode a 3-bit burst size field
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & CCONTROL_BSIZE_MASK {
            0 => BurstSize::Single,
            1 => BurstSize::Burst4,
            2 => BurstSize::Burst8,
            3 => BurstSize::Burst16,
            4 => BurstSize::Burst32,
            5 => BurstSize::Burst64,
            6 => BurstSize::Burst128,
            _ => BurstSize::Burst256,
        }
    }
}

/// AHB bus master used for an access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AhbMaster {
    /// AHB master 0
    #[default]
    Master0 = 0,
    /// AHB master 1
    Master1 = 1,
}

impl AhbMaster {
    /// Value of the single-bit master select field
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Decode a single-bit master select field
    #[must_use]
    pub const fn from_bit(set: bool) -> Self {
        if set {
            AhbMaster::Master1
        } else {
            AhbMaster::Master0
        }
    }
}

/// AHB protection attributes (HPROT) for data accesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Protection {
    /// Privileged mode access
    pub privileged: bool,
    /// Bufferable access
    pub bufferable: bool,
    /// Cacheable access
    pub cacheable: bool,
}

// =============================================================================
// Transfer Control Word
// =============================================================================

/// One LLI's control word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferControl {
    /// Number of source-width transfers in this LLI (12 bits)
    pub transfer_size: u16,
    /// Source burst size
    pub source_burst: BurstSize,
    /// Destination burst size
    pub destination_burst: BurstSize,
    /// Source transfer width
    pub source_width: TransferWidth,
    /// Destination transfer width
    pub destination_width: TransferWidth,
    /// Master used for source reads
    pub source_master: AhbMaster,
    /// Master used for destination writes
    pub destination_master: AhbMaster,
    /// Increment the source address after each transfer
    pub source_increment: bool,
    /// Increment the destination address after each transfer
    pub destination_increment: bool,
    /// Protection attributes
    pub protection: Protection,
    /// Raise the terminal count interrupt when this LLI completes
    pub terminal_count_interrupt: bool,
}

impl TransferControl {
    /// A word-wide, single-burst control word with everything else cleared
    #[must_use]
    pub const fn new(transfer_size: u16) -> Self {
        Self {
            transfer_size,
            source_burst: BurstSize::Single,
            destination_burst: BurstSize::Single,
            source_width: TransferWidth::Word,
            destination_width: TransferWidth::Word,
            source_master: AhbMaster::Master0,
            destination_master: AhbMaster::Master0,
            source_increment: false,
            destination_increment: false,
            protection: Protection {
                privileged: false,
                bufferable: false,
                cacheable: false,
            },
            terminal_count_interrupt: false,
        }
    }

    /// Pack into the CControl register layout
    #[must_use]
    pub const fn to_raw(&self) -> u32 {
        let mut raw = ((self.transfer_size as u32) & CCONTROL_TRANSFERSIZE_MASK)
            << CCONTROL_TRANSFERSIZE_SHIFT;
        raw |= (self.source_burst as u32) << CCONTROL_SBSIZE_SHIFT;
        raw |= (self.destination_burst as u32) << CCONTROL_DBSIZE_SHIFT;
        raw |= (self.source_width as u32) << CCONTROL_SWIDTH_SHIFT;
        raw |= (self.destination_width as u32) << CCONTROL_DWIDTH_SHIFT;
        if self.source_master.bit() != 0 {
            raw |= CCONTROL_S;
        }
        if self.destination_master.bit() != 0 {
            raw |= CCONTROL_D;
        }
        if self.source_increment {
            raw |= CCONTROL_SI;
        }
        if self.destination_increment {
            raw |= CCONTROL_DI;
        }
        if self.protection.privileged {
            raw |= CCONTROL_PROT1;
        }
        if self.protection.bufferable {
            raw |= CCONTROL_PROT2;
        }
        if self.protection.cacheable {
            raw |= CCONTROL_PROT3;
        }
        if self.terminal_count_interrupt {
            raw |= CCONTROL_I;
        }
        raw
    }

    /// Decode a CControl word
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            transfer_size: ((raw >> CCONTROL_TRANSFERSIZE_SHIFT) & CCONTROL_TRANSFERSIZE_MASK)
                as u16,
            source_burst: BurstSize::from_bits(raw >> CCONTROL_SBSIZE_SHIFT),
            destination_burst: BurstSize::from_bits(raw >> CCONTROL_DBSIZE_SHIFT),
            source_width: TransferWidth::from_bits(raw >> CCONTROL_SWIDTH_SHIFT),
            destination_width: TransferWidth::from_bits(raw >> CCONTROL_DWIDTH_SHIFT),
            source_master: AhbMaster::from_bit(raw & CCONTROL_S != 0),
            destination_master: AhbMaster::from_bit(raw & CCONTROL_D != 0),
            source_increment: raw & CCONTROL_SI != 0,
            destination_increment: raw & CCONTROL_DI != 0,
            protection: Protection {
                privileged: raw & CCONTROL_PROT1 != 0,
                bufferable: raw & CCONTROL_PROT2 != 0,
                cacheable: raw & CCONTROL_PROT3 != 0,
            },
            terminal_count_interrupt: raw & CCONTROL_I != 0,
        }
    }
}

// =============================================================================
// Channel Configuration Word
// =============================================================================

/// Transfer type and flow controller (CConfig.FLOWCNTRL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FlowControl {
    /// Memory to memory, DMA controlled
    MemoryToMemory = 0,
    /// Memory to peripheral, DMA controlled
    MemoryToPeripheral = 1,
    /// Peripheral to memory, DMA controlled
    PeripheralToMemory = 2,
    /// Peripheral to peripheral, DMA controlled
    PeripheralToPeripheral = 3,
    /// Peripheral to peripheral, destination peripheral controlled
    PeripheralToPeripheralDestination = 4,
    /// Memory to peripheral, peripheral controlled
    MemoryToPeripheralPeripheral = 5,
    /// Peripheral to memory, peripheral controlled
    PeripheralToMemoryPeripheral = 6,
    /// Peripheral to peripheral, source peripheral controlled
    PeripheralToPeripheralSource = 7,
}

impl FlowControl {
    /// DMA-controlled flow for a streaming direction
    #[must_use]
    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Transmit => FlowControl::MemoryToPeripheral,
            Direction::Receive => FlowControl::PeripheralToMemory,
        }
    }

    /// Decode a 3-bit flow control field
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & CCONFIG_FLOWCNTRL_MASK {
            0 => FlowControl::MemoryToMemory,
            1 => FlowControl::MemoryToPeripheral,
            2 => FlowControl::PeripheralToMemory,
            3 => FlowControl::PeripheralToPeripheral,
            4 => FlowControl::PeripheralToPeripheralDestination,
            5 => FlowControl::MemoryToPeripheralPeripheral,
            6 => FlowControl::PeripheralToMemoryPeripheral,
            _ => FlowControl::PeripheralToPeripheralSource,
        }
    }
}

/// A channel's configuration word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    /// Channel enable
    pub enable: bool,
    /// Source peripheral request line
    pub source_peripheral: u8,
    /// Destination peripheral request line
    pub destination_peripheral: u8,
    /// Transfer type and flow controller
    pub flow_control: FlowControl,
    /// Unmask the channel's error interrupt
    pub error_interrupt: bool,
    /// Unmask the channel's terminal count interrupt
    pub terminal_count_interrupt: bool,
    /// Locked AHB transfers
    pub lock: bool,
    /// Ignore further source requests
    pub halt: bool,
}

impl ChannelConfig {
    /// Configuration used when arming a streaming ring
    ///
    /// Both interrupts unmasked, lock and halt clear, and the channel left
    /// disabled so that enabling it is a separate step.
    #[must_use]
    pub const fn streaming(direction: Direction, request_line: u8) -> Self {
        Self {
            enable: false,
            source_peripheral: request_line,
            destination_peripheral: request_line,
            flow_control: FlowControl::for_direction(direction),
            error_interrupt: true,
            terminal_count_interrupt: true,
            lock: false,
            halt: false,
        }
    }

    /// Pack into the CConfig register layout
    #[must_use]
    pub const fn to_raw(&self) -> u32 {
        let mut raw = ((self.source_peripheral as u32) & CCONFIG_PERIPHERAL_MASK)
            << CCONFIG_SRCPERIPHERAL_SHIFT;
        raw |= ((self.destination_peripheral as u32) & CCONFIG_PERIPHERAL_MASK)
            << CCONFIG_DESTPERIPHERAL_SHIFT;
        raw |= (self.flow_control as u32) << CCONFIG_FLOWCNTRL_SHIFT;
        if self.enable {
            raw |= CCONFIG_E;
        }
        if self.error_interrupt {
            raw |= CCONFIG_IE;
        }
        if self.terminal_count_interrupt {
            raw |= CCONFIG_ITC;
        }
        if self.lock {
            raw |= CCONFIG_L;
        }
        if self.halt {
            raw |= CCONFIG_H;
        }
        raw
    }

    /// Decode a CConfig word (the read-only active bit is ignored)
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            enable: raw & CCONFIG_E != 0,
            source_peripheral: ((raw >> CCONFIG_SRCPERIPHERAL_SHIFT) & CCONFIG_PERIPHERAL_MASK)
                as u8,
            destination_peripheral: ((raw >> CCONFIG_DESTPERIPHERAL_SHIFT)
                & CCONFIG_PERIPHERAL_MASK) as u8,
            flow_control: FlowControl::from_bits(raw >> CCONFIG_FLOWCNTRL_SHIFT),
            error_interrupt: raw & CCONFIG_IE != 0,
            terminal_count_interrupt: raw & CCONFIG_ITC != 0,
            lock: raw & CCONFIG_L != 0,
            halt: raw & CCONFIG_H != 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
