//! Memory-mapped register definitions for the LPC43xx blocks this driver touches
//!
//! All register access is volatile to ensure proper hardware interaction.

// Register maps are complete; not every accessor has a caller
#![allow(dead_code)]

pub mod creg;
pub mod gpdma;
pub mod sgpio;

/// GPDMA controller register block base address
pub const GPDMA_BASE: usize = 0x4000_2000;

/// Configuration register (CREG) block base address
pub const CREG_BASE: usize = 0x4004_3000;

/// SGPIO register block base address
pub const SGPIO_BASE: usize = 0x4010_1000;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}

/// Modify a register using a read-modify-write operation
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn modify_reg<F>(addr: usize, f: F)
where
    F: FnOnce(u32) -> u32,
{
    // SAFETY: caller guarantees address validity
    let value = unsafe { read_reg(addr) };
    unsafe { write_reg(addr, f(value)) }
}

// =============================================================================
// Register Access Macros
// =============================================================================

/// Generate read/write accessor methods for a register.
///
/// # Example
/// ```ignore
/// impl GpdmaRegs {
///     reg_rw!(config, set_config, GPDMA_BASE, CONFIG_OFFSET, "Configuration register");
/// }
/// ```
macro_rules! reg_rw {
    ($read_fn:ident, $write_fn:ident, $base:expr, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn() -> u32 {
            unsafe { $crate::internal::register::read_reg($base + $offset) }
        }

        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(value: u32) {
            unsafe { $crate::internal::register::write_reg($base + $offset, value) }
        }
    };
}

/// Generate a read-only accessor method for a register.
macro_rules! reg_ro {
    ($read_fn:ident, $base:expr, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read ", $doc)]
        #[inline(always)]
        pub fn $read_fn() -> u32 {
            unsafe { $crate::internal::register::read_reg($base + $offset) }
        }
    };
}

/// Generate a write-only accessor method for a register.
macro_rules! reg_wo {
    ($write_fn:ident, $base:expr, $offset:expr, $doc:expr) => {
        #[doc = concat!("Write ", $doc)]
        #[inline(always)]
        pub fn $write_fn(value: u32) {
            unsafe { $crate::internal::register::write_reg($base + $offset, value) }
        }
    };
}

/// Generate read/write accessor methods for a per-channel register.
///
/// The generated methods take the channel number as their first argument.
macro_rules! channel_reg_rw {
    ($read_fn:ident, $write_fn:ident, $offset:expr, $doc:expr) => {
        #[doc = concat!("Read channel ", $doc)]
        #[inline(always)]
        pub fn $read_fn(channel: u8) -> u32 {
            unsafe { $crate::internal::register::read_reg(Self::channel_base(channel) + $offset) }
        }

        #[doc = concat!("Write channel ", $doc)]
        #[inline(always)]
        pub fn $write_fn(channel: u8, value: u32) {
            unsafe {
                $crate::internal::register::write_reg(Self::channel_base(channel) + $offset, value)
            }
        }
    };
}

pub(crate) use channel_reg_rw;
pub(crate) use reg_ro;
pub(crate) use reg_rw;
pub(crate) use reg_wo;
