//! CREG DMAMUX register definitions.
//!
//! DMAMUX selects which of four request sources drives each GPDMA
//! peripheral request line.

use super::{CREG_BASE, modify_reg, read_reg};

/// DMA multiplexer control register offset
pub const DMAMUX_OFFSET: usize = 0x11C;

/// Width of one peripheral's selection field
pub const DMAMUX_FIELD_WIDTH: u32 = 2;

/// Selection field mask (unshifted)
pub const DMAMUX_FIELD_MASK: u32 = 0x3;

/// Shift of the selection field for a GPDMA peripheral request line
#[inline(always)]
pub const fn dmamux_shift(peripheral: u8) -> u32 {
    (peripheral as u32) * DMAMUX_FIELD_WIDTH
}

/// CREG register block for type-safe access
pub struct CregRegs;

impl CregRegs {
    /// Read the DMAMUX register
    #[inline(always)]
    pub fn dmamux() -> u32 {
        unsafe { read_reg(CREG_BASE + DMAMUX_OFFSET) }
    }

    /// Route `option` onto GPDMA peripheral request line `peripheral`
    #[inline(always)]
    pub fn select_dmamux(peripheral: u8, option: u8) {
        let shift = dmamux_shift(peripheral);
        unsafe {
            modify_reg(CREG_BASE + DMAMUX_OFFSET, |v| {
                (v & !(DMAMUX_FIELD_MASK << shift))
                    | ((option as u32 & DMAMUX_FIELD_MASK) << shift)
            });
        }
    }
}
