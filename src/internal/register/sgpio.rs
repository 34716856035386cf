//! SGPIO slice shadow registers.
//!
//! The DMA side of SGPIO only ever touches `REG_SS`, the shadow copy of a
//! slice's data register that swaps with the live register on every slice
//! boundary.

use super::SGPIO_BASE;

/// Slice shadow register array offset
pub const REG_SS_OFFSET: usize = 0x100;

/// Address of the shadow data register for slice `slice` (A = 0 .. P = 15)
#[inline(always)]
pub const fn reg_ss_address(slice: u8) -> u32 {
    (SGPIO_BASE + REG_SS_OFFSET + (slice as usize) * 4) as u32
}
