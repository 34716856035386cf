//! Slice geometry of a streaming buffer.
//!
//! A [`SliceLayout`] splits `byte_count` bytes starting at a word-aligned
//! address into equal slices, one per descriptor. Construction rejects any
//! geometry that would need truncated, misaligned or oversized slices, so
//! every slice address and range handed out afterwards is exact.

use core::ops::Range;

use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::{MAX_TRANSFER_UNITS, TRANSFER_UNIT_BYTES};

/// Validated partition of a buffer into equal slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceLayout {
    base: u32,
    byte_count: usize,
    slice_count: usize,
    slice_bytes: usize,
}

impl SliceLayout {
    /// Partition `byte_count` bytes at bus address `base` into `slice_count`
    /// slices
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyRing`] if `slice_count` is zero
    /// - [`ConfigError::EmptyBuffer`] if `byte_count` is zero
    /// - [`ConfigError::UnevenSlices`] if the bytes do not divide evenly
    /// - [`ConfigError::UnalignedSlice`] if a slice is not whole words
    /// - [`ConfigError::UnalignedBuffer`] if `base` is not word aligned
    /// - [`ConfigError::SliceTooLarge`] if a slice exceeds one descriptor
    pub const fn new(base: u32, byte_count: usize, slice_count: usize) -> ConfigResult<Self> {
        if slice_count == 0 {
            return Err(ConfigError::EmptyRing);
        }
        if byte_count == 0 {
            return Err(ConfigError::EmptyBuffer);
        }
        if !byte_count.is_multiple_of(slice_count) {
            return Err(ConfigError::UnevenSlices);
        }
        let slice_bytes = byte_count / slice_count;
        if !slice_bytes.is_multiple_of(TRANSFER_UNIT_BYTES) {
            return Err(ConfigError::UnalignedSlice);
        }
        if !(base as usize).is_multiple_of(TRANSFER_UNIT_BYTES) {
            return Err(ConfigError::UnalignedBuffer);
        }
        if slice_bytes / TRANSFER_UNIT_BYTES > MAX_TRANSFER_UNITS {
            return Err(ConfigError::SliceTooLarge);
        }

        Ok(Self {
            base,
            byte_count,
            slice_count,
            slice_bytes,
        })
    }

    /// Bus address of the first byte
    #[inline(always)]
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Total bytes covered
    #[inline(always)]
    #[must_use]
    pub const fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Number of slices
    #[inline(always)]
    #[must_use]
    pub const fn slice_count(&self) -> usize {
        self.slice_count
    }

    /// Bytes per slice
    #[inline(always)]
    #[must_use]
    pub const fn slice_bytes(&self) -> usize {
        self.slice_bytes
    }

    /// 32-bit transfers per slice
    #[inline(always)]
    #[must_use]
    pub const fn transfer_units(&self) -> u16 {
        (self.slice_bytes / TRANSFER_UNIT_BYTES) as u16
    }

    /// Byte range of slice `index` relative to the buffer start
    #[must_use]
    pub const fn slice_range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.slice_count {
            return None;
        }
        let start = index * self.slice_bytes;
        Some(start..start + self.slice_bytes)
    }

    /// Bus address of the first byte of slice `index`
    #[must_use]
    pub const fn slice_address(&self, index: usize) -> Option<u32> {
        if index >= self.slice_count {
            return None;
        }
        Some(self.memory_address(index))
    }

    #[inline(always)]
    pub(crate) const fn memory_address(&self, index: usize) -> u32 {
        self.base.wrapping_add((index * self.slice_bytes) as u32)
    }
}
