//! GPDMA linked list item (LLI).
//!
//! The controller fetches four consecutive words per LLI: source address,
//! destination address, next-LLI word and control word. Fields are accessed
//! through volatile cells because the controller reads them behind the
//! compiler's back.

use super::control::{AhbMaster, TransferControl};
use crate::internal::register::gpdma::{CLLI_LLI_MASK, CLLI_LM};

// =============================================================================
// Volatile Cell
// =============================================================================

/// A cell whose contents are always accessed with volatile reads and writes
#[repr(transparent)]
pub struct VolatileCell<T: Copy> {
    value: core::cell::UnsafeCell<T>,
}

// Safety: every access is a single volatile word operation, which the
// Cortex-M bus performs atomically for u32.
unsafe impl<T: Copy> Sync for VolatileCell<T> {}

impl<T: Copy> VolatileCell<T> {
    /// Create a new volatile cell with the given initial value
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value: core::cell::UnsafeCell::new(value),
        }
    }

    /// Read the value (volatile read)
    #[inline(always)]
    pub fn get(&self) -> T {
        unsafe { core::ptr::read_volatile(self.value.get()) }
    }

    /// Write a value (volatile write)
    #[inline(always)]
    pub fn set(&self, value: T) {
        unsafe { core::ptr::write_volatile(self.value.get(), value) }
    }
}

impl<T: Copy + Default> Default for VolatileCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// One GPDMA linked list item
///
/// Must stay at a fixed address once it has been linked into a ring, since
/// the controller and its neighbour both hold its address.
#[repr(C, align(4))]
pub struct Descriptor {
    source: VolatileCell<u32>,
    destination: VolatileCell<u32>,
    next: VolatileCell<u32>,
    control: VolatileCell<u32>,
}

impl Descriptor {
    /// A zeroed descriptor
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: VolatileCell::new(0),
            destination: VolatileCell::new(0),
            next: VolatileCell::new(0),
            control: VolatileCell::new(0),
        }
    }

    /// Fill in all four words
    ///
    /// `next` is the address of the following descriptor; `fetch_master`
    /// selects the bus master the controller uses to load it.
    pub fn setup(
        &self,
        source: u32,
        destination: u32,
        next: u32,
        fetch_master: AhbMaster,
        control: &TransferControl,
    ) {
        self.source.set(source);
        self.destination.set(destination);
        self.next.set((next & CLLI_LLI_MASK) | fetch_master.bit());
        self.control.set(control.to_raw());
    }

    /// Zero all four words
    pub fn clear(&self) {
        self.source.set(0);
        self.destination.set(0);
        self.next.set(0);
        self.control.set(0);
    }

    /// Source address word
    #[inline(always)]
    #[must_use]
    pub fn source_address(&self) -> u32 {
        self.source.get()
    }

    /// Destination address word
    #[inline(always)]
    #[must_use]
    pub fn destination_address(&self) -> u32 {
        self.destination.get()
    }

    /// Raw next-LLI word, as the controller copies it into its LLI register
    #[inline(always)]
    #[must_use]
    pub fn raw_next(&self) -> u32 {
        self.next.get()
    }

    /// Address of the following descriptor
    #[inline(always)]
    #[must_use]
    pub fn next_address(&self) -> u32 {
        self.next.get() & CLLI_LLI_MASK
    }

    /// Master used to fetch the following descriptor
    #[inline(always)]
    #[must_use]
    pub fn fetch_master(&self) -> AhbMaster {
        AhbMaster::from_bit(self.next.get() & CLLI_LM != 0)
    }

    /// Raw control word
    #[inline(always)]
    #[must_use]
    pub fn raw_control(&self) -> u32 {
        self.control.get()
    }

    /// Decoded control word
    #[must_use]
    pub fn control(&self) -> TransferControl {
        TransferControl::from_raw(self.control.get())
    }

    /// Whether completing this descriptor raises the terminal count interrupt
    #[inline(always)]
    #[must_use]
    pub fn raises_interrupt(&self) -> bool {
        self.control().terminal_count_interrupt
    }

    /// Address of this descriptor as seen by the controller
    #[inline(always)]
    #[must_use]
    pub fn address(&self) -> u32 {
        core::ptr::from_ref(self) as u32
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Descriptor")
            .field("source", &format_args!("{:#010x}", self.source_address()))
            .field(
                "destination",
                &format_args!("{:#010x}", self.destination_address()),
            )
            .field("next", &format_args!("{:#010x}", self.raw_next()))
            .field("control", &format_args!("{:#010x}", self.raw_control()))
            .finish()
    }
}
