//! GPDMA descriptor rings
//!
//! This module builds the circular linked-list chains that stream SGPIO data
//! to and from memory. All storage is statically sized with const generics.
//!
//! # Architecture
//!
//! - [`SliceLayout`]: Validated split of the buffer into equal slices
//! - [`Descriptor`]: One linked list item in controller layout
//! - [`DescriptorRing`]: `N` descriptors linked into a cycle over a layout
//! - [`TransferControl`] / [`ChannelConfig`]: Structured control words
//!
//! # Example
//!
//! ```ignore
//! use sgpio_dma::dma::{DescriptorRing, Direction, Endpoint};
//!
//! let mut ring = DescriptorRing::<4>::new();
//! let layout = ring.build(buffer_addr, 16384, Direction::Receive, &endpoint)?;
//! assert_eq!(layout.slice_bytes(), 4096);
//! ```

pub mod control;
pub mod descriptor;
pub mod layout;
pub mod ring;

pub use control::{
    AhbMaster, BurstSize, ChannelConfig, FlowControl, Protection, TransferControl, TransferWidth,
};
pub use descriptor::{Descriptor, VolatileCell};
pub use layout::SliceLayout;
pub use ring::{DescriptorRing, Endpoint};

/// Direction of a streaming transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// SGPIO to memory
    Receive,
    /// Memory to SGPIO
    Transmit,
}

impl Direction {
    /// Check for [`Direction::Receive`]
    #[inline(always)]
    #[must_use]
    pub const fn is_receive(self) -> bool {
        matches!(self, Direction::Receive)
    }

    /// Check for [`Direction::Transmit`]
    #[inline(always)]
    #[must_use]
    pub const fn is_transmit(self) -> bool {
        matches!(self, Direction::Transmit)
    }
}
