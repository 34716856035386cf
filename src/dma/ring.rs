//! Circular descriptor ring.
//!
//! Descriptor `i` moves slice `i` and links to descriptor `(i + 1) % N`, so
//! the controller cycles through the buffer until the channel is disabled.
//! Odd descriptors raise the terminal count interrupt, giving one interrupt
//! per two slices.

use super::Direction;
use super::control::{AhbMaster, BurstSize, TransferControl};
use super::descriptor::Descriptor;
use super::layout::SliceLayout;
use crate::driver::error::{ConfigError, ConfigResult};

/// Peripheral side of a streaming ring, plus master assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Endpoint {
    /// Bus address of the peripheral data register (never incremented)
    pub peripheral_address: u32,
    /// Master for buffer accesses and descriptor fetches
    pub memory_master: AhbMaster,
    /// Master for peripheral register accesses
    pub peripheral_master: AhbMaster,
    /// Burst size on both sides
    pub burst: BurstSize,
}

/// Fixed-size circular ring of GPDMA descriptors
pub struct DescriptorRing<const N: usize> {
    descriptors: [Descriptor; N],
    direction: Option<Direction>,
}

impl<const N: usize> DescriptorRing<N> {
    /// An unlinked ring of zeroed descriptors
    ///
    /// A ring needs at least one descriptor; `N == 0` fails to compile.
    ///
    /// ```compile_fail
    /// let ring = sgpio_dma::DescriptorRing::<0>::new();
    /// assert_eq!(ring.len(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "descriptor ring needs at least one descriptor") };
        Self {
            descriptors: [const { Descriptor::new() }; N],
            direction: None,
        }
    }

    /// Number of descriptors (and slices) in the ring
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the ring has no descriptors
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Direction the ring was last built for
    #[inline(always)]
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Get a reference to a descriptor at a specific index (wraps)
    #[inline(always)]
    pub fn get(&self, index: usize) -> &Descriptor {
        &self.descriptors[index % N]
    }

    /// Descriptor the channel is armed with
    #[inline(always)]
    pub fn first(&self) -> &Descriptor {
        &self.descriptors[0]
    }

    /// Iterate over all descriptors
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    /// Link the ring over `byte_count` bytes at bus address `base`
    ///
    /// The buffer is split into `N` equal slices. Memory addresses advance
    /// by one slice per descriptor while the peripheral address is the same
    /// in every descriptor. The ring must not move after this call.
    ///
    /// # Errors
    ///
    /// Any geometry error from [`SliceLayout::new`], or
    /// [`ConfigError::MasterConflict`] if both sides share a master.
    pub fn build(
        &mut self,
        base: u32,
        byte_count: usize,
        direction: Direction,
        endpoint: &Endpoint,
    ) -> ConfigResult<SliceLayout> {
        if endpoint.memory_master == endpoint.peripheral_master {
            return Err(ConfigError::MasterConflict);
        }
        let layout = SliceLayout::new(base, byte_count, N)?;

        for (i, desc) in self.descriptors.iter().enumerate() {
            let memory = layout.memory_address(i);
            let next = self.descriptors[(i + 1) % N].address();
            let control = slice_control(&layout, direction, endpoint, i % 2 == 1);

            let (source, destination) = match direction {
                Direction::Receive => (endpoint.peripheral_address, memory),
                Direction::Transmit => (memory, endpoint.peripheral_address),
            };
            desc.setup(source, destination, next, endpoint.memory_master, &control);
        }

        self.direction = Some(direction);
        debug!(
            "{:?} ring: {} x {} bytes at {:#x}",
            direction,
            N,
            layout.slice_bytes(),
            layout.base()
        );
        Ok(layout)
    }

    /// Index of the descriptor whose next-LLI word equals `next`
    ///
    /// The controller's LLI register holds the next word of the descriptor
    /// currently executing, so this identifies the slice in flight.
    #[must_use]
    pub fn position_of(&self, next: u32) -> Option<usize> {
        self.descriptors.iter().position(|d| d.raw_next() == next)
    }

    /// Like [`position_of`](Self::position_of), falling back to 0 when
    /// nothing matches
    #[must_use]
    pub fn index_for(&self, next: u32) -> usize {
        self.position_of(next).unwrap_or_else(|| {
            trace!("no descriptor links to {:#x}", next);
            0
        })
    }
}

impl<const N: usize> Default for DescriptorRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn slice_control(
    layout: &SliceLayout,
    direction: Direction,
    endpoint: &Endpoint,
    interrupt: bool,
) -> TransferControl {
    let (source_master, destination_master) = match direction {
        Direction::Receive => (endpoint.peripheral_master, endpoint.memory_master),
        Direction::Transmit => (endpoint.memory_master, endpoint.peripheral_master),
    };

    TransferControl {
        source_burst: endpoint.burst,
        destination_burst: endpoint.burst,
        source_master,
        destination_master,
        source_increment: direction.is_transmit(),
        destination_increment: direction.is_receive(),
        terminal_count_interrupt: interrupt,
        ..TransferControl::new(layout.transfer_units())
    }
}

// =============================================================================
// Tests
// =============================================================================
