//! ISR-safe driver wrapper using critical sections.
//!
//! Provides [`SharedSgpioDma`], which lets thread-mode code and the GPDMA
//! interrupt handler share one driver instance.

use super::primitives::CriticalSectionCell;
use crate::dma::Direction;
use crate::driver::error::Result;
use crate::driver::interrupt::ChannelStatus;
use crate::driver::stream::SgpioDma;
use crate::hal::gpdma::{Gpdma, GpdmaBus};

/// ISR-safe SGPIO DMA wrapper using critical sections.
///
/// All access goes through `critical_section::with()`, disabling interrupts
/// for the duration of the closure. A `static` instance also gives the
/// descriptor rings the fixed address they need.
///
/// # Example
///
/// ```ignore
/// static DMA: SharedSgpioDmaDefault = SharedSgpioDma::new(Gpdma::new());
///
/// DMA.with(|dma| dma.init(buffer, SgpioDmaConfig::new()))?;
/// DMA.start_receive()?;
///
/// #[interrupt]
/// fn DMA() {
///     let status = DMA.handle_interrupt();
///     if status.terminal_count {
///         let done = DMA.current_slice_index(Direction::Receive);
///         // slices before `done` are ready
///     }
/// }
/// ```
pub struct SharedSgpioDma<R: GpdmaBus, const RX: usize, const TX: usize> {
    inner: CriticalSectionCell<SgpioDma<R, RX, TX>>,
}

impl<R: GpdmaBus, const RX: usize, const TX: usize> SharedSgpioDma<R, RX, TX> {
    /// Create a new shared driver (const, suitable for static initialization).
    pub const fn new(regs: R) -> Self {
        Self {
            inner: CriticalSectionCell::new(SgpioDma::new(regs)),
        }
    }

    /// Execute a closure with exclusive access to the driver.
    ///
    /// Interrupts are disabled for the duration of the closure.
    #[inline]
    pub fn with<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut SgpioDma<R, RX, TX>) -> T,
    {
        self.inner.with(f)
    }

    /// Try to execute a closure, returning `None` if already borrowed.
    #[inline]
    pub fn try_with<T, F>(&self, f: F) -> Option<T>
    where
        F: FnOnce(&mut SgpioDma<R, RX, TX>) -> T,
    {
        self.inner.try_with(f)
    }

    /// Arm the receive ring.
    pub fn start_receive(&self) -> Result<()> {
        self.with(|dma| dma.start_receive())
    }

    /// Arm the transmit ring.
    pub fn start_transmit(&self) -> Result<()> {
        self.with(|dma| dma.start_transmit())
    }

    /// Disable the channel.
    pub fn stop(&self) {
        self.with(|dma| dma.stop());
    }

    /// Read and clear the channel's interrupt flags.
    pub fn handle_interrupt(&self) -> ChannelStatus {
        self.with(|dma| dma.handle_interrupt())
    }

    /// Index of the slice currently being transferred.
    pub fn current_slice_index(&self, direction: Direction) -> usize {
        self.with(|dma| dma.current_slice_index(direction))
    }
}

/// Shared driver on the hardware controller with 4 receive and 4 transmit slices.
pub type SharedSgpioDmaDefault = SharedSgpioDma<Gpdma, 4, 4>;
