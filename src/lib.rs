//! LPC43xx SGPIO DMA Streaming
//!
//! A `no_std`, `no_alloc` driver that streams samples between the LPC43xx
//! SGPIO peripheral and a memory buffer using one GPDMA channel and a
//! circular linked list of descriptors.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): [`SgpioDma`] with init, start/stop,
//!    interrupt acknowledgement and progress queries
//! 2. **Ring Layer** ([`dma`]): Slice layout, descriptors and the circular
//!    [`DescriptorRing`]
//! 3. **HAL Layer** ([`hal`]): [`GpdmaBus`] register operations and the
//!    [`Gpdma`] controller
//!
//! ## Streaming Model
//!
//! The buffer is split into `N` equal slices with one descriptor each.
//! Descriptors link into a cycle, so once armed the channel runs until it
//! is stopped. Every second slice raises the terminal count interrupt; the
//! handler acknowledges it and asks [`SgpioDma::current_slice_index`] which
//! slice is in flight to know which ones are safe to touch.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and logging
//! - `log`: Log through the `log` facade (ignored when `defmt` is enabled)
//! - `critical-section`: Enable the ISR-safe [`SharedSgpioDma`] wrapper
//!
//! # Example
//!
//! ```ignore
//! use sgpio_dma::{Direction, SgpioDmaConfig, sgpio_dma_static};
//!
//! #[repr(C, align(4))]
//! struct Samples([u8; 16384]);
//! static mut SAMPLES: Samples = Samples([0; 16384]);
//!
//! sgpio_dma_static!(DMA);
//!
//! let buffer = unsafe { &mut (*core::ptr::addr_of_mut!(SAMPLES)).0 };
//! DMA.with(|dma| dma.init(buffer, SgpioDmaConfig::new())).unwrap();
//! DMA.start_receive().unwrap();
//!
//! // In the GPDMA interrupt handler
//! if DMA.handle_interrupt().terminal_count {
//!     let in_flight = DMA.current_slice_index(Direction::Receive);
//! }
//! ```
//!
//! # Memory Requirements
//!
//! Each descriptor is 16 bytes; the default 4 + 4 slice driver adds 128
//! bytes of descriptors on top of the caller's buffer.

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features 'defmt' and 'log' are mutually exclusive.");

// Logging macros; must come before the modules that use them
#[macro_use]
mod fmt;

// =============================================================================
// Modules
// =============================================================================

pub mod dma;
pub mod driver;
pub mod hal;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use dma::{
    AhbMaster, BurstSize, ChannelConfig, Descriptor, DescriptorRing, Direction, Endpoint,
    FlowControl, SliceLayout, TransferControl, TransferWidth,
};
pub use driver::config::{SgpioDmaConfig, State};
pub use driver::error::{
    ConfigError, ConfigResult, DmaError, DmaResult, Error, IoError, IoResult, Result,
};
pub use driver::interrupt::ChannelStatus;
pub use driver::stream::{SgpioDma, SgpioDmaDefault};
pub use hal::{Gpdma, GpdmaBus};

/// Low-level register accessors for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer the driver APIs instead of touching registers directly.
///
/// # Safety
///
/// Direct register access bypasses driver invariants. Use only if you fully
/// understand the LPC43xx GPDMA and accept responsibility for correct
/// sequencing and synchronization.
pub mod unsafe_registers {
    pub use crate::internal::register::creg::CregRegs;
    pub use crate::internal::register::gpdma::GpdmaRegs;
    pub use crate::internal::register::sgpio::reg_ss_address;
}

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::{SharedSgpioDma, SharedSgpioDmaDefault};

/// Shared driver constants.
pub mod constants {
    pub use crate::internal::constants::{
        DEFAULT_CHANNEL, DEFAULT_DMAMUX_OPTION, DEFAULT_REQUEST_LINE, DEFAULT_RX_SLICES,
        DEFAULT_SGPIO_SLICE, DEFAULT_TX_SLICES, MAX_SGPIO_SLICE, MAX_SLICE_BYTES,
        MAX_TRANSFER_UNITS, TRANSFER_UNIT_BYTES,
    };
}

// =============================================================================
// Macro Helpers
// =============================================================================

/// Declare a static, ISR-safe driver on the hardware GPDMA controller.
///
/// The static gives the descriptor rings the fixed address they need once
/// linked.
///
/// # Examples
///
/// ```ignore
/// sgpio_dma::sgpio_dma_static!(DMA);
/// sgpio_dma::sgpio_dma_static!(WIDE, 8, 8);
///
/// DMA.with(|dma| dma.init(buffer, SgpioDmaConfig::new())).unwrap();
/// ```
#[cfg(feature = "critical-section")]
#[macro_export]
macro_rules! sgpio_dma_static {
    ($name:ident) => {
        $crate::sgpio_dma_static!($name, 4, 4);
    };
    ($name:ident, $rx:expr, $tx:expr) => {
        static $name: $crate::sync::SharedSgpioDma<$crate::hal::Gpdma, $rx, $tx> =
            $crate::sync::SharedSgpioDma::new($crate::hal::Gpdma::new());
    };
}
