//! Synchronization Support
//!
//! Interrupt-safe sharing of the streaming driver between thread-mode code
//! and the GPDMA interrupt handler.
//!
//! - [`CriticalSectionCell`] - ISR-safe interior mutability
//! - [`SharedSgpioDma`] - Critical-section protected driver
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module. The critical-section
//!   implementation is provided by the runtime crate (e.g., cortex-m).

mod primitives;
mod shared;

pub use primitives::CriticalSectionCell;
pub use shared::{SharedSgpioDma, SharedSgpioDmaDefault};
