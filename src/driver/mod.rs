//! Core driver components for SGPIO streaming.
//!
//! - [`config`] - Channel routing, bus masters and driver state
//! - [`error`] - Error types and result aliases
//! - [`interrupt`] - Per-channel interrupt flags
//! - [`stream`] - The [`SgpioDma`] driver
//!
//! # Example
//!
//! ```ignore
//! use sgpio_dma::driver::SgpioDmaConfig;
//!
//! let config = SgpioDmaConfig::new()
//!     .with_channel(0)
//!     .with_sgpio_slice(0);
//! ```

// Submodules
pub mod config;
pub mod error;
pub mod interrupt;
pub mod stream;

// Re-exports for convenience
pub use config::{SgpioDmaConfig, State};
pub use error::{ConfigError, ConfigResult, DmaError, DmaResult, Error, IoError, IoResult, Result};
pub use interrupt::ChannelStatus;
pub use stream::{SgpioDma, SgpioDmaDefault};
