//! Centralized Constants
//!
//! Single source of truth for the magic numbers used by the driver.
//! Hardware register bit definitions remain in `internal/register/`.

// =============================================================================
// Transfer Geometry
// =============================================================================

/// Bytes moved per GPDMA transfer (32-bit word on both sides)
pub const TRANSFER_UNIT_BYTES: usize = 4;

/// Largest transfer count one LLI can describe (12-bit CControl field)
pub const MAX_TRANSFER_UNITS: usize = 0xFFF;

/// Largest slice one LLI can describe, in bytes
pub const MAX_SLICE_BYTES: usize = MAX_TRANSFER_UNITS * TRANSFER_UNIT_BYTES;

// =============================================================================
// Default Ring Sizes
// =============================================================================

/// Default number of receive slices/descriptors
pub const DEFAULT_RX_SLICES: usize = 4;

/// Default number of transmit slices/descriptors
pub const DEFAULT_TX_SLICES: usize = 4;

// =============================================================================
// Default Routing
// =============================================================================

/// GPDMA channel reserved for SGPIO streaming
pub const DEFAULT_CHANNEL: u8 = 0;

/// GPDMA peripheral request line fed by SGPIO
pub const DEFAULT_REQUEST_LINE: u8 = 0;

/// DMAMUX option routing SGPIO14 onto request line 0
pub const DEFAULT_DMAMUX_OPTION: u8 = 2;

/// SGPIO slice whose shadow register acts as the DMA FIFO (slice A)
pub const DEFAULT_SGPIO_SLICE: u8 = 0;

/// Highest SGPIO slice (P)
pub const MAX_SGPIO_SLICE: u8 = 15;

/// Highest valid GPDMA peripheral request line
pub const MAX_REQUEST_LINE: u8 = 15;

/// Highest valid DMAMUX option
pub const MAX_DMAMUX_OPTION: u8 = 3;
