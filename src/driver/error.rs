//! Error types for the SGPIO DMA driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Ring geometry and initialization failures
//! - [`DmaError`]: Errors reported by the GPDMA channel at runtime
//! - [`IoError`]: Control operations issued in the wrong state
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and initialization errors
///
/// These are fatal at init: a ring is never built from a geometry that would
/// need truncated or misaligned slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Driver already initialized
    AlreadyInitialized,
    /// Ring has no descriptors
    EmptyRing,
    /// Buffer byte count is zero
    EmptyBuffer,
    /// Byte count is not a multiple of the slice count
    UnevenSlices,
    /// Slice size is not a multiple of the transfer unit
    UnalignedSlice,
    /// Buffer start is not aligned to the transfer unit
    UnalignedBuffer,
    /// Slice holds more transfer units than one descriptor can move
    SliceTooLarge,
    /// GPDMA channel number out of range (must be 0-7)
    InvalidChannel,
    /// Peripheral request line out of range (must be 0-15)
    InvalidRequestLine,
    /// DMAMUX option out of range (must be 0-3)
    InvalidMuxOption,
    /// SGPIO slice out of range (must be 0-15)
    InvalidSgpioSlice,
    /// Memory and peripheral sides assigned to the same AHB master
    MasterConflict,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::AlreadyInitialized => "already initialized",
            ConfigError::EmptyRing => "descriptor ring is empty",
            ConfigError::EmptyBuffer => "buffer is empty",
            ConfigError::UnevenSlices => "byte count not divisible by slice count",
            ConfigError::UnalignedSlice => "slice size not a multiple of the transfer unit",
            ConfigError::UnalignedBuffer => "buffer not aligned to the transfer unit",
            ConfigError::SliceTooLarge => "slice exceeds maximum transfer size",
            ConfigError::InvalidChannel => "invalid DMA channel",
            ConfigError::InvalidRequestLine => "invalid peripheral request line",
            ConfigError::InvalidMuxOption => "invalid DMAMUX option",
            ConfigError::InvalidSgpioSlice => "invalid SGPIO slice",
            ConfigError::MasterConflict => "memory and peripheral share an AHB master",
        }
    }
}

// =============================================================================
// DMA Errors
// =============================================================================

/// Errors reported by the GPDMA channel
///
/// The driver never retries on its own; stopping or re-arming after an
/// error is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DmaError {
    /// The channel raised its error interrupt (bus error on a slice or LLI fetch)
    TransferError,
}

impl core::fmt::Display for DmaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DmaError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DmaError::TransferError => "DMA transfer error",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Control errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Invalid state for operation (e.g., not initialized)
    InvalidState,
    /// Slice index outside the ring
    InvalidSlice,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::InvalidState => "invalid state for operation",
            IoError::InvalidSlice => "slice index out of range",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnevenSlices)) => { /* ... */ }
///     Err(Error::Dma(DmaError::TransferError)) => { /* ... */ }
///     Err(Error::Io(IoError::InvalidState)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// DMA error
    Dma(DmaError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Dma(e) => write!(f, "dma: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DmaError> for Error {
    fn from(e: DmaError) -> Self {
        Error::Dma(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for DMA operations
pub type DmaResult<T> = core::result::Result<T, DmaError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
