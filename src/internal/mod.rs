//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`register`]: Raw memory-mapped GPDMA, CREG and SGPIO register definitions
//! - [`constants`]: Transfer geometry limits and default routing

pub(crate) mod constants;
pub(crate) mod register;
