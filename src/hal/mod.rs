//! Hardware Abstraction Layer
//!
//! - [`gpdma`]: GPDMA channel operations behind the [`GpdmaBus`] trait

pub mod gpdma;

pub use gpdma::{Gpdma, GpdmaBus};
