//! Testing utilities and mock implementations
//!
//! This module provides a register model of the GPDMA controller so the
//! streaming driver can be exercised on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::Cell;
use std::boxed::Box;
use std::vec;
use std::vec::Vec;

use crate::dma::{ChannelConfig, Descriptor};
use crate::hal::gpdma::GpdmaBus;
use crate::internal::register::gpdma::{CCONFIG_E, CHANNEL_COUNT};

// =============================================================================
// Mock GPDMA Controller
// =============================================================================

/// One channel's register file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelRegisters {
    pub source: u32,
    pub destination: u32,
    pub lli: u32,
    pub control: u32,
    pub config: u32,
}

/// Register-level operation recorded by [`MockGpdma`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpdmaOp {
    EnableController,
    SelectRequestSource { request_line: u8, option: u8 },
    DisableChannel(u8),
    EnableChannel(u8),
    ClearTerminalCount(u8),
    ClearError(u8),
    LoadDescriptor(u8),
    SetChannelConfig(u8, u32),
}

/// Mock GPDMA controller for testing the driver without hardware
///
/// Writes update an in-memory register file and are appended to an
/// operation log, so tests can check both resulting register values and the
/// order in which they were written.
///
/// # Example
///
/// ```ignore
/// let mut dma = SgpioDma::<MockGpdma, 4, 4>::new(MockGpdma::new());
/// dma.init(buffer, SgpioDmaConfig::new()).unwrap();
/// dma.start_receive().unwrap();
/// assert!(dma.registers().is_channel_enabled(0));
/// ```
#[derive(Debug, Default)]
pub struct MockGpdma {
    channels: [ChannelRegisters; CHANNEL_COUNT as usize],
    controller_enabled: bool,
    dmamux: u32,
    terminal_count_status: u32,
    error_status: u32,
    ops: Vec<GpdmaOp>,
    lli_reads: Cell<usize>,
}

impl MockGpdma {
    /// Create a new mock controller with every register cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Register file of `channel`
    pub fn channel(&self, channel: u8) -> ChannelRegisters {
        self.channels[channel as usize]
    }

    /// Simulate the controller advancing: overwrite the live LLI register
    pub fn set_next_descriptor(&mut self, channel: u8, value: u32) {
        self.channels[channel as usize].lli = value;
    }

    /// Simulate a completed interrupt-flagged descriptor
    pub fn raise_terminal_count(&mut self, channel: u8) {
        self.terminal_count_status |= 1 << channel;
    }

    /// Simulate a bus error on `channel`
    pub fn raise_error(&mut self, channel: u8) {
        self.error_status |= 1 << channel;
    }

    pub fn controller_enabled(&self) -> bool {
        self.controller_enabled
    }

    /// DMAMUX register contents
    pub fn dmamux(&self) -> u32 {
        self.dmamux
    }

    /// All operations performed so far
    pub fn ops(&self) -> &[GpdmaOp] {
        &self.ops
    }

    /// Clear the operation log
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Number of live LLI register reads so far
    pub fn lli_reads(&self) -> usize {
        self.lli_reads.get()
    }
}

impl GpdmaBus for MockGpdma {
    fn enable_controller(&mut self) {
        self.controller_enabled = true;
        self.ops.push(GpdmaOp::EnableController);
    }

    fn select_request_source(&mut self, request_line: u8, option: u8) {
        let shift = u32::from(request_line) * 2;
        self.dmamux = (self.dmamux & !(0x3 << shift)) | (u32::from(option & 0x3) << shift);
        self.ops.push(GpdmaOp::SelectRequestSource {
            request_line,
            option,
        });
    }

    fn disable_channel(&mut self, channel: u8) {
        self.channels[channel as usize].config &= !CCONFIG_E;
        self.ops.push(GpdmaOp::DisableChannel(channel));
    }

    fn enable_channel(&mut self, channel: u8) {
        self.channels[channel as usize].config |= CCONFIG_E;
        self.ops.push(GpdmaOp::EnableChannel(channel));
    }

    fn clear_terminal_count(&mut self, channel: u8) {
        self.terminal_count_status &= !(1 << channel);
        self.ops.push(GpdmaOp::ClearTerminalCount(channel));
    }

    fn clear_error(&mut self, channel: u8) {
        self.error_status &= !(1 << channel);
        self.ops.push(GpdmaOp::ClearError(channel));
    }

    fn load_descriptor(&mut self, channel: u8, descriptor: &Descriptor) {
        let regs = &mut self.channels[channel as usize];
        regs.source = descriptor.source_address();
        regs.destination = descriptor.destination_address();
        regs.lli = descriptor.raw_next();
        regs.control = descriptor.raw_control();
        self.ops.push(GpdmaOp::LoadDescriptor(channel));
    }

    fn set_channel_config(&mut self, channel: u8, config: &ChannelConfig) {
        let raw = config.to_raw();
        self.channels[channel as usize].config = raw;
        self.ops.push(GpdmaOp::SetChannelConfig(channel, raw));
    }

    fn next_descriptor(&self, channel: u8) -> u32 {
        self.lli_reads.set(self.lli_reads.get() + 1);
        self.channels[channel as usize].lli
    }

    fn terminal_count_status(&self) -> u32 {
        self.terminal_count_status
    }

    fn error_status(&self) -> u32 {
        self.error_status
    }

    fn is_channel_enabled(&self, channel: u8) -> bool {
        self.channels[channel as usize].config & CCONFIG_E != 0
    }
}

// =============================================================================
// Buffers
// =============================================================================

/// Leak a zeroed, word-aligned buffer of `bytes` bytes
///
/// `bytes` is rounded up to whole words for the allocation; the returned
/// slice has exactly `bytes` bytes.
pub fn leak_buffer(bytes: usize) -> &'static mut [u8] {
    let words: &'static mut [u32] = Box::leak(vec![0u32; bytes.div_ceil(4)].into_boxed_slice());
    // SAFETY: the allocation holds at least `bytes` initialized bytes and
    // lives for the rest of the process.
    unsafe { core::slice::from_raw_parts_mut(words.as_mut_ptr().cast::<u8>(), bytes) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dma::{AhbMaster, Direction, TransferControl};

    #[test]
    fn enable_and_disable_touch_only_enable_bit() {
        let mut mock = MockGpdma::new();
        mock.set_channel_config(2, &ChannelConfig::streaming(Direction::Receive, 0));
        let configured = mock.channel(2).config;

        mock.enable_channel(2);
        assert!(mock.is_channel_enabled(2));
        assert_eq!(mock.channel(2).config, configured | CCONFIG_E);

        mock.disable_channel(2);
        assert!(!mock.is_channel_enabled(2));
        assert_eq!(mock.channel(2).config, configured);
    }

    #[test]
    fn load_descriptor_copies_words() {
        let mut mock = MockGpdma::new();
        let desc = Descriptor::new();
        desc.setup(0x10, 0x20, 0x30, AhbMaster::Master1, &TransferControl::new(8));

        mock.load_descriptor(0, &desc);
        let regs = mock.channel(0);
        assert_eq!(regs.source, 0x10);
        assert_eq!(regs.destination, 0x20);
        assert_eq!(regs.lli, 0x31);
        assert_eq!(regs.control, 8 | (2 << 18) | (2 << 21));
    }

    #[test]
    fn status_flags_clear_per_channel() {
        let mut mock = MockGpdma::new();
        mock.raise_terminal_count(0);
        mock.raise_terminal_count(1);
        mock.raise_error(0);

        mock.clear_terminal_count(0);
        mock.clear_error(0);
        assert_eq!(mock.terminal_count_status(), 0b10);
        assert_eq!(mock.error_status(), 0);
    }

    #[test]
    fn request_source_sets_two_bit_field() {
        let mut mock = MockGpdma::new();
        mock.select_request_source(0, 2);
        mock.select_request_source(3, 1);
        assert_eq!(mock.dmamux(), 0b01_00_00_10);
    }

    #[test]
    fn lli_reads_are_counted() {
        let mut mock = MockGpdma::new();
        mock.set_next_descriptor(0, 0x44);
        assert_eq!(mock.next_descriptor(0), 0x44);
        assert_eq!(mock.lli_reads(), 1);
    }

    #[test]
    fn leaked_buffer_is_word_aligned() {
        let buffer = leak_buffer(64);
        assert_eq!(buffer.len(), 64);
        assert_eq!(buffer.as_ptr() as usize % 4, 0);
        assert!(buffer.iter().all(|b| *b == 0));
    }
}
