//! Core SGPIO streaming driver.
//!
//! This module contains the [`SgpioDma`] structure and its operations:
//!
//! - One-time initialization of both descriptor rings
//! - Arming the channel for receive or transmit
//! - Stopping and interrupt acknowledgement
//! - Locating the slice currently being transferred

use core::ops::Range;

use super::config::{SgpioDmaConfig, State};
use super::error::{ConfigError, DmaError, DmaResult, IoError, IoResult, Result};
use super::interrupt::ChannelStatus;
use crate::dma::{ChannelConfig, DescriptorRing, Direction, SliceLayout};
use crate::hal::gpdma::{Gpdma, GpdmaBus};

// =============================================================================
// SGPIO DMA Driver
// =============================================================================

/// Circular GPDMA streaming between SGPIO and a sample buffer
///
/// Holds one receive ring of `RX` descriptors and one transmit ring of `TX`
/// descriptors over the same buffer. Only one ring runs at a time; starting
/// either direction re-arms the channel from that ring's first descriptor.
///
/// The rings are linked by address during [`init`](Self::init), so the
/// driver must stay where it is from then on. Keep it in a `static` (see
/// [`SharedSgpioDma`](crate::sync::SharedSgpioDma)) or otherwise pinned.
///
/// # Type Parameters
/// * `R` - GPDMA register access (usually [`Gpdma`](crate::hal::Gpdma))
/// * `RX` - Number of receive slices (typically 4)
/// * `TX` - Number of transmit slices (typically 4)
///
/// # Example
/// ```ignore
/// static mut BUFFER: Aligned<[u8; 16384]> = Aligned([0; 16384]);
/// static mut DMA: SgpioDma<Gpdma, 4, 4> = SgpioDma::new(Gpdma::new());
///
/// let dma = unsafe { &mut *core::ptr::addr_of_mut!(DMA) };
/// dma.init(unsafe { &mut (*core::ptr::addr_of_mut!(BUFFER)).0 }, SgpioDmaConfig::new())?;
/// dma.start_receive()?;
/// ```
pub struct SgpioDma<R: GpdmaBus, const RX: usize, const TX: usize> {
    /// Controller registers
    regs: R,
    /// Channel routing
    config: SgpioDmaConfig,
    /// Current state
    state: State,
    rx_ring: DescriptorRing<RX>,
    tx_ring: DescriptorRing<TX>,
    rx_layout: Option<SliceLayout>,
    tx_layout: Option<SliceLayout>,
    /// Start of the streaming buffer (null until initialized)
    buffer: *mut u8,
}

impl<R: GpdmaBus, const RX: usize, const TX: usize> SgpioDma<R, RX, TX> {
    /// Create a new driver in the `Uninitialized` state
    ///
    /// This is a const function suitable for static initialization.
    pub const fn new(regs: R) -> Self {
        Self {
            regs,
            config: SgpioDmaConfig::new(),
            state: State::Uninitialized,
            rx_ring: DescriptorRing::new(),
            tx_ring: DescriptorRing::new(),
            rx_layout: None,
            tx_layout: None,
            buffer: core::ptr::null_mut(),
        }
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    /// Get the current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the active configuration
    pub fn config(&self) -> &SgpioDmaConfig {
        &self.config
    }

    /// Direction currently streaming, if any
    pub fn active_direction(&self) -> Option<Direction> {
        match self.state {
            State::Receiving => Some(Direction::Receive),
            State::Transmitting => Some(Direction::Transmit),
            State::Uninitialized | State::Idle => None,
        }
    }

    /// Receive descriptor ring
    pub fn rx_ring(&self) -> &DescriptorRing<RX> {
        &self.rx_ring
    }

    /// Transmit descriptor ring
    pub fn tx_ring(&self) -> &DescriptorRing<TX> {
        &self.tx_ring
    }

    /// Slice layout of one direction's ring, once initialized
    pub fn layout(&self, direction: Direction) -> Option<&SliceLayout> {
        match direction {
            Direction::Receive => self.rx_layout.as_ref(),
            Direction::Transmit => self.tx_layout.as_ref(),
        }
    }

    /// Register access backend
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Mutable register access backend
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Build both rings over `buffer` and route the SGPIO request
    ///
    /// The buffer is split into `RX` slices for the receive ring and `TX`
    /// slices for the transmit ring. On success the controller is enabled,
    /// DMAMUX routes the configured option onto the request line and the
    /// driver is `Idle` with the channel disabled.
    ///
    /// # Errors
    /// - `AlreadyInitialized` - called a second time
    /// - Any [`ConfigError`] from the configuration or the ring geometry
    pub fn init(&mut self, buffer: &'static mut [u8], config: SgpioDmaConfig) -> Result<()> {
        if self.state.is_initialized() {
            return Err(ConfigError::AlreadyInitialized.into());
        }
        config.validate()?;

        let base = buffer.as_mut_ptr() as u32;
        let endpoint = config.endpoint();

        let rx_layout = self
            .rx_ring
            .build(base, buffer.len(), Direction::Receive, &endpoint)?;
        let tx_layout = self
            .tx_ring
            .build(base, buffer.len(), Direction::Transmit, &endpoint)?;

        self.regs.disable_channel(config.channel);
        self.regs
            .select_request_source(config.request_line, config.dmamux_option);
        self.regs.enable_controller();

        self.config = config;
        self.rx_layout = Some(rx_layout);
        self.tx_layout = Some(tx_layout);
        self.buffer = buffer.as_mut_ptr();
        self.state = State::Idle;

        info!(
            "SGPIO DMA ready: ch {}, {} bytes, {} rx x {} / {} tx x {}",
            config.channel,
            rx_layout.byte_count(),
            RX,
            rx_layout.slice_bytes(),
            TX,
            tx_layout.slice_bytes()
        );
        Ok(())
    }

    // =========================================================================
    // Start/Stop
    // =========================================================================

    /// Arm the channel with the receive ring and start streaming
    ///
    /// Any transfer in progress is abandoned.
    ///
    /// # Errors
    /// - `InvalidState` - driver is not initialized
    pub fn start_receive(&mut self) -> Result<()> {
        self.start(Direction::Receive)
    }

    /// Arm the channel with the transmit ring and start streaming
    ///
    /// Any transfer in progress is abandoned.
    ///
    /// # Errors
    /// - `InvalidState` - driver is not initialized
    pub fn start_transmit(&mut self) -> Result<()> {
        self.start(Direction::Transmit)
    }

    /// Arm the channel for `direction`
    ///
    /// # Errors
    /// - `InvalidState` - driver is not initialized
    pub fn start(&mut self, direction: Direction) -> Result<()> {
        if !self.state.is_initialized() {
            return Err(IoError::InvalidState.into());
        }

        let channel = self.config.channel;

        // The channel must be disabled before its registers are reloaded
        self.regs.disable_channel(channel);
        self.regs.clear_terminal_count(channel);
        self.regs.clear_error(channel);

        match direction {
            Direction::Receive => self.regs.load_descriptor(channel, self.rx_ring.first()),
            Direction::Transmit => self.regs.load_descriptor(channel, self.tx_ring.first()),
        }
        self.regs.set_channel_config(
            channel,
            &ChannelConfig::streaming(direction, self.config.request_line),
        );
        self.regs.enable_channel(channel);

        self.state = match direction {
            Direction::Receive => State::Receiving,
            Direction::Transmit => State::Transmitting,
        };
        debug!("SGPIO DMA started: {:?}", direction);
        Ok(())
    }

    /// Disable the channel
    ///
    /// Takes effect immediately; data in flight is dropped. Does nothing
    /// before initialization, when no channel has been chosen yet.
    pub fn stop(&mut self) {
        if !self.state.is_initialized() {
            return;
        }
        self.regs.disable_channel(self.config.channel);
        if self.state.is_streaming() {
            self.state = State::Idle;
            debug!("SGPIO DMA stopped");
        }
    }

    // =========================================================================
    // Interrupt Handling
    // =========================================================================

    /// Get the channel's interrupt flags
    pub fn interrupt_status(&self) -> ChannelStatus {
        ChannelStatus::from_raw(
            self.regs.terminal_count_status(),
            self.regs.error_status(),
            self.config.channel,
        )
    }

    /// Clear the channel's terminal count flag
    ///
    /// Leaves the error flag untouched.
    pub fn acknowledge_completion(&mut self) {
        self.regs.clear_terminal_count(self.config.channel);
    }

    /// Clear the channel's error flag
    pub fn acknowledge_error(&mut self) {
        self.regs.clear_error(self.config.channel);
    }

    /// Clear a pending error and report it
    ///
    /// # Errors
    /// - `TransferError` - the channel's error flag was set
    pub fn take_error(&mut self) -> DmaResult<()> {
        if self.interrupt_status().has_error() {
            self.acknowledge_error();
            warn!("SGPIO DMA transfer error on ch {}", self.config.channel);
            return Err(DmaError::TransferError);
        }
        Ok(())
    }

    /// Handle interrupt (call from ISR)
    ///
    /// Reads the channel's flags, clears whichever are set and returns them.
    pub fn handle_interrupt(&mut self) -> ChannelStatus {
        let status = self.interrupt_status();
        if status.terminal_count {
            self.acknowledge_completion();
        }
        if status.error {
            self.acknowledge_error();
        }
        status
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Index of the slice the channel is currently transferring
    ///
    /// Reads the channel's live LLI register once and finds the descriptor
    /// whose next word matches it. Returns 0 when nothing matches, which
    /// also covers a stopped channel or a ring that is not running.
    pub fn current_slice_index(&self, direction: Direction) -> usize {
        let next = self.regs.next_descriptor(self.config.channel);
        match direction {
            Direction::Receive => self.rx_ring.index_for(next),
            Direction::Transmit => self.tx_ring.index_for(next),
        }
    }

    // =========================================================================
    // Slice Access
    // =========================================================================

    /// Byte range of slice `index` within the buffer
    ///
    /// # Errors
    /// - `InvalidState` - driver is not initialized
    /// - `InvalidSlice` - `index` is outside the ring
    pub fn slice_range(&self, direction: Direction, index: usize) -> IoResult<Range<usize>> {
        let layout = self.layout(direction).ok_or(IoError::InvalidState)?;
        layout.slice_range(index).ok_or(IoError::InvalidSlice)
    }

    /// Bus address of slice `index`
    ///
    /// # Errors
    /// Same as [`slice_range`](Self::slice_range).
    pub fn slice_address(&self, direction: Direction, index: usize) -> IoResult<u32> {
        let layout = self.layout(direction).ok_or(IoError::InvalidState)?;
        layout.slice_address(index).ok_or(IoError::InvalidSlice)
    }

    /// View slice `index` of the buffer
    ///
    /// # Safety
    /// The controller must not be writing this slice for as long as the
    /// returned reference lives. Use
    /// [`current_slice_index`](Self::current_slice_index) to stay clear of
    /// the slice in flight.
    ///
    /// # Errors
    /// Same as [`slice_range`](Self::slice_range).
    pub unsafe fn slice(&self, direction: Direction, index: usize) -> IoResult<&[u8]> {
        let range = self.slice_range(direction, index)?;
        // SAFETY: the range lies within the buffer handed to `init`
        Ok(unsafe { core::slice::from_raw_parts(self.buffer.add(range.start), range.len()) })
    }

    /// Mutable view of slice `index` of the buffer
    ///
    /// # Safety
    /// The controller must not be reading or writing this slice for as long
    /// as the returned reference lives.
    ///
    /// # Errors
    /// Same as [`slice_range`](Self::slice_range).
    pub unsafe fn slice_mut(&mut self, direction: Direction, index: usize) -> IoResult<&mut [u8]> {
        let range = self.slice_range(direction, index)?;
        // SAFETY: the range lies within the buffer handed to `init`
        Ok(unsafe { core::slice::from_raw_parts_mut(self.buffer.add(range.start), range.len()) })
    }
}

// Safety: the buffer pointer is only dereferenced through `unsafe` slice
// accessors whose callers uphold exclusivity.
unsafe impl<R: GpdmaBus + Send, const RX: usize, const TX: usize> Send for SgpioDma<R, RX, TX> {}

// =============================================================================
// Type Aliases
// =============================================================================

/// Hardware driver with 4 receive and 4 transmit slices
pub type SgpioDmaDefault = SgpioDma<Gpdma, 4, 4>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::boxed::Box;

    use super::*;
    use crate::dma::{AhbMaster, FlowControl, TransferControl};
    use crate::driver::error::Error;
    use crate::internal::register::gpdma::CCONFIG_E;
    use crate::testing::{GpdmaOp, MockGpdma, leak_buffer};

    type TestDma = SgpioDma<MockGpdma, 4, 4>;

    fn initialized(bytes: usize, config: SgpioDmaConfig) -> Box<TestDma> {
        let mut dma = Box::new(TestDma::new(MockGpdma::new()));
        dma.init(leak_buffer(bytes), config).unwrap();
        dma.registers_mut().clear_ops();
        dma
    }

    fn arm_sequence(channel: u8, direction: Direction) -> [GpdmaOp; 6] {
        [
            GpdmaOp::DisableChannel(channel),
            GpdmaOp::ClearTerminalCount(channel),
            GpdmaOp::ClearError(channel),
            GpdmaOp::LoadDescriptor(channel),
            GpdmaOp::SetChannelConfig(channel, ChannelConfig::streaming(direction, 0).to_raw()),
            GpdmaOp::EnableChannel(channel),
        ]
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    #[test]
    fn init_builds_rings_and_routes_request() {
        let mut dma = Box::new(TestDma::new(MockGpdma::new()));
        let buffer = leak_buffer(16384);
        let base = buffer.as_ptr() as u32;

        dma.init(buffer, SgpioDmaConfig::new()).unwrap();

        assert_eq!(dma.state(), State::Idle);
        assert!(dma.registers().controller_enabled());
        assert_eq!(dma.registers().dmamux() & 0x3, 2);
        assert!(!dma.registers().is_channel_enabled(0));

        for (i, desc) in dma.rx_ring().iter().enumerate() {
            assert_eq!(desc.source_address(), 0x4010_1100);
            assert_eq!(desc.destination_address(), base.wrapping_add(i as u32 * 4096));
            assert_eq!(desc.control().transfer_size, 1024);
        }
        for (i, desc) in dma.tx_ring().iter().enumerate() {
            assert_eq!(desc.source_address(), base.wrapping_add(i as u32 * 4096));
            assert_eq!(desc.destination_address(), 0x4010_1100);
        }
    }

    #[test]
    fn init_twice_is_rejected() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        let result = dma.init(leak_buffer(64), SgpioDmaConfig::new());
        assert_eq!(result, Err(Error::Config(ConfigError::AlreadyInitialized)));
        assert_eq!(dma.state(), State::Idle);
    }

    #[test]
    fn init_rejects_invalid_config() {
        let mut dma = Box::new(TestDma::new(MockGpdma::new()));
        let result = dma.init(leak_buffer(64), SgpioDmaConfig::new().with_channel(8));
        assert_eq!(result, Err(Error::Config(ConfigError::InvalidChannel)));
        assert_eq!(dma.state(), State::Uninitialized);
        assert!(dma.registers().ops().is_empty());
    }

    #[test]
    fn rings_sized_independently_over_one_buffer() {
        let mut dma = Box::new(SgpioDma::<MockGpdma, 4, 2>::new(MockGpdma::new()));
        let buffer = leak_buffer(256);
        let base = buffer.as_ptr() as u32;
        dma.init(buffer, SgpioDmaConfig::new()).unwrap();

        assert_eq!(dma.slice_range(Direction::Receive, 1), Ok(64..128));
        assert_eq!(dma.slice_range(Direction::Transmit, 1), Ok(128..256));
        assert_eq!(dma.slice_range(Direction::Transmit, 2), Err(IoError::InvalidSlice));

        for (i, desc) in dma.rx_ring().iter().enumerate() {
            assert_eq!(desc.destination_address(), base + (i as u32) * 64);
            assert_eq!(desc.control().transfer_size, 16);
        }
        for (i, desc) in dma.tx_ring().iter().enumerate() {
            assert_eq!(desc.source_address(), base + (i as u32) * 128);
            assert_eq!(desc.control().transfer_size, 32);
        }
        assert_eq!(dma.tx_ring().get(1).next_address(), dma.tx_ring().first().address());
    }

    #[test]
    fn init_rejects_uneven_buffer() {
        let mut dma = Box::new(TestDma::new(MockGpdma::new()));
        let result = dma.init(leak_buffer(102), SgpioDmaConfig::new());
        assert_eq!(result, Err(Error::Config(ConfigError::UnevenSlices)));
        assert_eq!(dma.state(), State::Uninitialized);
        assert!(dma.layout(Direction::Receive).is_none());
    }

    // =========================================================================
    // Arming
    // =========================================================================

    #[test]
    fn start_before_init_is_rejected() {
        let mut dma = TestDma::new(MockGpdma::new());
        assert_eq!(dma.start_receive(), Err(Error::Io(IoError::InvalidState)));
        assert_eq!(dma.start_transmit(), Err(Error::Io(IoError::InvalidState)));
        assert!(dma.registers().ops().is_empty());
    }

    #[test]
    fn start_receive_follows_arm_sequence() {
        let mut dma = initialized(16384, SgpioDmaConfig::new());
        dma.start_receive().unwrap();

        assert_eq!(dma.registers().ops(), &arm_sequence(0, Direction::Receive));
        assert_eq!(dma.state(), State::Receiving);
        assert_eq!(dma.active_direction(), Some(Direction::Receive));

        let first = dma.rx_ring().first();
        let regs = dma.registers().channel(0);
        assert_eq!(regs.source, first.source_address());
        assert_eq!(regs.destination, first.destination_address());
        assert_eq!(regs.lli, first.raw_next());
        assert_eq!(regs.control, first.raw_control());

        let config = ChannelConfig::from_raw(regs.config);
        assert!(config.enable);
        assert!(config.error_interrupt);
        assert!(config.terminal_count_interrupt);
        assert_eq!(config.flow_control, FlowControl::PeripheralToMemory);
    }

    #[test]
    fn start_transmit_follows_arm_sequence() {
        let mut dma = initialized(16384, SgpioDmaConfig::new());
        dma.start_transmit().unwrap();

        assert_eq!(dma.registers().ops(), &arm_sequence(0, Direction::Transmit));
        let regs = dma.registers().channel(0);
        assert_eq!(regs.lli, dma.tx_ring().first().raw_next());
        assert_eq!(
            ChannelConfig::from_raw(regs.config).flow_control,
            FlowControl::MemoryToPeripheral
        );
    }

    #[test]
    fn arming_clears_stale_flags() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.registers_mut().raise_terminal_count(0);
        dma.registers_mut().raise_error(0);

        dma.start_receive().unwrap();
        assert!(!dma.interrupt_status().any());
    }

    #[test]
    fn transmit_stop_receive() {
        let mut dma = initialized(16384, SgpioDmaConfig::new());
        let base = dma.slice_address(Direction::Receive, 0).unwrap();

        dma.start_transmit().unwrap();
        assert_eq!(dma.registers().channel(0).source, base);

        dma.stop();
        assert!(!dma.registers().is_channel_enabled(0));
        assert_eq!(dma.state(), State::Idle);

        dma.start_receive().unwrap();
        let regs = dma.registers().channel(0);
        assert_eq!(regs.destination, base);
        assert_eq!(regs.source, 0x4010_1100);
        assert_eq!(regs.config & CCONFIG_E, CCONFIG_E);
        assert_eq!(
            ChannelConfig::from_raw(regs.config).flow_control,
            FlowControl::PeripheralToMemory
        );
    }

    #[test]
    fn restart_switches_direction_without_stop() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.start_receive().unwrap();
        dma.registers_mut().clear_ops();

        dma.start_transmit().unwrap();
        assert_eq!(dma.registers().ops()[0], GpdmaOp::DisableChannel(0));
        assert_eq!(dma.state(), State::Transmitting);
    }

    #[test]
    fn stop_before_init_touches_no_channel() {
        let mut dma = TestDma::new(MockGpdma::new());
        dma.stop();
        assert_eq!(dma.state(), State::Uninitialized);
        assert!(dma.registers().ops().is_empty());
    }

    #[test]
    fn stop_while_idle_disables_configured_channel() {
        let mut dma = initialized(64, SgpioDmaConfig::new().with_channel(3));
        dma.stop();
        assert_eq!(dma.state(), State::Idle);
        assert_eq!(dma.registers().ops(), &[GpdmaOp::DisableChannel(3)]);
    }

    #[test]
    fn configured_channel_is_used() {
        let config = SgpioDmaConfig::new().with_channel(5).with_request(0, 2);
        let mut dma = initialized(64, config);
        dma.start_receive().unwrap();

        assert!(dma.registers().is_channel_enabled(5));
        assert!(!dma.registers().is_channel_enabled(0));
        assert_eq!(dma.registers().ops(), &arm_sequence(5, Direction::Receive));
    }

    #[test]
    fn ring_masters_follow_config() {
        let dma = initialized(64, SgpioDmaConfig::new());
        let control: TransferControl = dma.rx_ring().first().control();
        assert_eq!(control.destination_master, AhbMaster::Master1);
        assert_eq!(control.source_master, AhbMaster::Master0);
        assert_eq!(dma.tx_ring().first().fetch_master(), AhbMaster::Master1);
    }

    // =========================================================================
    // Interrupts
    // =========================================================================

    #[test]
    fn acknowledge_completion_leaves_error_pending() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.registers_mut().raise_terminal_count(0);
        dma.registers_mut().raise_error(0);

        dma.acknowledge_completion();
        let status = dma.interrupt_status();
        assert!(!status.terminal_count);
        assert!(status.error);
    }

    #[test]
    fn take_error_reports_and_clears() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        assert_eq!(dma.take_error(), Ok(()));

        dma.registers_mut().raise_error(0);
        assert_eq!(dma.take_error(), Err(DmaError::TransferError));
        assert_eq!(dma.take_error(), Ok(()));
    }

    #[test]
    fn handle_interrupt_clears_reported_flags() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.registers_mut().raise_terminal_count(0);

        let status = dma.handle_interrupt();
        assert!(status.terminal_count);
        assert!(!status.error);
        assert!(!dma.interrupt_status().any());
    }

    #[test]
    fn other_channel_flags_are_ignored() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.registers_mut().raise_terminal_count(3);
        assert!(!dma.interrupt_status().any());
    }

    // =========================================================================
    // Progress
    // =========================================================================

    #[test]
    fn current_slice_index_matches_live_register() {
        let mut dma = initialized(16384, SgpioDmaConfig::new());
        dma.start_receive().unwrap();

        for i in 0..4 {
            let next = dma.rx_ring().get(i).raw_next();
            dma.registers_mut().set_next_descriptor(0, next);

            let reads = dma.registers().lli_reads();
            assert_eq!(dma.current_slice_index(Direction::Receive), i);
            assert_eq!(dma.registers().lli_reads(), reads + 1);
        }
    }

    #[test]
    fn current_slice_index_uses_requested_ring() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.start_transmit().unwrap();

        let next = dma.tx_ring().get(3).raw_next();
        dma.registers_mut().set_next_descriptor(0, next);
        assert_eq!(dma.current_slice_index(Direction::Transmit), 3);
        // Receive ring holds different descriptor addresses
        assert_eq!(dma.current_slice_index(Direction::Receive), 0);
    }

    #[test]
    fn current_slice_index_falls_back_to_zero() {
        let mut dma = initialized(64, SgpioDmaConfig::new());
        dma.registers_mut().set_next_descriptor(0, 0x1234_5670);
        assert_eq!(dma.current_slice_index(Direction::Receive), 0);

        let uninit = TestDma::new(MockGpdma::new());
        assert_eq!(uninit.current_slice_index(Direction::Receive), 0);
    }

    // =========================================================================
    // Slice Access
    // =========================================================================

    #[test]
    fn slice_ranges_partition_buffer() {
        let dma = initialized(16384, SgpioDmaConfig::new());
        assert_eq!(dma.slice_range(Direction::Receive, 0), Ok(0..4096));
        assert_eq!(dma.slice_range(Direction::Receive, 3), Ok(12288..16384));
        assert_eq!(dma.slice_range(Direction::Transmit, 4), Err(IoError::InvalidSlice));
    }

    #[test]
    fn slice_access_before_init_is_rejected() {
        let dma = TestDma::new(MockGpdma::new());
        assert_eq!(dma.slice_range(Direction::Receive, 0), Err(IoError::InvalidState));
        assert_eq!(dma.slice_address(Direction::Receive, 0), Err(IoError::InvalidState));
    }

    #[test]
    fn slice_views_alias_buffer() {
        let mut dma = initialized(64, SgpioDmaConfig::new());

        unsafe { dma.slice_mut(Direction::Transmit, 2) }
            .unwrap()
            .fill(0xA5);

        let rx = unsafe { dma.slice(Direction::Receive, 2) }.unwrap();
        assert_eq!(rx.len(), 16);
        assert!(rx.iter().all(|b| *b == 0xA5));
        let before = unsafe { dma.slice(Direction::Receive, 1) }.unwrap();
        assert!(before.iter().all(|b| *b == 0));
    }
}
