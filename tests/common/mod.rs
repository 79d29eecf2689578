//! Host test doubles for the remote's hardware collaborators
//!
//! Virtual clock, recording radio, scripted analog and button inputs, and
//! in-memory UART/pin/delay implementations of the embedded-hal traits.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;

use embassy_futures::yield_now;
use embedded_io::ErrorKind;

use pointer_remote::controller::sampler::AnalogInput;
use pointer_remote::link::{LinkError, LinkResult, RadioTransport};
use pointer_remote::tx::clock::Clock;
use pointer_remote::types::Axis;

// ============================================================================
// Clock
// ============================================================================

/// Virtual millisecond clock; sleeping jumps time forward and yields once
#[derive(Default)]
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    pub fn advance_to(&self, ms: u64) {
        if ms > self.now.get() {
            self.now.set(ms);
        }
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    async fn sleep_until_ms(&self, deadline_ms: u64) {
        self.advance_to(deadline_ms);
        yield_now().await;
    }
}

// ============================================================================
// Radio transports
// ============================================================================

/// One message seen by a recording transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transmission {
    pub at_ms: u64,
    pub text: String,
}

/// Shared record of everything a `RecordingRadio` transmitted
#[derive(Default)]
pub struct Journal {
    sent: RefCell<Vec<Transmission>>,
    in_flight: Cell<bool>,
    overlaps: Cell<u32>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Transmission> {
        self.sent.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|t| t.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Number of times a send started while another was in progress
    pub fn overlaps(&self) -> u32 {
        self.overlaps.get()
    }
}

/// Transport that records messages with their transmit time
pub struct RecordingRadio<'a> {
    clock: &'a MockClock,
    journal: &'a Journal,
    /// Yield mid-send to give other producers a chance to interleave
    yield_during_send: bool,
}

impl<'a> RecordingRadio<'a> {
    pub fn new(clock: &'a MockClock, journal: &'a Journal) -> Self {
        Self {
            clock,
            journal,
            yield_during_send: false,
        }
    }

    pub fn slow(clock: &'a MockClock, journal: &'a Journal) -> Self {
        Self {
            clock,
            journal,
            yield_during_send: true,
        }
    }
}

impl RadioTransport for RecordingRadio<'_> {
    async fn send_str(&mut self, message: &str) -> LinkResult<()> {
        if self.journal.in_flight.replace(true) {
            self.journal.overlaps.set(self.journal.overlaps.get() + 1);
        }
        let at_ms = self.clock.now_ms();
        if self.yield_during_send {
            yield_now().await;
            yield_now().await;
        }
        self.journal.sent.borrow_mut().push(Transmission {
            at_ms,
            text: message.to_string(),
        });
        self.journal.in_flight.set(false);
        Ok(())
    }
}

/// Transport that rejects every message
pub struct FailingRadio;

impl RadioTransport for FailingRadio {
    async fn send_str(&mut self, _message: &str) -> LinkResult<()> {
        Err(LinkError::Uart(ErrorKind::Other))
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Joystick returning fixed raw readings
pub struct FixedInput {
    pub x: u16,
    pub y: u16,
}

impl AnalogInput for FixedInput {
    fn read(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Joystick replaying a list of (x, y) readings, holding the last one
pub struct ScriptedInput {
    samples: VecDeque<(u16, u16)>,
    current: (u16, u16),
}

impl ScriptedInput {
    pub fn new(samples: &[(u16, u16)]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            current: (512, 512),
        }
    }
}

impl AnalogInput for ScriptedInput {
    fn read(&mut self, axis: Axis) -> u16 {
        if axis == Axis::X {
            if let Some(next) = self.samples.pop_front() {
                self.current = next;
            }
        }
        match axis {
            Axis::X => self.current.0,
            Axis::Y => self.current.1,
        }
    }
}

/// Button producing rising edges at scripted times, then never again
pub struct ScriptedButton<'a> {
    clock: &'a MockClock,
    edges_ms: VecDeque<u64>,
}

impl<'a> ScriptedButton<'a> {
    pub fn new(clock: &'a MockClock, edges_ms: &[u64]) -> Self {
        Self {
            clock,
            edges_ms: edges_ms.iter().copied().collect(),
        }
    }

    async fn next_edge(&mut self) -> Result<(), Infallible> {
        match self.edges_ms.pop_front() {
            Some(at) => {
                self.clock.advance_to(at);
                Ok(())
            }
            None => core::future::pending().await,
        }
    }
}

impl embedded_hal::digital::ErrorType for ScriptedButton<'_> {
    type Error = Infallible;
}

impl embedded_hal_async::digital::Wait for ScriptedButton<'_> {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.next_edge().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge().await
    }
}

/// Edge wait failure reported by `FlakyButton`
#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Button whose edge wait fails a set number of times, then reports one edge
pub struct FlakyButton {
    failures: u32,
    edge_pending: bool,
}

impl FlakyButton {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            edge_pending: true,
        }
    }

    async fn next_edge(&mut self) -> Result<(), PinFault> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(PinFault);
        }
        if self.edge_pending {
            self.edge_pending = false;
            return Ok(());
        }
        core::future::pending().await
    }
}

impl embedded_hal::digital::ErrorType for FlakyButton {
    type Error = PinFault;
}

impl embedded_hal_async::digital::Wait for FlakyButton {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.next_edge().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        core::future::pending().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.next_edge().await
    }
}

// ============================================================================
// UART radio module peripherals
// ============================================================================

/// In-memory UART
#[derive(Default)]
pub struct MockUart {
    pub written: Vec<u8>,
    pub flushes: usize,
    pub fail: bool,
}

impl MockUart {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

/// UART write failure reported by `MockUart::failing`
#[derive(Debug)]
pub struct UartFault;

impl embedded_io::Error for UartFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::BrokenPipe
    }
}

impl embedded_io_async::ErrorType for MockUart {
    type Error = UartFault;
}

impl embedded_io_async::Write for MockUart {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail {
            return Err(UartFault);
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(UartFault);
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Output pin recording every level it was driven to (true = high)
#[derive(Default)]
pub struct MockPin {
    pub levels: Vec<bool>,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

/// Delay accumulating requested time without waiting
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
