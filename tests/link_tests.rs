//! Radio Link Tests
//!
//! UART radio module setup sequence and message framing.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test link_tests

mod common;

use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_io::ErrorKind;

use common::{MockClock, MockDelay, MockPin, MockUart};
use pointer_remote::link::uart::UartRadio;
use pointer_remote::link::{LinkError, RadioTransport};
use pointer_remote::protocol::Message;
use pointer_remote::tx::serializer::{TxConfig, TxSerializer, TxStats};
use pointer_remote::types::{HexColor, RadioChannel, Thickness};

type TestRadio = UartRadio<MockUart, MockPin, MockDelay>;

fn new_radio(uart: MockUart) -> TestRadio {
    UartRadio::new(uart, MockPin::default(), MockDelay::default())
}

fn channel(n: u8) -> RadioChannel {
    RadioChannel::new(n).unwrap()
}

// ============================================================================
// Setup Tests
// ============================================================================

#[test]
fn begin_sends_channel_command_in_at_mode() {
    let mut radio = new_radio(MockUart::default());

    block_on(radio.begin(channel(12))).unwrap();

    assert_eq!(radio.channel(), Some(channel(12)));
    let (uart, pin, delay) = radio.release();
    assert_eq!(uart.text(), "AT+C012\r\n");
    assert_eq!(uart.flushes, 1);
    // SET low for the command, back high for transparent mode
    assert_eq!(pin.levels, vec![false, true]);
    // 40 ms enter + 80 ms apply + 80 ms resume
    assert_eq!(delay.total_ns, 200_000_000);
}

#[test]
fn channel_is_zero_padded() {
    let mut radio = new_radio(MockUart::default());
    block_on(radio.begin(channel(1))).unwrap();
    assert_eq!(radio.release().0.text(), "AT+C001\r\n");

    let mut radio = new_radio(MockUart::default());
    block_on(radio.begin(channel(127))).unwrap();
    assert_eq!(radio.release().0.text(), "AT+C127\r\n");
}

#[test]
fn failed_begin_restores_transparent_mode() {
    let mut radio = new_radio(MockUart::failing());

    let result = block_on(radio.begin(channel(12)));

    assert_eq!(result, Err(LinkError::Uart(ErrorKind::BrokenPipe)));
    assert_eq!(radio.channel(), None);
    let (_, pin, _) = radio.release();
    assert_eq!(pin.levels, vec![false, true]);
}

// ============================================================================
// Transport Tests
// ============================================================================

#[test]
fn messages_are_newline_terminated() {
    let mut radio = new_radio(MockUart::default());

    block_on(async {
        radio.send_str("t 3").await.unwrap();
        radio.send_str("reset").await.unwrap();
    });

    let (uart, pin, _) = radio.release();
    assert_eq!(uart.text(), "t 3\nreset\n");
    assert_eq!(uart.flushes, 2);
    assert!(pin.levels.is_empty());
}

#[test]
fn uart_failure_is_reported() {
    let mut radio = new_radio(MockUart::failing());
    let result = block_on(radio.send_str("reset"));
    assert_eq!(result, Err(LinkError::Uart(ErrorKind::BrokenPipe)));
}

#[test]
fn link_error_display() {
    assert_eq!(LinkError::Pin.to_string(), "control pin");
    assert_eq!(
        LinkError::Uart(ErrorKind::BrokenPipe).to_string(),
        "UART BrokenPipe"
    );
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn serializer_drives_uart_radio() {
    let clock = MockClock::new();
    let mut uart_radio = new_radio(MockUart::default());
    block_on(uart_radio.begin(channel(12))).unwrap();

    let tx: TxSerializer<NoopRawMutex, &MockClock, TestRadio> =
        TxSerializer::new(&clock, uart_radio, TxConfig::DEFAULT);

    block_on(join(
        tx.send(&Message::Thickness(Thickness::new(3).unwrap())),
        tx.send(&Message::Color(HexColor::BLUE)),
    ));

    assert_eq!(block_on(tx.stats()), TxStats { sent: 2, failed: 0 });
    assert_eq!(block_on(tx.ready_at_ms()), 200);
}
