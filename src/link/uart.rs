//! UART Radio Module Driver
//!
//! Drives an HC-12 class transparent radio module: bytes written to the
//! UART are broadcast on the configured channel. The SET pin selects AT
//! command mode when held low.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Error as _, Write};
use heapless::String;

use super::{LinkError, LinkResult, RadioTransport};
use crate::config::{RADIO_CMD_APPLY_MS, RADIO_CMD_ENTER_MS};
use crate::types::RadioChannel;

/// Message terminator expected by the base station bridge
const TERMINATOR: &[u8] = b"\n";

/// UART radio module
pub struct UartRadio<W, P, D> {
    uart: W,
    set_pin: P,
    delay: D,
    channel: Option<RadioChannel>,
}

impl<W, P, D> UartRadio<W, P, D>
where
    W: Write,
    P: OutputPin,
    D: DelayNs,
{
    /// Create a radio driver (module left in transparent mode)
    #[must_use]
    pub fn new(uart: W, set_pin: P, delay: D) -> Self {
        Self {
            uart,
            set_pin,
            delay,
            channel: None,
        }
    }

    /// Configured channel, if `begin` succeeded
    #[must_use]
    pub const fn channel(&self) -> Option<RadioChannel> {
        self.channel
    }

    /// One-time setup: tune the module to `channel`
    pub async fn begin(&mut self, channel: RadioChannel) -> LinkResult<()> {
        self.set_pin.set_low().map_err(|_| LinkError::Pin)?;
        self.delay.delay_ms(RADIO_CMD_ENTER_MS).await;

        let mut cmd: String<12> = String::new();
        // "AT+C" + 3 digits + CRLF always fits
        let _ = core::fmt::write(&mut cmd, format_args!("AT+C{:03}\r\n", channel.get()));
        let written = self.write_all(cmd.as_bytes()).await;

        self.delay.delay_ms(RADIO_CMD_APPLY_MS).await;
        self.set_pin.set_high().map_err(|_| LinkError::Pin)?;
        self.delay.delay_ms(RADIO_CMD_APPLY_MS).await;

        written?;
        self.channel = Some(channel);
        log_info!("radio on channel {}", channel.get());
        Ok(())
    }

    /// Release the UART, pin and delay
    pub fn release(self) -> (W, P, D) {
        (self.uart, self.set_pin, self.delay)
    }

    async fn write_all(&mut self, bytes: &[u8]) -> LinkResult<()> {
        self.uart
            .write_all(bytes)
            .await
            .map_err(|e| LinkError::Uart(e.kind()))?;
        self.uart
            .flush()
            .await
            .map_err(|e| LinkError::Uart(e.kind()))
    }
}

impl<W, P, D> RadioTransport for UartRadio<W, P, D>
where
    W: Write,
    P: OutputPin,
    D: DelayNs,
{
    async fn send_str(&mut self, message: &str) -> LinkResult<()> {
        self.uart
            .write_all(message.as_bytes())
            .await
            .map_err(|e| LinkError::Uart(e.kind()))?;
        self.write_all(TERMINATOR).await
    }
}
