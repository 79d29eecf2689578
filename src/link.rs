//! Radio Link
//!
//! The radio is a best-effort, fire-and-forget byte pipe: no delivery
//! confirmation reaches the caller. [`RadioTransport`] is the seam the
//! serializer writes to; [`uart::UartRadio`] drives a transparent
//! UART radio module.

pub mod uart;

use core::fmt;

use embedded_io::ErrorKind;

/// Radio link error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// UART write or flush failed
    Uart(ErrorKind),
    /// Module control pin could not be driven
    Pin,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uart(kind) => write!(f, "UART {kind:?}"),
            Self::Pin => f.write_str("control pin"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Uart(kind) => defmt::write!(f, "UART({})", kind),
            Self::Pin => defmt::write!(f, "Pin"),
        }
    }
}

/// Radio link result
pub type LinkResult<T> = Result<T, LinkError>;

/// Outbound radio transport
pub trait RadioTransport {
    /// Transmit one message (framing is the transport's concern)
    async fn send_str(&mut self, message: &str) -> LinkResult<()>;
}
