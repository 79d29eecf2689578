//! Communication Protocols
//!
//! Text telemetry sent from the remote to the base station, one message per
//! radio packet:
//!
//! | Message        | Meaning                            |
//! |----------------|------------------------------------|
//! | `s <x> <y>`    | pointer speed, percent (-100..100) |
//! | `t <n>`        | line thickness (1..10)             |
//! | `c #rrggbb`    | line color                         |
//! | `reset`        | clear the canvas                   |
//!
//! The base station's radio bridge forwards each packet on a serial line as
//! `<sender address, 12 hex digits> <message>\n`; [`BridgeFrame`] and
//! [`LineParser`] decode that side.

use core::fmt;

use heapless::{String, Vec};

use crate::config::{MAX_BRIDGE_LINE_LEN, MAX_MESSAGE_LEN};
use crate::types::{AxisValue, HexColor, Thickness};

/// Encoded message text
pub type MessageText = String<MAX_MESSAGE_LEN>;

/// Encoded bridge line
pub type BridgeLine = String<MAX_BRIDGE_LINE_LEN>;

/// Telemetry message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// Joystick position
    Position {
        /// Horizontal deflection
        x: AxisValue,
        /// Vertical deflection
        y: AxisValue,
    },
    /// Line thickness changed
    Thickness(Thickness),
    /// Line color changed
    Color(HexColor),
    /// Clear the canvas
    Reset,
}

impl Message {
    /// Single-token opcode
    #[must_use]
    pub const fn opcode(&self) -> &'static str {
        match self {
            Self::Position { .. } => "s",
            Self::Thickness(_) => "t",
            Self::Color(_) => "c",
            Self::Reset => "reset",
        }
    }

    /// Encode to wire text
    #[must_use]
    pub fn encode(&self) -> MessageText {
        let mut text = MessageText::new();
        // Longest message ("s -100 -100") fits MAX_MESSAGE_LEN
        let _ = core::fmt::write(&mut text, format_args!("{self}"));
        text
    }

    /// Decode wire text, returns None if malformed or out of range
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut fields = text.split(' ');
        let opcode = fields.next()?;

        let message = match opcode {
            "s" => {
                let x = parse_axis(fields.next()?)?;
                let y = parse_axis(fields.next()?)?;
                Self::Position { x, y }
            }
            "t" => Self::Thickness(Thickness::new(parse_digits(fields.next()?)?)?),
            "c" => Self::Color(HexColor::parse(fields.next()?)?),
            "reset" => Self::Reset,
            _ => return None,
        };

        // Trailing fields are malformed
        if fields.next().is_some() {
            return None;
        }
        Some(message)
    }
}

/// Parse a non-empty run of ASCII digits (no sign)
fn parse_digits(field: &str) -> Option<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parse digits with an optional leading `-`
fn parse_axis(field: &str) -> Option<AxisValue> {
    let digits = field.strip_prefix('-').unwrap_or(field);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    AxisValue::new(field.parse().ok()?)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position { x, y } => write!(f, "s {x} {y}"),
            Self::Thickness(t) => write!(f, "t {t}"),
            Self::Color(c) => write!(f, "c {c}"),
            Self::Reset => f.write_str("reset"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Message {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Position { x, y } => defmt::write!(f, "s {} {}", x.get(), y.get()),
            Self::Thickness(t) => defmt::write!(f, "t {}", t.get()),
            Self::Color(c) => defmt::write!(f, "c {}", c),
            Self::Reset => defmt::write!(f, "reset"),
        }
    }
}

/// Radio sender address (6 bytes, MAC style)
pub type SenderAddress = [u8; 6];

/// One message as forwarded by the base station radio bridge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeFrame {
    /// Address of the remote that sent the message
    pub sender: SenderAddress,
    /// Decoded message
    pub message: Message,
}

impl BridgeFrame {
    /// Number of hex digits in the address prefix
    pub const ADDRESS_DIGITS: usize = 12;

    /// Decode one line (without the trailing newline)
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.len() <= Self::ADDRESS_DIGITS || line.as_bytes()[Self::ADDRESS_DIGITS] != b' ' {
            return None;
        }

        let (address, rest) = line.split_at(Self::ADDRESS_DIGITS);
        if !address.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut sender = [0u8; 6];
        for (i, byte) in sender.iter_mut().enumerate() {
            *byte = u8::from_str_radix(address.get(i * 2..i * 2 + 2)?, 16).ok()?;
        }

        let message = Message::parse(&rest[1..])?;
        Some(Self { sender, message })
    }

    /// Format a raw radio payload as a bridge line, newline included
    ///
    /// Returns None if the payload contains a newline or does not fit.
    #[must_use]
    pub fn encode_line(sender: &SenderAddress, payload: &str) -> Option<BridgeLine> {
        if payload.contains('\n') {
            return None;
        }

        let mut line = BridgeLine::new();
        for byte in sender {
            core::fmt::write(&mut line, format_args!("{byte:02x}")).ok()?;
        }
        line.push(' ').ok()?;
        line.push_str(payload).ok()?;
        line.push('\n').ok()?;
        Some(line)
    }
}

/// Incremental bridge line decoder for a serial byte stream
pub struct LineParser {
    /// Line buffer
    buffer: Vec<u8, MAX_BRIDGE_LINE_LEN>,
    /// Current line overflowed and is being skipped
    discarding: bool,
}

impl LineParser {
    /// Create a new line parser
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Feed a byte to the parser
    /// Returns a frame if a valid line is complete
    pub fn feed(&mut self, byte: u8) -> Option<BridgeFrame> {
        if byte == b'\n' {
            let frame = if self.discarding {
                None
            } else {
                core::str::from_utf8(&self.buffer)
                    .ok()
                    .and_then(BridgeFrame::parse)
            };
            self.clear();
            frame
        } else {
            if !self.discarding && self.buffer.push(byte).is_err() {
                // Overlong line, skip until the next newline
                self.buffer.clear();
                self.discarding = true;
            }
            None
        }
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
