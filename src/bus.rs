//! Simulated vehicle-bus transmissions.
//!
//! Every press that the real head unit would put on the CAN bus becomes one
//! human-readable line here. Nothing is sent anywhere: the lines are echoed to
//! stdout and kept in a small ring buffer so the application (and tests) can
//! see what went out.
//!
//! Two line shapes exist:
//!
//! ```text
//! [CAN TX] A/C: On          field update
//! [CAN TX] OFF pressed      button press without state
//! [CAN] Hazard              bus event
//! ```

use core::fmt::{self, Write as _};
use std::io::Write as _;

use heapless::{Deque, String};

use crate::state::SetTemp;

// =============================================================================
// Bus Log Configuration
// =============================================================================

/// Maximum number of transmitted lines kept in the ring buffer.
pub const BUS_LOG_SIZE: usize = 16;

/// Maximum characters per stored line.
pub const BUS_LINE_LENGTH: usize = 48;

// =============================================================================
// Messages
// =============================================================================

/// One simulated bus transmission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BusMessage {
    /// Button press with no state behind it (`[CAN TX] OFF pressed`).
    Pressed(&'static str),
    /// On/off field update (`[CAN TX] A/C: On`).
    Switch {
        field: &'static str,
        on: bool,
    },
    /// Fan level update.
    Fan(u8),
    /// Set temperature update.
    Temp(SetTemp),
    /// Bus event without a TX field (`[CAN] Hazard`).
    Event(&'static str),
}

impl fmt::Display for BusMessage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Pressed(what) => write!(f, "[CAN TX] {what} pressed"),
            Self::Switch { field, on } => write!(f, "[CAN TX] {field}: {}", if *on { "On" } else { "Off" }),
            Self::Fan(speed) => write!(f, "[CAN TX] Fan: {speed}"),
            Self::Temp(temp) => write!(f, "[CAN TX] Temp: {:.1}°C", temp.celsius()),
            Self::Event(what) => write!(f, "[CAN] {what}"),
        }
    }
}

// =============================================================================
// Bus Log Ring Buffer
// =============================================================================

/// Ring buffer of the most recent transmissions.
///
/// Stores the last `BUS_LOG_SIZE` lines; older lines are dropped. The total
/// number of transmissions is counted separately and never wraps back.
pub struct BusLog {
    lines: Deque<String<BUS_LINE_LENGTH>, BUS_LOG_SIZE>,
    sent: u32,
    echo: bool,
}

impl BusLog {
    /// Silent log: lines are only kept in memory.
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            sent: 0,
            echo: false,
        }
    }

    /// Log that also writes every line to stdout.
    pub const fn echoing() -> Self {
        Self {
            lines: Deque::new(),
            sent: 0,
            echo: true,
        }
    }

    /// Transmit one message.
    pub fn transmit(
        &mut self,
        msg: &BusMessage,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }

        // A line longer than the buffer is stored truncated
        let mut line: String<BUS_LINE_LENGTH> = String::new();
        write!(line, "{msg}").ok();

        if self.echo {
            writeln!(std::io::stdout().lock(), "{msg}").ok();
        }

        self.lines.push_back(line).ok();
        self.sent = self.sent.saturating_add(1);
    }

    /// Iterate over stored lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|l| l.as_str()) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.lines.back().map(|l| l.as_str()) }

    /// Total transmissions since startup.
    #[inline]
    pub const fn sent(&self) -> u32 { self.sent }

    /// Number of stored lines.
    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl Default for BusLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formats() {
        assert_eq!(BusMessage::Pressed("OFF").to_string(), "[CAN TX] OFF pressed");
        assert_eq!(
            BusMessage::Switch { field: "A/C", on: true }.to_string(),
            "[CAN TX] A/C: On"
        );
        assert_eq!(
            BusMessage::Switch {
                field: "Rear Defrost",
                on: false
            }
            .to_string(),
            "[CAN TX] Rear Defrost: Off"
        );
        assert_eq!(BusMessage::Fan(6).to_string(), "[CAN TX] Fan: 6");
        assert_eq!(BusMessage::Event("Hazard").to_string(), "[CAN] Hazard");
    }

    #[test]
    fn test_temp_format_one_decimal() {
        assert_eq!(
            BusMessage::Temp(SetTemp::from_celsius(24.0)).to_string(),
            "[CAN TX] Temp: 24.0°C"
        );
        assert_eq!(
            BusMessage::Temp(SetTemp::from_celsius(16.5)).to_string(),
            "[CAN TX] Temp: 16.5°C"
        );
    }

    #[test]
    fn test_bus_log_transmit() {
        let mut log = BusLog::new();
        assert!(log.is_empty());

        log.transmit(&BusMessage::Fan(4));
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some("[CAN TX] Fan: 4"));
        assert_eq!(log.sent(), 1);
    }

    #[test]
    fn test_bus_log_ring_buffer() {
        let mut log = BusLog::new();
        for speed in 0..=BUS_LOG_SIZE as u8 {
            log.transmit(&BusMessage::Fan(speed));
        }
        assert_eq!(log.len(), BUS_LOG_SIZE);
        assert_eq!(log.sent(), BUS_LOG_SIZE as u32 + 1);

        // Oldest ("Fan: 0") was dropped
        assert_eq!(log.iter().next(), Some("[CAN TX] Fan: 1"));
    }
}
