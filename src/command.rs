//! Commands produced by the control panels.
//!
//! Each clickable zone on the button and slider panels resolves to exactly one
//! [`Command`]. The panels never touch state themselves: they hand the command
//! to a [`CommandHandler`], which decides what the press means.
//!
//! | Panel | Commands |
//! |-------|----------|
//! | Buttons | `off`, `recirc`, `ac`, `auto`, `hazard`, `front_def`, `air_dir`, `rear_def` |
//! | Sliders | `pass_temp_down/up`, `fan_down/up`, `drv_temp_down/up` |
//!
//! The snake_case names are the stable identifiers used in diagnostics.

use crate::bus::BusMessage;

/// A single press on one of the control zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Off,
    Recirc,
    Ac,
    Auto,
    Hazard,
    FrontDef,
    AirDir,
    RearDef,
    FanUp,
    FanDown,
    PassTempUp,
    PassTempDown,
    DrvTempUp,
    DrvTempDown,
}

impl Command {
    /// Every command, buttons first then sliders left to right.
    pub const ALL: [Self; 14] = [
        Self::Off,
        Self::Recirc,
        Self::Ac,
        Self::Auto,
        Self::Hazard,
        Self::FrontDef,
        Self::AirDir,
        Self::RearDef,
        Self::PassTempDown,
        Self::PassTempUp,
        Self::FanDown,
        Self::FanUp,
        Self::DrvTempDown,
        Self::DrvTempUp,
    ];

    /// Stable snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Recirc => "recirc",
            Self::Ac => "ac",
            Self::Auto => "auto",
            Self::Hazard => "hazard",
            Self::FrontDef => "front_def",
            Self::AirDir => "air_dir",
            Self::RearDef => "rear_def",
            Self::FanUp => "fan_up",
            Self::FanDown => "fan_down",
            Self::PassTempUp => "pass_temp_up",
            Self::PassTempDown => "pass_temp_down",
            Self::DrvTempUp => "drv_temp_up",
            Self::DrvTempDown => "drv_temp_down",
        }
    }

    /// Look a command up by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|c| c.name() == name) }
}

impl core::fmt::Display for Command {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// What handling a command did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing happened: the value was already at its bound, or no handler
    /// is bound.
    Unchanged,
    /// A stateless bus event was sent; the display is unaffected.
    Sent(BusMessage),
    /// State changed, the message was sent and the display must be redrawn.
    Updated(BusMessage),
}

impl Outcome {
    /// Bus message sent while handling the command, if any.
    pub const fn message(&self) -> Option<&BusMessage> {
        match self {
            Self::Unchanged => None,
            Self::Sent(msg) | Self::Updated(msg) => Some(msg),
        }
    }

    /// Whether the display must be redrawn.
    #[inline]
    pub const fn needs_redraw(&self) -> bool { matches!(self, Self::Updated(_)) }
}

// =============================================================================
// Handler
// =============================================================================

/// Receiver of panel commands.
pub trait CommandHandler {
    /// Handle one press. Called exactly once per dispatched command.
    fn handle(
        &mut self,
        command: Command,
    ) -> Outcome;
}

/// The unbound handler: every command is a no-op.
impl CommandHandler for () {
    fn handle(
        &mut self,
        _command: Command,
    ) -> Outcome {
        Outcome::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd), "{cmd} did not resolve");
        }
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in Command::ALL.iter().enumerate() {
            for b in &Command::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Command::from_name("defog"), None);
        assert_eq!(Command::from_name(""), None);
    }

    #[test]
    fn test_unbound_handler_is_noop() {
        let mut handler = ();
        for cmd in Command::ALL {
            assert_eq!(handler.handle(cmd), Outcome::Unchanged);
        }
    }

    #[test]
    fn test_outcome_redraw() {
        let msg = BusMessage::Fan(3);
        assert!(Outcome::Updated(msg).needs_redraw());
        assert!(!Outcome::Sent(msg).needs_redraw());
        assert!(!Outcome::Unchanged.needs_redraw());
        assert_eq!(Outcome::Sent(msg).message(), Some(&msg));
        assert_eq!(Outcome::Unchanged.message(), None);
    }
}
