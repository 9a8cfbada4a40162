//! Application controller.
//!
//! [`Application`] is the single owner of the [`HvacState`]. Panels report
//! presses as [`Command`]s; the application applies them, transmits the
//! matching bus line and requests a display redraw when state changed.
//!
//! # Command Policy
//!
//! | Command | State change | Bus line | Redraw |
//! |---------|--------------|----------|--------|
//! | `ac`, `auto`, `front_def`, `rear_def` | toggle | always | always |
//! | `fan_up`, `fan_down` | ±1, 0..=8 | unless saturated | unless saturated |
//! | temp up/down (both zones) | ±0.5°C, 16..=32 | unless saturated | unless saturated |
//! | `off`, `recirc`, `hazard`, `air_dir` | none | always | never |
//!
//! Passenger and driver temperature zones drive the same `set_temp`: the unit
//! this recreates shows a single set temperature.

use tracing::{debug, trace};

use crate::bus::{BusLog, BusMessage};
use crate::command::{Command, CommandHandler, Outcome};
use crate::render::RenderState;
use crate::state::{ClockTime, HvacState};
use crate::timer::WallClock;

/// Owns the HVAC state and everything that reacts to it.
pub struct Application {
    state: HvacState,
    bus: BusLog,
    render: RenderState,
}

impl Application {
    /// Application with default state, transmitting into `bus`.
    pub const fn new(bus: BusLog) -> Self {
        Self {
            state: HvacState::new(),
            bus,
            render: RenderState::new(),
        }
    }

    /// Current state, for rendering.
    #[inline]
    pub const fn state(&self) -> &HvacState { &self.state }

    /// Transmitted bus lines.
    #[inline]
    pub const fn bus(&self) -> &BusLog { &self.bus }

    /// Panel redraw tracking.
    #[inline]
    pub const fn render_state(&self) -> &RenderState { &self.render }

    /// Panel redraw tracking, for the frame loop to mark panels drawn.
    #[inline]
    pub const fn render_state_mut(&mut self) -> &mut RenderState { &mut self.render }

    /// Copy the wall-clock time into the state and redraw unconditionally.
    pub fn tick_clock<C: WallClock>(
        &mut self,
        clock: &C,
    ) -> ClockTime {
        let now = clock.now();
        self.state.set_clock(now);
        self.render.request_display();
        trace!(hours = now.hours, minutes = now.minutes, "clock tick");
        now
    }

    /// Apply a command to the state without transmitting.
    fn apply(
        &mut self,
        command: Command,
    ) -> Outcome {
        let state = &mut self.state;
        match command {
            Command::Off => Outcome::Sent(BusMessage::Pressed("OFF")),
            Command::Recirc => Outcome::Sent(BusMessage::Pressed("Recirc")),
            Command::Hazard => Outcome::Sent(BusMessage::Event("Hazard")),
            Command::AirDir => Outcome::Sent(BusMessage::Event("Air direction")),
            Command::Ac => {
                state.ac_on = !state.ac_on;
                Outcome::Updated(BusMessage::Switch {
                    field: "A/C",
                    on: state.ac_on,
                })
            }
            Command::Auto => {
                state.auto_mode = !state.auto_mode;
                Outcome::Updated(BusMessage::Switch {
                    field: "Auto",
                    on: state.auto_mode,
                })
            }
            Command::FrontDef => {
                state.front_defrost = !state.front_defrost;
                Outcome::Updated(BusMessage::Switch {
                    field: "Front Defrost",
                    on: state.front_defrost,
                })
            }
            Command::RearDef => {
                state.rear_defrost = !state.rear_defrost;
                Outcome::Updated(BusMessage::Switch {
                    field: "Rear Defrost",
                    on: state.rear_defrost,
                })
            }
            Command::FanUp | Command::FanDown => {
                let changed = if command == Command::FanUp { state.fan_up() } else { state.fan_down() };
                if changed { Outcome::Updated(BusMessage::Fan(state.fan_speed)) } else { Outcome::Unchanged }
            }
            Command::PassTempUp | Command::DrvTempUp => {
                if state.temp_up() {
                    Outcome::Updated(BusMessage::Temp(state.set_temp))
                } else {
                    Outcome::Unchanged
                }
            }
            Command::PassTempDown | Command::DrvTempDown => {
                if state.temp_down() {
                    Outcome::Updated(BusMessage::Temp(state.set_temp))
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }
}

impl CommandHandler for Application {
    fn handle(
        &mut self,
        command: Command,
    ) -> Outcome {
        let outcome = self.apply(command);
        debug!(%command, ?outcome, "command");

        if let Some(msg) = outcome.message() {
            self.bus.transmit(msg);
        }
        if outcome.needs_redraw() {
            self.render.request_display();
        }
        outcome
    }
}

impl Default for Application {
    fn default() -> Self { Self::new(BusLog::new()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::{ButtonPanel, SliderPanel};
    use crate::state::{FAN_SPEED_MAX, SetTemp};
    use crate::timer::FixedClock;

    fn app() -> Application { Application::default() }

    // -------------------------------------------------------------------------
    // Toggles
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_ac_twice() {
        let mut app = app();
        assert!(!app.state().ac_on);

        let outcome = app.handle(Command::Ac);
        assert!(app.state().ac_on);
        assert!(outcome.needs_redraw());
        assert_eq!(app.bus().sent(), 1, "exactly one bus line per toggle");
        assert_eq!(app.bus().last(), Some("[CAN TX] A/C: On"));
        assert_eq!(app.render_state().requests(), 1);

        app.handle(Command::Ac);
        assert!(!app.state().ac_on);
        assert_eq!(app.bus().last(), Some("[CAN TX] A/C: Off"));
        assert_eq!(app.render_state().requests(), 2);
    }

    #[test]
    fn test_toggle_flags_independent() {
        let mut app = app();
        app.handle(Command::Auto);
        app.handle(Command::FrontDef);
        let state = app.state();
        assert!(!state.auto_mode);
        assert!(!state.front_defrost);
        assert!(state.rear_defrost, "rear defrost must not follow front");
        assert!(!state.ac_on);

        app.handle(Command::RearDef);
        assert_eq!(app.bus().last(), Some("[CAN TX] Rear Defrost: Off"));
    }

    // -------------------------------------------------------------------------
    // Stateless Events
    // -------------------------------------------------------------------------

    #[test]
    fn test_stateless_commands_log_without_redraw() {
        let mut app = app();
        let before = app.state().clone();

        for (cmd, line) in [
            (Command::Off, "[CAN TX] OFF pressed"),
            (Command::Recirc, "[CAN TX] Recirc pressed"),
            (Command::Hazard, "[CAN] Hazard"),
            (Command::AirDir, "[CAN] Air direction"),
        ] {
            let outcome = app.handle(cmd);
            assert!(!outcome.needs_redraw(), "{cmd} must not redraw");
            assert_eq!(app.bus().last(), Some(line));
        }

        assert_eq!(app.state(), &before);
        assert_eq!(app.render_state().requests(), 0);
        assert_eq!(app.bus().sent(), 4);
    }

    // -------------------------------------------------------------------------
    // Fan
    // -------------------------------------------------------------------------

    #[test]
    fn test_fan_up_saturates_silently() {
        let mut app = app();
        for _ in 0..3 {
            assert!(app.handle(Command::FanUp).needs_redraw());
        }
        assert_eq!(app.state().fan_speed, FAN_SPEED_MAX);
        assert_eq!(app.bus().last(), Some("[CAN TX] Fan: 8"));

        let sent = app.bus().sent();
        let requests = app.render_state().requests();
        assert_eq!(app.handle(Command::FanUp), Outcome::Unchanged);
        assert_eq!(app.bus().sent(), sent, "saturated press must not log");
        assert_eq!(app.render_state().requests(), requests, "saturated press must not redraw");
    }

    #[test]
    fn test_fan_down_to_zero() {
        let mut app = app();
        for _ in 0..5 {
            app.handle(Command::FanDown);
        }
        assert_eq!(app.state().fan_speed, 0);
        assert_eq!(app.handle(Command::FanDown), Outcome::Unchanged);
        assert_eq!(app.bus().sent(), 5);
    }

    // -------------------------------------------------------------------------
    // Temperature
    // -------------------------------------------------------------------------

    #[test]
    fn test_temp_up_seventeen_presses() {
        let mut app = app();
        // 23.5 + 17 * 0.5 = 32.0
        for i in 0..17 {
            assert!(app.handle(Command::DrvTempUp).needs_redraw(), "press {i} should change temp");
        }
        assert_eq!(app.state().set_temp, SetTemp::MAX);
        assert_eq!(app.bus().sent(), 17);
        assert_eq!(app.bus().last(), Some("[CAN TX] Temp: 32.0°C"));

        let requests = app.render_state().requests();
        assert_eq!(app.handle(Command::DrvTempUp), Outcome::Unchanged, "18th press from 32.0 is a no-op");
        assert_eq!(app.bus().sent(), 17);
        assert_eq!(app.render_state().requests(), requests);
    }

    #[test]
    fn test_temp_down_saturates_silently() {
        let mut app = app();
        // 23.5 - 15 * 0.5 = 16.0
        for _ in 0..15 {
            assert!(app.handle(Command::PassTempDown).needs_redraw());
        }
        assert_eq!(app.state().set_temp, SetTemp::MIN);
        assert_eq!(app.bus().last(), Some("[CAN TX] Temp: 16.0°C"));

        let sent = app.bus().sent();
        let requests = app.render_state().requests();
        assert_eq!(app.handle(Command::PassTempDown), Outcome::Unchanged);
        assert_eq!(app.handle(Command::DrvTempDown), Outcome::Unchanged);
        assert_eq!(app.bus().sent(), sent, "saturated press must not log");
        assert_eq!(app.render_state().requests(), requests, "saturated press must not redraw");
    }

    #[test]
    fn test_both_zones_share_set_temp() {
        let mut app = app();
        app.handle(Command::PassTempUp);
        assert_eq!(app.state().set_temp.celsius(), 24.0);
        app.handle(Command::DrvTempUp);
        assert_eq!(app.state().set_temp.celsius(), 24.5);
        app.handle(Command::PassTempDown);
        app.handle(Command::DrvTempDown);
        assert_eq!(app.state().set_temp.celsius(), 23.5);
        assert_eq!(app.bus().last(), Some("[CAN TX] Temp: 23.5°C"));
    }

    // -------------------------------------------------------------------------
    // Panel Clicks
    // -------------------------------------------------------------------------

    #[test]
    fn test_panel_clicks_reach_application() {
        let mut app = app();

        // Passenger temp increment end
        let outcome = SliderPanel::click(160, &mut app);
        assert!(outcome.needs_redraw());
        assert_eq!(app.state().set_temp.celsius(), 24.0);
        assert_eq!(app.render_state().requests(), 1);

        // OFF band: logged, nothing to redraw
        ButtonPanel::click(40, &mut app);
        assert_eq!(app.render_state().requests(), 1);

        // Fan track dead zone: nothing at all
        assert_eq!(SliderPanel::click(290, &mut app), Outcome::Unchanged);

        let lines: Vec<&str> = app.bus().iter().collect();
        assert_eq!(lines, ["[CAN TX] Temp: 24.0°C", "[CAN TX] OFF pressed"]);
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    #[test]
    fn test_clock_tick_overwrites_and_redraws() {
        let mut app = app();
        let now = app.tick_clock(&FixedClock(ClockTime::new(14, 5)));
        assert_eq!(now, ClockTime::new(14, 5));
        assert_eq!(app.state().hours, 14);
        assert_eq!(app.state().minutes, 5);
        assert_eq!(app.render_state().requests(), 1);
        assert_eq!(app.bus().sent(), 0, "clock ticks are not bus traffic");

        // Same time again still redraws
        app.tick_clock(&FixedClock(ClockTime::new(14, 5)));
        assert_eq!(app.render_state().requests(), 2);
    }
}
