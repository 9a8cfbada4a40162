//! Slider row at the bottom of the fascia.
//!
//! Three controls, passenger temperature, fan and driver temperature, each
//! with a decrement end, a tick track with an icon, and an increment end.
//! Only the two ends of each control react to clicks; the track between them
//! is a dead zone.
//!
//! | Section | Decrement | Dead zone | Increment |
//! |---------|-----------|-----------|-----------|
//! | Passenger `..193` | `..50` | `50..=140` | `141..193` |
//! | Fan `193..387` | `193..240` | `240..=340` | `341..387` |
//! | Driver `387..` | `387..430` | `430..=530` | `531..` |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use tracing::debug;

use super::{CONTENT_OFFSET, draw_frame};
use crate::command::{Command, CommandHandler, Outcome};
use crate::config::SLIDERS_SIZE;
use crate::styles::{THICK, THIN};
use crate::widgets::{draw_led, draw_small_fan, draw_small_seat, fill_convex, line, rect};

/// Right edge of the passenger section.
const PASSENGER_END: i32 = 193;

/// Right edge of the fan section.
const FAN_END: i32 = 387;

/// Vertical centre of every control.
const ROW_Y: i32 = 20;

/// Distance from a control's centre to its LEDs.
const LED_OFFSET: i32 = 81;

/// Ticks per track; ticks 5 and 6 are the tall centre pair.
const TRACK_TICKS: i32 = 12;

/// One track: offset of the first tick from the control centre and the
/// distance between ticks.
#[derive(Clone, Copy)]
struct Track {
    start: i32,
    pitch: i32,
}

const TEMP_TRACK: Track = Track { start: -50, pitch: 7 };
const FAN_TRACK: Track = Track { start: -45, pitch: 6 };

/// The fixed slider row.
#[derive(Clone, Copy, Debug, Default)]
pub struct SliderPanel;

impl SliderPanel {
    /// Draw the whole panel.
    pub fn render<D>(display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_frame(display, SLIDERS_SIZE);
        let mut lcd = display.translated(CONTENT_OFFSET);

        rect(&mut lcd, Point::new(4, 4), Point::new(576, 36), THIN);
        for x in [PASSENGER_END, FAN_END] {
            line(&mut lcd, Point::new(x, 6), Point::new(x, 34), THIN);
        }

        draw_temp_control(&mut lcd, Point::new(97, ROW_Y));
        draw_fan_control(&mut lcd, Point::new(290, ROW_Y));
        draw_temp_control(&mut lcd, Point::new(483, ROW_Y));
    }

    /// Command under panel-local `x`, or `None` in a dead zone.
    pub const fn dispatch(x: i32) -> Option<Command> {
        if x < PASSENGER_END {
            if x < 50 {
                Some(Command::PassTempDown)
            } else if x > 140 {
                Some(Command::PassTempUp)
            } else {
                None
            }
        } else if x < FAN_END {
            if x < 240 {
                Some(Command::FanDown)
            } else if x > 340 {
                Some(Command::FanUp)
            } else {
                None
            }
        } else if x < 430 {
            Some(Command::DrvTempDown)
        } else if x > 530 {
            Some(Command::DrvTempUp)
        } else {
            None
        }
    }

    /// Press the control under `x`. Dead-zone clicks never reach `handler`.
    pub fn click<H: CommandHandler>(
        x: i32,
        handler: &mut H,
    ) -> Outcome {
        match Self::dispatch(x) {
            Some(command) => {
                debug!(x, %command, "slider press");
                handler.handle(command)
            }
            None => {
                debug!(x, "slider dead zone");
                Outcome::Unchanged
            }
        }
    }
}

fn draw_track<D>(
    lcd: &mut D,
    center: Point,
    track: Track,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 0..TRACK_TICKS {
        let x = center.x + track.start + i * track.pitch;
        let half = if i == 5 || i == 6 { 8 } else { 5 };
        line(lcd, Point::new(x, center.y - half), Point::new(x, center.y + half), THIN);
    }
}

fn draw_end_leds<D>(
    lcd: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_led(lcd, center - Point::new(LED_OFFSET, 0));
    draw_led(lcd, center + Point::new(LED_OFFSET, 0));
}

fn draw_temp_control<D>(
    lcd: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| center + Point::new(dx, dy);
    draw_end_leds(lcd, center);
    fill_convex(lcd, &[p(-70, 0), p(-60, -6), p(-60, 6)]);
    fill_convex(lcd, &[p(70, 0), p(60, -6), p(60, 6)]);
    draw_track(lcd, center, TEMP_TRACK);
    draw_small_seat(lcd, p(0, 2));
}

fn draw_fan_control<D>(
    lcd: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| center + Point::new(dx, dy);
    draw_end_leds(lcd, center);

    // Minus and plus
    line(lcd, p(-70, 0), p(-55, 0), THICK);
    line(lcd, p(55, 0), p(70, 0), THICK);
    line(lcd, p(62, -7), p(62, 7), THICK);

    draw_track(lcd, center, FAN_TRACK);
    draw_small_fan(lcd, p(5, 0));
}
