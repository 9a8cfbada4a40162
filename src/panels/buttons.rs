//! Button row below the display.
//!
//! Eight 72px bands separated by divider lines. The artwork never changes, so
//! the panel is drawn once at startup. A click anywhere in a band, at any
//! height, presses that band's button:
//!
//! | x | Command |
//! |---|---------|
//! | `..72` | `off` |
//! | `72..144` | `recirc` |
//! | `144..216` | `ac` |
//! | `216..288` | `auto` |
//! | `288..360` | `hazard` |
//! | `360..432` | `front_def` |
//! | `432..504` | `air_dir` |
//! | `504..` | `rear_def` |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use tracing::debug;

use super::{CONTENT_OFFSET, draw_frame};
use crate::command::{Command, CommandHandler, Outcome};
use crate::config::BUTTONS_SIZE;
use crate::styles::{BUTTON_STYLE, CENTERED, THIN};
use crate::widgets::{
    draw_air_direction_button,
    draw_front_defrost_button,
    draw_hazard,
    draw_rear_defrost_button,
    draw_recirc,
    draw_three_leds,
    line,
    oval,
};

/// Width of one button band.
pub const BAND_WIDTH: i32 = 72;

/// Commands in band order, left to right.
const BANDS: [Command; 8] = [
    Command::Off,
    Command::Recirc,
    Command::Ac,
    Command::Auto,
    Command::Hazard,
    Command::FrontDef,
    Command::AirDir,
    Command::RearDef,
];

/// Row of the button labels and icons.
const LABEL_Y: i32 = 15;

/// Row of the LED triplets.
const LED_Y: i32 = 32;

/// The fixed button row.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonPanel;

impl ButtonPanel {
    /// Draw the whole panel.
    pub fn render<D>(display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_frame(display, BUTTONS_SIZE);
        let mut lcd = display.translated(CONTENT_OFFSET);

        for k in 1..BANDS.len() as i32 {
            let x = k * BAND_WIDTH;
            line(&mut lcd, Point::new(x, 5), Point::new(x, 40), THIN);
        }

        for (label, cx) in [("OFF", band_center(0)), ("A/C", band_center(2)), ("AUTO", band_center(3))] {
            Text::with_text_style(label, Point::new(cx, LABEL_Y), BUTTON_STYLE, CENTERED)
                .draw(&mut lcd)
                .ok();
        }
        draw_recirc(&mut lcd, Point::new(band_center(1), LABEL_Y));
        for band in 0..4 {
            draw_three_leds(&mut lcd, Point::new(band_center(band), LED_Y));
        }

        draw_hazard(&mut lcd, Point::new(band_center(4), 22));
        draw_front_defrost_button(&mut lcd, Point::new(band_center(5), 20));
        draw_air_direction_button(&mut lcd, Point::new(band_center(6), 20));
        oval(&mut lcd, Point::new(495, 18), Point::new(503, 26), THIN);
        draw_rear_defrost_button(&mut lcd, Point::new(band_center(7), 20));
    }

    /// Button under panel-local `x`.
    ///
    /// The bands cover every `x`: anything left of the panel maps to the
    /// first band and anything right of it to the last.
    pub fn dispatch(x: i32) -> Command {
        let band = (x.max(0) / BAND_WIDTH).min(BANDS.len() as i32 - 1);
        BANDS[band as usize]
    }

    /// Press the button under `x`, invoking `handler` exactly once.
    pub fn click<H: CommandHandler>(
        x: i32,
        handler: &mut H,
    ) -> Outcome {
        let command = Self::dispatch(x);
        debug!(x, %command, "button press");
        handler.handle(command)
    }
}

/// Horizontal centre of band `band`.
#[inline]
const fn band_center(band: i32) -> i32 { band * BAND_WIDTH + BAND_WIDTH / 2 }
