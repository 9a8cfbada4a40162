//! Main instrument display panel.
//!
//! The display is a pure function of [`HvacState`]: every render clears the
//! panel and draws it again from scratch, so rendering the same state twice
//! gives the same pixels.
//!
//! # Layout (panel-local)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  ╭clock╮   Auto  ┌front┐   →person   ●  Outside -12°C  Set Temp  │
//! │  │13:28│         │ ≋≋≋ │   →           Rear         2 3.5°       │
//! │  ╰ car ╯         Front                              ✳ ▮▮▮▮▮▯▯▯   │
//! │ ──────────────────────────────────────────────────────────────── │
//! │                      Semi-Auto                        A/C Off    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::Text;
use heapless::String;

use super::{CONTENT_OFFSET, draw_frame};
use crate::config::DISPLAY_SIZE;
use crate::state::{ClockTime, HvacState, SetTemp};
use crate::styles::{
    CAPTION_STYLE,
    CENTERED,
    DEGREE_STYLE,
    FILL,
    LABEL_STYLE,
    MODE_STYLE,
    STATUS_STYLE,
    THICK,
    THIN,
    TIME_STYLE,
    WEST,
};
use crate::widgets::{
    SizeClass,
    draw_airflow_person,
    draw_car,
    draw_digit,
    draw_front_defrost,
    draw_snowflake,
    line,
    oval,
    point_f,
    rect,
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Centre of the analog clock face.
const CLOCK_CENTER: Point = Point::new(70, 68);

/// Outer radius of the clock ticks.
const CLOCK_RADIUS: f32 = 52.0;

/// Hour tick length (every 5th tick).
const HOUR_TICK_LEN: f32 = 9.0;

/// Minute tick length.
const MINUTE_TICK_LEN: f32 = 5.0;

/// Top-left of the first outside-temperature glyph: sign, tens, units.
const OUTSIDE_DIGIT_X: [i32; 3] = [365, 378, 394];
const OUTSIDE_DIGIT_Y: i32 = 8;

/// Top-left of the first set-temperature glyph.
const SET_TEMP_ORIGIN: Point = Point::new(455, 28);

/// Horizontal advance after a large digit.
const DIGIT_PITCH: i32 = 32;

/// Horizontal advance after the decimal point.
const DOT_PITCH: i32 = 10;

/// Top-left of the first fan bar box.
const FAN_BAR_ORIGIN: Point = Point::new(482, 88);

/// Horizontal distance between fan bar boxes.
const FAN_BAR_PITCH: i32 = 13;

/// Number of fan bar boxes.
const FAN_BAR_BOXES: u8 = 8;

// =============================================================================
// Formatting
// =============================================================================

/// `HH:MM` for the digital clock.
pub fn format_time(time: ClockTime) -> String<8> {
    let mut s = String::new();
    write!(s, "{:02}:{:02}", time.hours, time.minutes).ok();
    s
}

/// Set temperature as shown by the large digits, e.g. `23.5`.
pub fn format_set_temp(temp: SetTemp) -> String<8> {
    let mut s = String::new();
    write!(s, "{:04.1}", temp.celsius()).ok();
    s
}

/// Outside temperature as a sign slot followed by two right-aligned digits,
/// e.g. `-12`, ` 12` or `- 5`.
///
/// The sign slot is `-` or a space. Magnitudes above 99 show as 99.
pub fn format_outside_temp(celsius: i8) -> String<4> {
    let sign = if celsius < 0 { '-' } else { ' ' };
    let mut s = String::new();
    write!(s, "{sign}{:>2}", celsius.unsigned_abs().min(99)).ok();
    s
}

/// End points and stroke of clock tick `i` (0-59), tick 0 at twelve o'clock.
pub fn clock_tick(i: u32) -> (Point, Point, PrimitiveStyle<Rgb565>) {
    let (len, style) = if i % 5 == 0 { (HOUR_TICK_LEN, THICK) } else { (MINUTE_TICK_LEN, THIN) };
    let angle = ((i * 6) as f32 - 90.0).to_radians();
    let (sin, cos) = angle.sin_cos();
    let (cx, cy) = (CLOCK_CENTER.x as f32, CLOCK_CENTER.y as f32);

    let inner_r = CLOCK_RADIUS - len;
    let inner = point_f(inner_r.mul_add(cos, cx), inner_r.mul_add(sin, cy));
    let outer = point_f(CLOCK_RADIUS.mul_add(cos, cx), CLOCK_RADIUS.mul_add(sin, cy));
    (inner, outer, style)
}

/// Right-hand bottom status label.
pub const fn ac_label(ac_on: bool) -> &'static str {
    if ac_on { "A/C On" } else { "A/C Off" }
}

// =============================================================================
// Rendering
// =============================================================================

/// The instrument display panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayPanel;

impl DisplayPanel {
    /// Clear the panel and draw it from `state`.
    pub fn render<D>(
        display: &mut D,
        state: &HvacState,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_frame(display, DISPLAY_SIZE);
        let mut lcd = display.translated(CONTENT_OFFSET);

        draw_clock(&mut lcd, state.clock());
        draw_mode_icons(&mut lcd);
        draw_outside_temp(&mut lcd, state.outside_temp);
        draw_set_temp(&mut lcd, state.set_temp);
        draw_fan_bar(&mut lcd, state.fan_speed);

        // Status strip
        line(&mut lcd, Point::new(15, 115), Point::new(565, 115), THIN);
        Text::with_text_style("Semi-Auto", Point::new(250, 130), STATUS_STYLE, CENTERED)
            .draw(&mut lcd)
            .ok();
        Text::with_text_style(ac_label(state.ac_on), Point::new(520, 130), STATUS_STYLE, CENTERED)
            .draw(&mut lcd)
            .ok();
    }
}

fn draw_clock<D>(
    lcd: &mut D,
    time: ClockTime,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 0..60 {
        let (inner, outer, style) = clock_tick(i);
        line(lcd, inner, outer, style);
    }

    let time_pos = CLOCK_CENTER - Point::new(0, 5);
    Text::with_text_style(&format_time(time), time_pos, TIME_STYLE, CENTERED)
        .draw(lcd)
        .ok();
    draw_car(lcd, CLOCK_CENTER + Point::new(0, 28));
}

/// Auto label, defrost, airflow and rear indicator. None of these follow the
/// state flags.
fn draw_mode_icons<D>(lcd: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Auto", Point::new(138, 48), MODE_STYLE, WEST)
        .draw(lcd)
        .ok();
    draw_front_defrost(lcd, Point::new(200, 55));
    draw_airflow_person(lcd, Point::new(295, 60));

    oval(lcd, Point::new(370, 45), Point::new(382, 57), FILL);
    Text::with_text_style("Rear", Point::new(408, 72), CAPTION_STYLE, CENTERED)
        .draw(lcd)
        .ok();
}

fn draw_outside_temp<D>(
    lcd: &mut D,
    celsius: i8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Outside", Point::new(310, 15), LABEL_STYLE, WEST)
        .draw(lcd)
        .ok();
    for (c, x) in format_outside_temp(celsius).chars().zip(OUTSIDE_DIGIT_X) {
        draw_digit(lcd, Point::new(x, OUTSIDE_DIGIT_Y), c, SizeClass::Small);
    }
    Text::with_text_style("°C", Point::new(415, 15), LABEL_STYLE, WEST)
        .draw(lcd)
        .ok();
}

fn draw_set_temp<D>(
    lcd: &mut D,
    temp: SetTemp,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Set Temp", Point::new(480, 12), LABEL_STYLE, WEST)
        .draw(lcd)
        .ok();

    let y = SET_TEMP_ORIGIN.y;
    let mut x = SET_TEMP_ORIGIN.x;
    for c in format_set_temp(temp).chars() {
        if c == '.' {
            oval(lcd, Point::new(x, y + 42), Point::new(x + 6, y + 48), FILL);
            x += DOT_PITCH;
        } else {
            draw_digit(lcd, Point::new(x, y), c, SizeClass::Large);
            x += DIGIT_PITCH;
        }
    }

    Text::with_text_style("°", Point::new(x + 5, y + 5), DEGREE_STYLE, WEST)
        .draw(lcd)
        .ok();
}

fn draw_fan_bar<D>(
    lcd: &mut D,
    fan_speed: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_snowflake(lcd, Point::new(462, 95));
    for i in 0..FAN_BAR_BOXES {
        let top_left = FAN_BAR_ORIGIN + Point::new(i32::from(i) * FAN_BAR_PITCH, 0);
        let style = if i < fan_speed { FILL } else { THIN };
        rect(lcd, top_left, top_left + Point::new(10, 14), style);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{LCD_BG, LCD_FG};

    fn panel() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(DISPLAY_SIZE) }

    fn rendered(state: &HvacState) -> SimulatorDisplay<Rgb565> {
        let mut display = panel();
        DisplayPanel::render(&mut display, state);
        display
    }

    /// Pixel at a panel-local content coordinate.
    fn px(
        display: &SimulatorDisplay<Rgb565>,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        display.get_pixel(Point::new(x, y) + CONTENT_OFFSET)
    }

    fn same_pixels(
        a: &SimulatorDisplay<Rgb565>,
        b: &SimulatorDisplay<Rgb565>,
        area: Rectangle,
    ) -> bool {
        area.points().all(|p| a.get_pixel(p) == b.get_pixel(p))
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(ClockTime::new(14, 5)).as_str(), "14:05");
        assert_eq!(format_time(ClockTime::new(0, 0)).as_str(), "00:00");
        assert_eq!(format_time(ClockTime::new(23, 59)).as_str(), "23:59");
    }

    #[test]
    fn test_format_set_temp() {
        assert_eq!(format_set_temp(SetTemp::default()).as_str(), "23.5");
        assert_eq!(format_set_temp(SetTemp::MIN).as_str(), "16.0");
        assert_eq!(format_set_temp(SetTemp::MAX).as_str(), "32.0");
    }

    #[test]
    fn test_format_outside_temp() {
        assert_eq!(format_outside_temp(-12).as_str(), "-12");
        assert_eq!(format_outside_temp(12).as_str(), " 12");
        assert_eq!(format_outside_temp(-5).as_str(), "- 5");
        assert_eq!(format_outside_temp(0).as_str(), "  0");
        assert_eq!(format_outside_temp(i8::MIN).as_str(), "-99");
    }

    #[test]
    fn test_ac_label() {
        assert_eq!(ac_label(false), "A/C Off");
        assert_eq!(ac_label(true), "A/C On");
    }

    // -------------------------------------------------------------------------
    // Clock Face
    // -------------------------------------------------------------------------

    #[test]
    fn test_clock_tick_twelve_oclock() {
        let (inner, outer, style) = clock_tick(0);
        assert_eq!(inner, Point::new(70, 25));
        assert_eq!(outer, Point::new(70, 16));
        assert_eq!(style.stroke_width, 2, "hour ticks are 2px wide");
    }

    #[test]
    fn test_clock_tick_three_oclock_and_minutes() {
        let (inner, outer, _) = clock_tick(15);
        assert_eq!(inner, Point::new(113, 68));
        assert_eq!(outer, Point::new(122, 68));

        let (inner, outer, style) = clock_tick(1);
        assert_eq!(style.stroke_width, 1, "minute ticks are 1px wide");
        let len = ((outer.x - inner.x).pow(2) + (outer.y - inner.y).pow(2)) as f32;
        assert!((len.sqrt() - MINUTE_TICK_LEN).abs() < 1.5);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_clears_previous_content() {
        let mut display = panel();
        display.clear(LCD_FG).ok();
        DisplayPanel::render(&mut display, &HvacState::new());
        assert_eq!(display.get_pixel(Point::zero()), LCD_FG, "border");
        assert_eq!(px(&display, 5, 140), LCD_BG, "empty corner is cleared");
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = HvacState::new();
        let mut display = rendered(&state);
        let first = rendered(&state);
        DisplayPanel::render(&mut display, &state);
        assert!(same_pixels(&display, &first, display.bounding_box()));
    }

    #[test]
    fn test_fan_bar_fill_follows_speed() {
        let display = rendered(&HvacState::new());
        // Speed 5: boxes 0-4 filled, 5-7 outlined
        for i in 0..8 {
            let centre_x = 482 + i * 13 + 5;
            let expect = if i < 5 { LCD_FG } else { LCD_BG };
            assert_eq!(px(&display, centre_x, 95), expect, "fan box {i}");
        }
        assert_eq!(px(&display, 482 + 7 * 13, 95), LCD_FG, "empty boxes keep their outline");
    }

    #[test]
    fn test_set_temp_decimal_point() {
        let display = rendered(&HvacState::new());
        // "23.5": two digits advance to x = 519 where the point is drawn
        assert_eq!(px(&display, 522, 73), LCD_FG);
    }

    #[test]
    fn test_ac_toggle_changes_status_label_only() {
        let mut state = HvacState::new();
        let off = rendered(&state);
        state.ac_on = true;
        let on = rendered(&state);

        let label = Rectangle::new(Point::new(480, 122) + CONTENT_OFFSET, Size::new(80, 16));
        let clock = Rectangle::new(CONTENT_OFFSET, Size::new(140, 110));
        assert!(!same_pixels(&off, &on, label), "A/C label must change");
        assert!(same_pixels(&off, &on, clock), "clock area is unaffected");
    }

    #[test]
    fn test_defrost_flags_do_not_change_icons() {
        let mut state = HvacState::new();
        let before = rendered(&state);
        state.front_defrost = false;
        state.rear_defrost = false;
        state.auto_mode = false;
        let after = rendered(&state);
        assert!(same_pixels(&before, &after, before.bounding_box()));
    }
}
