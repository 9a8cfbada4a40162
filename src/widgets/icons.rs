//! Fixed icon glyphs.
//!
//! Every icon is a fixed set of lines, outlines and ovals offset from an
//! anchor point given by the caller (the icon's visual centre unless noted).
//! Icons never look at [`HvacState`](crate::state::HvacState): the recreated
//! LCD shows them permanently lit whatever the defrost or A/C flags say.

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Arc;
use embedded_graphics::text::Text;

use super::primitives::{arrow, fill_convex, line, oval, outline_polygon, point_f, polyline, rect};
use crate::styles::{CAPTION_STYLE, CENTERED, FILL, THICK, THIN};

// =============================================================================
// Display Panel Icons
// =============================================================================

/// Car silhouette under the clock.
pub fn draw_car<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    let body = [p(-18, 5), p(-14, -1), p(-7, -6), p(5, -6), p(11, -1), p(16, 5)];
    outline_polygon(display, &body, THICK);

    // Wheels
    oval(display, p(-14, 2), p(-6, 10), THICK);
    oval(display, p(4, 2), p(12, 10), THICK);
}

/// Windshield with three wavy heat lines and a "Front" caption.
pub fn draw_front_defrost<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    outline_polygon(display, &[p(-22, 18), p(-14, -18), p(14, -18), p(22, 18)], THICK);

    for offset in [-8, 0, 8] {
        let mut zigzag = [Point::zero(); 5];
        for (i, point) in zigzag.iter_mut().enumerate() {
            let swing = if i % 2 == 0 { 4 } else { -4 };
            *point = p(offset + swing, -12 + 7 * i as i32);
        }
        polyline(display, &zigzag, THICK);
    }

    Text::with_text_style("Front", p(0, 30), CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}

/// Seated person with face-level and foot-level airflow arrows.
pub fn draw_airflow_person<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);

    // Airflow to the face and the feet
    arrow(display, p(-45, -20), p(-20, -20), THICK);
    arrow(display, p(-45, 10), p(-20, 10), THICK);

    // Head, back and legs
    oval(display, p(-5, -30), p(10, -15), THICK);
    line(display, p(2, -15), p(-2, 5), THICK);
    line(display, p(-2, 5), p(12, 20), THICK);

    // Seat
    line(display, p(-15, 20), p(-10, -5), THICK);
    line(display, p(-15, 20), p(15, 20), THICK);
}

/// Six-ray snowflake next to the fan bar.
pub fn draw_snowflake<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_rays(display, at, 8.0, 6, 0.0, THICK);
}

// =============================================================================
// Button Panel Icons
// =============================================================================

/// Row of three indicator LEDs 15px apart.
pub fn draw_three_leds<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for offset in [-15, 0, 15] {
        draw_led(display, at + Point::new(offset, 0));
    }
}

/// Small car with a curved recirculation arrow.
pub fn draw_recirc<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    let body = [p(-12, 6), p(-8, 0), p(-2, -4), p(6, -4), p(10, 0), p(12, 6)];
    outline_polygon(display, &body, THIN);

    // 200° counter-clockwise sweep starting at 120°
    Arc::new(p(-18, -12), 16, Angle::from_degrees(-120.0), Angle::from_degrees(-200.0))
        .into_styled(THIN)
        .draw(display)
        .ok();
    fill_convex(display, &[p(-18, -2), p(-13, -6), p(-13, 2)]);
}

/// Hazard warning triangle.
pub fn draw_hazard<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    outline_polygon(display, &[p(0, -14), p(-16, 10), p(16, 10)], THICK);
}

/// Front defrost button: windshield with three straight heat lines.
pub fn draw_front_defrost_button<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    outline_polygon(display, &[p(-14, 10), p(-8, -10), p(8, -10), p(14, 10)], THIN);
    for offset in [-5, 0, 5] {
        line(display, p(offset, 6), p(offset, -6), THIN);
    }
}

/// Air direction button: airflow lines towards a standing figure.
pub fn draw_air_direction_button<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    for dy in [-5, 0, 5] {
        line(display, p(-15, dy), p(-5, dy), THIN);
    }
    oval(display, p(2, -10), p(10, -2), THIN);
    line(display, p(6, -2), p(6, 10), THIN);
}

/// Rear defrost button: rear window with three heater lines.
pub fn draw_rear_defrost_button<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    rect(display, p(-12, -8), p(12, 8), THIN);
    for dy in [-4, 0, 4] {
        line(display, p(-9, dy), p(9, dy), THIN);
    }
}

// =============================================================================
// Slider Panel Icons
// =============================================================================

/// Tiny seat in the middle of a temperature track.
pub fn draw_small_seat<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let p = |dx: i32, dy: i32| at + Point::new(dx, dy);
    polyline(display, &[p(-4, 4), p(-2, -4), p(3, -4), p(5, 4)], THIN);
    line(display, p(-4, 4), p(8, 4), THIN);
}

/// Tiny four-blade fan in the middle of the fan track.
pub fn draw_small_fan<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_rays(display, at, 5.0, 4, 30.0, THIN);
    oval(display, at - Point::new(2, 2), at + Point::new(2, 2), FILL);
}

// =============================================================================
// Shared Pieces
// =============================================================================

/// Unlit 8px indicator LED centred on `at`.
pub fn draw_led<D>(
    display: &mut D,
    at: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    oval(display, at - Point::new(4, 4), at + Point::new(4, 4), THIN);
}

/// `count` evenly spaced rays of length `radius` from `at`, the first at
/// `phase_deg` (0° points right, angles grow clockwise on screen).
fn draw_rays<D>(
    display: &mut D,
    at: Point,
    radius: f32,
    count: u16,
    phase_deg: f32,
    style: embedded_graphics::primitives::PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let step = 360.0 / f32::from(count);
    for i in 0..count {
        let rad = (f32::from(i) * step + phase_deg).to_radians();
        let end = point_f(radius.mul_add(rad.cos(), at.x as f32), radius.mul_add(rad.sin(), at.y as f32));
        line(display, at, end, style);
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{LCD_BG, LCD_FG};

    fn canvas() -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(80, 80));
        display.clear(LCD_BG).ok();
        display
    }

    fn lit_in(
        display: &SimulatorDisplay<Rgb565>,
        area: embedded_graphics::primitives::Rectangle,
    ) -> usize {
        area.points().filter(|p| display.get_pixel(*p) == LCD_FG).count()
    }

    #[test]
    fn test_snowflake_ray_ends() {
        let mut display = canvas();
        let at = Point::new(40, 40);
        draw_snowflake(&mut display, at);
        // 0° and 180° rays end 8px left and right of centre
        assert_eq!(display.get_pixel(Point::new(48, 40)), LCD_FG);
        assert_eq!(display.get_pixel(Point::new(32, 40)), LCD_FG);
        // No vertical ray in a 60° pattern
        assert_ne!(display.get_pixel(Point::new(40, 33)), LCD_FG);
    }

    #[test]
    fn test_icons_stay_near_anchor() {
        let at = Point::new(40, 40);
        let far = embedded_graphics::primitives::Rectangle::new(Point::zero(), Size::new(80, 8));
        let icons: [fn(&mut SimulatorDisplay<Rgb565>, Point); 7] = [
            draw_car,
            draw_snowflake,
            draw_recirc,
            draw_hazard,
            draw_front_defrost_button,
            draw_rear_defrost_button,
            draw_small_fan,
        ];
        for draw in icons {
            let mut display = canvas();
            draw(&mut display, at);
            assert!(lit_in(&display, display.bounding_box()) > 0, "icon drew nothing");
            assert_eq!(lit_in(&display, far), 0, "icon leaked far from its anchor");
        }
    }

    #[test]
    fn test_three_leds_spacing() {
        let mut display = canvas();
        draw_three_leds(&mut display, Point::new(40, 40));
        // Left edge of each LED ring sits 4px left of its centre
        for cx in [25, 40, 55] {
            assert_eq!(display.get_pixel(Point::new(cx - 4, 40)), LCD_FG, "LED at {cx} missing");
            assert_ne!(display.get_pixel(Point::new(cx, 40)), LCD_FG, "LED at {cx} should be hollow");
        }
    }
}
