//! Low-level drawing primitives shared across panels.
//!
//! embedded-graphics has no general polygon primitive, so the LCD shapes are
//! built from what it does have:
//!
//! - Filled convex polygons (segments, arrow heads) are drawn as a triangle fan
//!   from the first vertex.
//! - Outlined polygons are drawn edge by edge with `Line`, closing back to the
//!   first vertex.
//! - Ovals are given by their bounding corners, like the original artwork, and
//!   drawn as circles with the box width as diameter.
//!
//! All functions take panel-local coordinates and ignore draw errors.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use crate::styles::FILL;

/// Arrow head length from tip to neck along the shaft.
const ARROW_NECK: f32 = 8.0;

/// Arrow head length from tip to the trailing corners along the shaft.
const ARROW_TRAIL: f32 = 10.0;

/// Arrow head overhang beyond the shaft edge.
const ARROW_SPREAD: f32 = 4.0;

/// Round a float coordinate pair to a pixel.
#[inline]
pub fn point_f(
    x: f32,
    y: f32,
) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

/// Straight line in `style`.
pub fn line<D>(
    display: &mut D,
    from: Point,
    to: Point,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(from, to).into_styled(style).draw(display).ok();
}

/// Connected line segments through `points` (open path).
pub fn polyline<D>(
    display: &mut D,
    points: &[Point],
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for pair in points.windows(2) {
        line(display, pair[0], pair[1], style);
    }
}

/// Closed polygon outline through `points`.
pub fn outline_polygon<D>(
    display: &mut D,
    points: &[Point],
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    polyline(display, points, style);
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        line(display, last, first, style);
    }
}

/// Solid convex polygon through `points`.
///
/// Fewer than three points draw nothing.
pub fn fill_convex<D>(
    display: &mut D,
    points: &[Point],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some((&apex, rest)) = points.split_first() else {
        return;
    };
    for pair in rest.windows(2) {
        Triangle::new(apex, pair[0], pair[1]).into_styled(FILL).draw(display).ok();
    }
}

/// Oval inside the box `top_left`..`bottom_right`.
pub fn oval<D>(
    display: &mut D,
    top_left: Point,
    bottom_right: Point,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = (bottom_right.x - top_left.x).max(0) as u32;
    Circle::new(top_left, diameter).into_styled(style).draw(display).ok();
}

/// Rectangle spanning two corners (inclusive).
pub fn rect<D>(
    display: &mut D,
    top_left: Point,
    bottom_right: Point,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::with_corners(top_left, bottom_right)
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Line with a filled arrow head at `to`.
///
/// The head is 10px long with its neck 8px behind the tip, and overhangs the
/// shaft by 4px on each side. The shaft stops at the neck so the head keeps a
/// sharp tip at any stroke width.
pub fn arrow<D>(
    display: &mut D,
    from: Point,
    to: Point,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (dx, dy) = ((to.x - from.x) as f32, (to.y - from.y) as f32);
    let len = dx.hypot(dy);
    if len < f32::EPSILON {
        return;
    }
    // Unit vector along the shaft and its normal
    let (ux, uy) = (dx / len, dy / len);
    let (nx, ny) = (-uy, ux);

    let tip = (to.x as f32, to.y as f32);
    let neck = point_f(tip.0 - ux * ARROW_NECK, tip.1 - uy * ARROW_NECK);
    let spread = ARROW_SPREAD + style.stroke_width as f32 / 2.0;
    let trail = (tip.0 - ux * ARROW_TRAIL, tip.1 - uy * ARROW_TRAIL);
    let wing_a = point_f(trail.0 + nx * spread, trail.1 + ny * spread);
    let wing_b = point_f(trail.0 - nx * spread, trail.1 - ny * spread);

    line(display, from, neck, style);
    // Head is concave at the neck: fill as two halves
    fill_convex(display, &[to, wing_a, neck]);
    fill_convex(display, &[to, neck, wing_b]);
}
