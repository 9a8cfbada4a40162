//! The three LCD panels stacked in the fascia.
//!
//! - [`display`]: the instrument display, redrawn from [`HvacState`](crate::state::HvacState)
//! - [`buttons`]: the fixed button row and its 8-band click dispatch
//! - [`sliders`]: the three slider controls and their dead-zone dispatch
//!
//! # Coordinates
//!
//! Each panel renders into a target the size of its outer box (drawable area
//! plus the 2px black border). The border is drawn at the outer edge and all
//! panel content is placed relative to the inside of the border, which is
//! also the origin of the click coordinates the dispatchers receive.

pub mod buttons;
pub mod display;
pub mod sliders;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};

pub use buttons::ButtonPanel;
pub use display::DisplayPanel;
pub use sliders::SliderPanel;

use crate::colors::{LCD_BG, LCD_FG};
use crate::config::PANEL_BORDER;

/// Offset of the drawable area inside a panel's outer box.
pub const CONTENT_OFFSET: Point = Point::new(PANEL_BORDER as i32, PANEL_BORDER as i32);

/// Clear the panel to the LCD background and draw its border.
///
/// `outer` is the full panel size including the border.
pub(crate) fn draw_frame<D>(
    display: &mut D,
    outer: Size,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(LCD_BG)
        .stroke_color(LCD_FG)
        .stroke_width(PANEL_BORDER)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Rectangle::new(Point::zero(), outer).into_styled(style).draw(display).ok();
}
