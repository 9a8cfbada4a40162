//! Application configuration constants.
//!
//! Panel geometry is fixed: every coordinate the panels draw at is panel-local,
//! and the window layout below only decides where each panel sits.
//!
//! ```text
//! ┌──────────────────── window (teal) ────────────────────┐
//! │ 15px ┌─────────────── DisplayPanel ──────────────┐    │ 10px
//! │      │ clock │ icons │ outside temp │ set temp   │    │ 149px
//! │      └───────────────────────────────────────────┘    │ 8px gap
//! │      ┌─────────────── ButtonPanel ───────────────┐    │ 49px
//! │      └───────────────────────────────────────────┘    │ 8px gap
//! │      ┌─────────────── SliderPanel ───────────────┐    │ 44px
//! │      └───────────────────────────────────────────┘    │ 10px
//! └───────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Panel Configuration
// =============================================================================

/// Drawable width shared by all three panels.
pub const PANEL_WIDTH: u32 = 580;

/// Black border drawn around each panel.
pub const PANEL_BORDER: u32 = 2;

/// Drawable height of the main display panel.
pub const DISPLAY_HEIGHT: u32 = 145;

/// Drawable height of the button row.
pub const BUTTONS_HEIGHT: u32 = 45;

/// Drawable height of the slider row.
pub const SLIDERS_HEIGHT: u32 = 40;

/// Outer panel width including both borders.
pub const PANEL_OUTER_WIDTH: u32 = PANEL_WIDTH + 2 * PANEL_BORDER;

/// Outer size of the display panel.
pub const DISPLAY_SIZE: Size = Size::new(PANEL_OUTER_WIDTH, DISPLAY_HEIGHT + 2 * PANEL_BORDER);

/// Outer size of the button panel.
pub const BUTTONS_SIZE: Size = Size::new(PANEL_OUTER_WIDTH, BUTTONS_HEIGHT + 2 * PANEL_BORDER);

/// Outer size of the slider panel.
pub const SLIDERS_SIZE: Size = Size::new(PANEL_OUTER_WIDTH, SLIDERS_HEIGHT + 2 * PANEL_BORDER);

// =============================================================================
// Window Layout
// =============================================================================

/// Horizontal fascia padding left and right of the panels.
pub const PAD_X: u32 = 15;

/// Vertical fascia padding above the first and below the last panel.
pub const PAD_Y: u32 = 10;

/// Vertical gap between stacked panels.
pub const PANEL_GAP: u32 = 8;

/// Top-left of the display panel in window coordinates.
pub const DISPLAY_ORIGIN: Point = Point::new(PAD_X as i32, PAD_Y as i32);

/// Top-left of the button panel in window coordinates.
pub const BUTTONS_ORIGIN: Point = Point::new(PAD_X as i32, (PAD_Y + DISPLAY_SIZE.height + PANEL_GAP) as i32);

/// Top-left of the slider panel in window coordinates.
pub const SLIDERS_ORIGIN: Point = Point::new(
    PAD_X as i32,
    (PAD_Y + DISPLAY_SIZE.height + PANEL_GAP + BUTTONS_SIZE.height + PANEL_GAP) as i32,
);

/// Window width in pixels.
pub const WINDOW_WIDTH: u32 = PAD_X * 2 + PANEL_OUTER_WIDTH;

/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = SLIDERS_ORIGIN.y as u32 + SLIDERS_SIZE.height + PAD_Y;

/// Simulator pixel scale.
pub const SCALE: u32 = 2;

/// Window title.
pub const WINDOW_TITLE: &str = "Ford FG Falcon ICC - HVAC Display";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Period of the wall-clock update task.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Event-poll period of the main loop (~50 Hz).
pub const FRAME_TIME: Duration = Duration::from_millis(20);
