//! Window hit-testing.
//!
//! Maps a point in window coordinates to the panel under it and the
//! panel-local point the panel's dispatcher expects. Points on a panel border,
//! in the fascia padding or in the gaps between panels hit nothing.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{BUTTONS_ORIGIN, BUTTONS_SIZE, DISPLAY_ORIGIN, DISPLAY_SIZE, SLIDERS_ORIGIN, SLIDERS_SIZE};
use crate::panels::CONTENT_OFFSET;

/// One of the three stacked panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelId {
    Display,
    Buttons,
    Sliders,
}

impl PanelId {
    /// All panels, top to bottom.
    pub const ALL: [Self; 3] = [Self::Display, Self::Buttons, Self::Sliders];

    /// Top-left of the panel's outer box in window coordinates.
    pub const fn origin(self) -> Point {
        match self {
            Self::Display => DISPLAY_ORIGIN,
            Self::Buttons => BUTTONS_ORIGIN,
            Self::Sliders => SLIDERS_ORIGIN,
        }
    }

    /// Size of the panel's outer box, border included.
    pub const fn size(self) -> Size {
        match self {
            Self::Display => DISPLAY_SIZE,
            Self::Buttons => BUTTONS_SIZE,
            Self::Sliders => SLIDERS_SIZE,
        }
    }

    /// Clickable area inside the border, in window coordinates.
    pub fn content_area(self) -> Rectangle {
        let border = Size::new(CONTENT_OFFSET.x as u32, CONTENT_OFFSET.y as u32);
        Rectangle::new(self.origin() + CONTENT_OFFSET, self.size() - border * 2)
    }
}

/// Panel under window point `point` and the point relative to that panel's
/// content origin.
pub fn locate(point: Point) -> Option<(PanelId, Point)> {
    PanelId::ALL.into_iter().find_map(|id| {
        let area = id.content_area();
        area.contains(point).then(|| (id, point - area.top_left))
    })
}
