//! Drawing building blocks shared by the panels.
//!
//! - [`primitives`]: polygon fills, outlines, ovals and arrows on top of the
//!   embedded-graphics primitives
//! - [`seven_segment`]: segment table and glyph geometry for the temperature
//!   readouts
//! - [`icons`]: the fixed icon artwork, each drawn relative to an anchor point
//!
//! Everything here draws in [`LCD_FG`](crate::colors::LCD_FG) and never
//! clears: panels clear their own background before drawing.

mod icons;
mod primitives;
mod seven_segment;

pub use icons::{
    draw_air_direction_button,
    draw_airflow_person,
    draw_car,
    draw_front_defrost,
    draw_front_defrost_button,
    draw_hazard,
    draw_led,
    draw_rear_defrost_button,
    draw_recirc,
    draw_small_fan,
    draw_small_seat,
    draw_snowflake,
    draw_three_leds,
};
pub use primitives::{arrow, fill_convex, line, outline_polygon, oval, point_f, polyline, rect};
pub use seven_segment::{Segment, Segments, SizeClass, draw_digit, segment_quad, segments_for};
