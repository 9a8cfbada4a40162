//! Pre-computed static styles for the LCD panels.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` constructors are const fn
//! in embedded-graphics 0.8, so every style the panels need is built at compile
//! time and referenced directly from the draw code.
//!
//! Labels use the ISO-8859-1 mono fonts so the degree sign renders. The digital
//! clock uses `ProFont` 18pt, the closest match to the original bold monospace.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_6X12, FONT_7X13, FONT_7X13_BOLD, FONT_9X18_BOLD},
    },
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::LCD_FG;

// =============================================================================
// Text Anchors (const - zero runtime cost)
// =============================================================================

/// Text centered on its position both horizontally and vertically.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Text starting at its position, vertically centered on it.
pub const WEST: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Text Styles
// =============================================================================

/// Digital clock `HH:MM`.
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, LCD_FG);

/// Bold "Auto" mode label.
pub const MODE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X18_BOLD, LCD_FG);

/// Small icon captions ("Front", "Rear").
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LCD_FG);

/// Section labels ("Outside", "Set Temp", "°C").
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X12, LCD_FG);

/// Bottom status labels ("Semi-Auto", "A/C Off").
pub const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, LCD_FG);

/// Button captions ("OFF", "A/C", "AUTO").
pub const BUTTON_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13_BOLD, LCD_FG);

/// Degree sign after the set temperature.
pub const DEGREE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X18_BOLD, LCD_FG);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Solid fill in the LCD foreground color.
pub const FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LCD_FG);

/// 1px foreground stroke.
pub const THIN: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(LCD_FG, 1);

/// 2px foreground stroke.
pub const THICK: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(LCD_FG, 2);
