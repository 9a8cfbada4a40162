//! Color constants for the HVAC display.
//!
//! The original unit is a monochrome LCD: black segments on a grayish cream
//! background, mounted in a teal fascia. Everything on the panels is drawn
//! in [`LCD_FG`] over [`LCD_BG`].
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The 8-bit source colors are converted by dropping the low bits
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// LCD Colors
// =============================================================================

/// LCD background, #d0d0c8 (grayish cream).
pub const LCD_BG: Rgb565 = Rgb565::new(0xd0 >> 3, 0xd0 >> 2, 0xc8 >> 3);

/// LCD foreground: segments, icons, text and panel borders.
pub const LCD_FG: Rgb565 = Rgb565::BLACK;

// =============================================================================
// Fascia
// =============================================================================

/// Teal fascia behind the three panels, #508080.
pub const PANEL_BG: Rgb565 = Rgb565::new(0x50 >> 3, 0x80 >> 2, 0x80 >> 3);
