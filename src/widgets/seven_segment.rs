//! Seven-segment digit glyphs.
//!
//! The temperature readouts mimic an LCD's segment digits instead of using a
//! font. Each character maps through a bitmask table to the set of lit
//! segments, and each lit segment is a four-corner polygon placed relative to
//! the glyph's top-left corner.
//!
//! ```text
//!    AAAA
//!   F    B
//!   F    B
//!    GGGG
//!   E    C
//!   E    C
//!    DDDD
//! ```
//!
//! The horizontal segments A and D are trapezoids tapering inward; the
//! vertical segments are clipped 2px short of the corners so that the segments
//! read as separate strokes. Segment G is a plain bar centred on `h / 2`.
//!
//! Characters outside `0-9`, `-` and space light no segments.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::primitives::fill_convex;

// =============================================================================
// Segments
// =============================================================================

/// One of the seven segments, in A-G order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    /// All segments in A-G order.
    pub const ALL: [Self; 7] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G];

    /// Bit of this segment in a [`Segments`] mask.
    #[inline]
    pub const fn bit(self) -> u8 { 1 << (self as u8) }
}

/// Set of lit segments as a bitmask (bit 0 = A ... bit 6 = G).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Segments(u8);

impl Segments {
    /// Nothing lit.
    pub const NONE: Self = Self(0);

    /// Raw mask.
    #[inline]
    pub const fn bits(self) -> u8 { self.0 }

    #[inline]
    pub const fn is_lit(
        self,
        segment: Segment,
    ) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Number of lit segments.
    #[inline]
    pub const fn count(self) -> u32 { self.0.count_ones() }

    /// Lit segments in A-G order.
    pub fn iter(self) -> impl Iterator<Item = Segment> { Segment::ALL.into_iter().filter(move |s| self.is_lit(*s)) }
}

/// Segment masks for `'0'..='9'`, bit 0 = A.
const DIGIT_MASKS: [u8; 10] = [
    0b011_1111, // 0: A B C D E F
    0b000_0110, // 1: B C
    0b101_1011, // 2: A B D E G
    0b100_1111, // 3: A B C D G
    0b110_0110, // 4: B C F G
    0b110_1101, // 5: A C D F G
    0b111_1101, // 6: A C D E F G
    0b000_0111, // 7: A B C
    0b111_1111, // 8: all
    0b110_1111, // 9: A B C D F G
];

/// Look up the lit segments for a character.
pub const fn segments_for(c: char) -> Segments {
    match c {
        '0'..='9' => Segments(DIGIT_MASKS[c as usize - '0' as usize]),
        '-' => Segments(Segment::G.bit()),
        _ => Segments::NONE,
    }
}

// =============================================================================
// Size Classes
// =============================================================================

/// Glyph size class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    /// Set temperature digits: 24x44, 5px strokes.
    Large,
    /// Outside temperature digits: 12x20, 3px strokes.
    Small,
}

impl SizeClass {
    /// Glyph width, height and stroke thickness.
    #[inline]
    pub const fn metrics(self) -> (i32, i32, i32) {
        match self {
            Self::Large => (24, 44, 5),
            Self::Small => (12, 20, 3),
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Corners of `segment` for a glyph whose top-left corner is `origin`.
pub fn segment_quad(
    segment: Segment,
    origin: Point,
    size: SizeClass,
) -> [Point; 4] {
    let (w, h, t) = size.metrics();
    let (x, y) = (origin.x, origin.y);
    let mid = h / 2;
    let p = Point::new;

    match segment {
        Segment::A => [p(x + t, y), p(x + w - t, y), p(x + w - t - 2, y + t), p(x + t + 2, y + t)],
        Segment::B => [
            p(x + w, y + t),
            p(x + w, y + mid - 2),
            p(x + w - t, y + mid - 2),
            p(x + w - t, y + t + 2),
        ],
        Segment::C => [
            p(x + w, y + mid + 2),
            p(x + w, y + h - t),
            p(x + w - t, y + h - t - 2),
            p(x + w - t, y + mid + 2),
        ],
        Segment::D => [
            p(x + t, y + h),
            p(x + w - t, y + h),
            p(x + w - t - 2, y + h - t),
            p(x + t + 2, y + h - t),
        ],
        Segment::E => [p(x, y + mid + 2), p(x, y + h - t), p(x + t, y + h - t - 2), p(x + t, y + mid + 2)],
        Segment::F => [p(x, y + t), p(x, y + mid - 2), p(x + t, y + mid - 2), p(x + t, y + t + 2)],
        Segment::G => [
            p(x + t + 1, y + mid - t / 2),
            p(x + w - t - 1, y + mid - t / 2),
            p(x + w - t - 1, y + mid + t / 2),
            p(x + t + 1, y + mid + t / 2),
        ],
    }
}

/// Draw one character as a seven-segment glyph at `origin`.
pub fn draw_digit<D>(
    display: &mut D,
    origin: Point,
    c: char,
    size: SizeClass,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for segment in segments_for(c).iter() {
        fill_convex(display, &segment_quad(segment, origin, size));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
