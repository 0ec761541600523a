//! Seven-segment score readout drawn with filled rectangles

use crate::color::Color;
use crate::consts::{SCORE_DIGITS, SCORE_MAX};
use crate::surface::Surface;

/// Segment endpoints on a 5 x 4 grid, in a..g order
/// (top, top right, bottom right, bottom, bottom left, top left, middle)
const SEGMENTS: [((i32, i32), (i32, i32)); 7] = [
    ((1, 0), (4, 0)),
    ((4, 0), (4, 2)),
    ((4, 2), (4, 4)),
    ((1, 4), (4, 4)),
    ((0, 2), (0, 4)),
    ((0, 0), (0, 2)),
    ((1, 2), (4, 2)),
];

/// Lit segments per digit, bit 0 = a
const DIGITS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Fixed-width zero-padded number display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SevenSegment {
    pub x: i32,
    pub y: i32,
    pub digit_height: i32,
}

impl SevenSegment {
    pub const fn new(x: i32, y: i32, digit_height: i32) -> Self {
        Self { x, y, digit_height }
    }

    pub fn digit_width(&self) -> i32 {
        self.digit_height * 3 / 5 + 5
    }

    pub fn thickness(&self) -> i32 {
        (self.digit_height / 8).max(2)
    }

    pub fn gap(&self) -> i32 {
        (self.digit_height / 16).max(1)
    }

    /// Number of lit segments for a decimal digit
    pub fn segment_count(digit: u8) -> u32 {
        DIGITS[usize::from(digit % 10)].count_ones()
    }

    pub fn draw_digit(&self, surface: &mut dyn Surface, x: i32, digit: u8, color: Color) {
        let mask = DIGITS[usize::from(digit % 10)];
        let (w, h) = (self.digit_width(), self.digit_height);
        let (thickness, gap) = (self.thickness(), self.gap());

        for (i, &((x0, y0), (x1, y1))) in SEGMENTS.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let sx = x + x0 * w / 5;
            let sy = self.y + y0 * h / 4;
            let ex = x + x1 * w / 5;
            let ey = self.y + y1 * h / 4;
            if x0 == x1 {
                surface.fill_rect(sx, sy + gap, thickness, ey - sy - 2 * gap, color);
            } else {
                surface.fill_rect(sx + gap, sy, ex - sx - 2 * gap, thickness, color);
            }
        }
    }

    /// Draw `value` (clamped to the display maximum) zero-padded to six digits
    pub fn draw_number(&self, surface: &mut dyn Surface, value: u32, color: Color) {
        let text = format!("{:0width$}", value.min(SCORE_MAX), width = SCORE_DIGITS);
        let step = self.digit_width() + self.gap();
        let mut x = self.x;
        for b in text.bytes() {
            self.draw_digit(surface, x, b - b'0', color);
            x += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{DrawCall, RecordingSurface};

    fn rects(surface: &RecordingSurface) -> usize {
        surface.count(|c| matches!(c, DrawCall::FillRect { .. }))
    }

    #[test]
    fn test_segment_counts() {
        let counts: Vec<u32> = (0..10).map(SevenSegment::segment_count).collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn test_geometry_for_score_height() {
        let display = SevenSegment::new(10, 5, 16);
        assert_eq!(display.digit_width(), 14);
        assert_eq!(display.thickness(), 2);
        assert_eq!(display.gap(), 1);
    }

    #[test]
    fn test_number_is_zero_padded() {
        let display = SevenSegment::new(10, 5, 16);
        let mut surface = RecordingSurface::default();
        display.draw_number(&mut surface, 1, Color::CYAN);
        // five zeros and a one
        assert_eq!(rects(&surface), 5 * 6 + 2);
    }

    #[test]
    fn test_number_clamped_to_display() {
        let display = SevenSegment::new(0, 0, 16);
        let mut surface = RecordingSurface::default();
        display.draw_number(&mut surface, 5_000_000, Color::WHITE);
        // 999999
        assert_eq!(rects(&surface), 6 * 6);
    }

    #[test]
    fn test_digit_eight_segments_with_gaps() {
        let display = SevenSegment::new(0, 0, 16);
        let mut surface = RecordingSurface::default();
        display.draw_digit(&mut surface, 0, 8, Color::RED);
        assert_eq!(rects(&surface), 7);
        // Top segment: x from 14/5 = 2, shortened by the gap at both ends
        assert_eq!(
            surface.calls[0],
            DrawCall::FillRect {
                x: 3,
                y: 0,
                w: 11 - 2 - 2,
                h: 2,
                color: Color::RED
            }
        );
    }
}
