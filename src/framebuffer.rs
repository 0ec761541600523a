//! In-memory RGB565 frame buffer
//!
//! Stands in for the panel's bitmap: the transport collaborator copies
//! [`FrameBuffer::to_be_bytes`] to the display on `present`. Rasterizing is
//! delegated to `embedded-graphics` through its `DrawTarget` trait.

use core::convert::Infallible;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::color::Color;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::Surface;

/// Advance of the built-in font, in pixels
pub const GLYPH_WIDTH: i32 = 6;
pub const GLYPH_HEIGHT: i32 = 10;

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.raw()))
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(RawU16::from(color).into_inner())
    }
}

/// Fixed 240x135 bitmap, row-major
pub struct FrameBuffer {
    pixels: Vec<u16>,
    frames_presented: u64,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![0; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            frames_presented: 0,
        }
    }

    #[inline]
    fn index(x: i32, y: i32) -> Option<usize> {
        if (0..SCREEN_WIDTH).contains(&x) && (0..SCREEN_HEIGHT).contains(&y) {
            Some((y * SCREEN_WIDTH + x) as usize)
        } else {
            None
        }
    }

    /// Read back a pixel (None outside the grid)
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        Self::index(x, y).map(|i| Color(self.pixels[i]))
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Number of `present` calls so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Bitmap in the byte order the ST7789 expects over SPI
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
    }

    /// Binary PPM (P6) image of the bitmap, channels widened to 8 bits
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", SCREEN_WIDTH, SCREEN_HEIGHT).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for &raw in &self.pixels {
            let (r, g, b) = Color(raw).channels();
            out.push(((r << 3) | (r >> 2)) as u8);
            out.push(((g << 2) | (g >> 4)) as u8);
            out.push(((b << 3) | (b >> 2)) as u8);
        }
        out
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point.x, point.y) {
                self.pixels[i] = RawU16::from(color).into_inner();
            }
        }
        Ok(())
    }
}

impl Surface for FrameBuffer {
    fn fill_all(&mut self, color: Color) {
        self.pixels.fill(color.raw());
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(self)
            .ok();
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(self)
            .ok();
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(self)
            .ok();
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = Self::index(x, y) {
            self.pixels[i] = color.raw();
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let style = MonoTextStyle::new(&FONT_6X10, color.into());
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(self)
            .ok();
    }

    fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        Circle::with_center(Point::new(x, y), (2 * r + 1) as u32)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(self)
            .ok();
    }

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        Circle::with_center(Point::new(x, y), (2 * r + 1) as u32)
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(self)
            .ok();
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
