//! Drawing surface contract
//!
//! The display transport lives outside the core. Everything the simulation
//! draws goes through this trait, in integer coordinates on the fixed
//! 240x135 grid. Implementations clip anything outside the grid.

use crate::color::Color;

pub trait Surface {
    /// Fill the whole bitmap
    fn fill_all(&mut self, color: Color);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// One-pixel rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color);

    /// Circle outline centered on (x, y)
    fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color);

    /// Filled circle centered on (x, y)
    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color);

    /// Flush the bitmap to the physical output
    fn present(&mut self);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A draw call captured by [`RecordingSurface`]
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        FillAll(Color),
        FillRect { x: i32, y: i32, w: i32, h: i32, color: Color },
        Rect { x: i32, y: i32, w: i32, h: i32, color: Color },
        Line { x0: i32, y0: i32, x1: i32, y1: i32, color: Color },
        Pixel { x: i32, y: i32, color: Color },
        Text { text: String, x: i32, y: i32, color: Color },
        Circle { x: i32, y: i32, r: i32, color: Color },
        FilledCircle { x: i32, y: i32, r: i32, color: Color },
    }

    /// Surface that records every call instead of rasterizing
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
        pub presented: u32,
    }

    impl RecordingSurface {
        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }
    }

    impl Surface for RecordingSurface {
        fn fill_all(&mut self, color: Color) {
            self.calls.push(DrawCall::FillAll(color));
        }

        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
            self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        }

        fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
            self.calls.push(DrawCall::Rect { x, y, w, h, color });
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
            self.calls.push(DrawCall::Line { x0, y0, x1, y1, color });
        }

        fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
            self.calls.push(DrawCall::Pixel { x, y, color });
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                x,
                y,
                color,
            });
        }

        fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
            self.calls.push(DrawCall::Circle { x, y, r, color });
        }

        fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
            self.calls.push(DrawCall::FilledCircle { x, y, r, color });
        }

        fn present(&mut self) {
            self.presented += 1;
        }
    }
}
