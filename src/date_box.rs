//! The day-of-month box near six o'clock.
//!
//! Drawn as an outlined box: a white outer rectangle, a black inner
//! rectangle inset by 1px on every side, and the numeral centered inside.
//! Baked into the cached backgrounds, and drawn live on the charging path.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use heapless::String;

use crate::config::{DATE_BOX_BOTTOM_OFFSET, DATE_BOX_HALF_HEIGHT, DATE_BOX_HALF_WIDTH};
use crate::geometry::Vec2;
use crate::paint::PaintBucket;
use crate::styles::{CENTERED_MIDDLE, DATE_FONT};

/// Draws the date box at a surface-dependent position.
#[derive(Default)]
pub struct DatePainter {
    center: Vec2,
}

impl DatePainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reposition the box for a new surface size: horizontally centered,
    /// fixed offset up from the bottom edge.
    pub fn on_surface_change(&mut self, width: u32, height: u32) {
        self.center = Vec2::new(width as f32 / 2.0, height as f32 - DATE_BOX_BOTTOM_OFFSET);
    }

    /// Draw the box and the day-of-month numeral.
    pub fn draw_date<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, bucket: &PaintBucket, date: i32) {
        let center = self.center.to_point();
        let top_left = center - Point::new(DATE_BOX_HALF_WIDTH, DATE_BOX_HALF_HEIGHT);
        let size = Size::new(2 * DATE_BOX_HALF_WIDTH as u32, 2 * DATE_BOX_HALF_HEIGHT as u32);

        // Outer box, then the inner fill inset by 1px, leaving the outline.
        Rectangle::new(top_left, size)
            .into_styled(bucket.date_box.shape_style())
            .draw(target)
            .ok();
        Rectangle::new(top_left + Point::new(1, 1), size - Size::new(2, 2))
            .into_styled(bucket.date_box_inset.shape_style())
            .draw(target)
            .ok();

        let mut numeral: String<12> = String::new();
        let _ = write!(numeral, "{date}");
        let text_style = MonoTextStyle::new(DATE_FONT, bucket.date_text.color());
        Text::with_text_style(&numeral, center, text_style, CENTERED_MIDDLE)
            .draw(target)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::colors::{BLACK, GREEN, RED, WHITE};

    fn painter_for(width: u32, height: u32) -> DatePainter {
        let mut painter = DatePainter::new();
        painter.on_surface_change(width, height);
        painter
    }

    #[test]
    fn test_position_tracks_surface() {
        let painter = painter_for(400, 400);
        assert_eq!(painter.center, Vec2::new(200.0, 350.0));

        let painter = painter_for(200, 300);
        assert_eq!(painter.center, Vec2::new(100.0, 250.0));
    }

    #[test]
    fn test_draws_outlined_box() {
        let painter = painter_for(100, 100);
        let bucket = PaintBucket::new(WHITE, RED, GREEN);
        let mut surface = Bitmap::black(Size::new(100, 100));

        painter.draw_date(&mut surface, &bucket, 7);

        // Box center is (50, 50): outer rect spans x 30..=69, y 32..=67.
        // The border pixel is white, one pixel inside is black fill.
        assert_eq!(surface.get_pixel(Point::new(30, 50)), Some(WHITE));
        assert_eq!(surface.get_pixel(Point::new(31, 40)), Some(BLACK));
        // Outside the box stays untouched.
        assert_eq!(surface.get_pixel(Point::new(20, 50)), Some(BLACK));
    }

    #[test]
    fn test_numeral_rendered_inside_box() {
        let painter = painter_for(100, 100);
        let bucket = PaintBucket::new(WHITE, RED, GREEN);
        let mut surface = Bitmap::black(Size::new(100, 100));

        painter.draw_date(&mut surface, &bucket, 8);

        // Some white glyph pixels must land inside the inner box region
        // (strictly inside the 1px outline).
        let mut glyph_pixels = 0;
        for y in 34..66 {
            for x in 32..68 {
                if surface.get_pixel(Point::new(x, y)) == Some(WHITE) {
                    glyph_pixels += 1;
                }
            }
        }
        assert!(glyph_pixels > 10, "expected the numeral to paint pixels inside the box");
    }
}
