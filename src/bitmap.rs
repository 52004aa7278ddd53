//! Owned pixel buffer used as an offscreen render target.
//!
//! The background cache pre-renders each display mode into a [`Bitmap`] and
//! blits it back per frame. `Bitmap` implements [`DrawTarget`] so the same
//! generic drawing code renders to a cached bitmap and to the live display,
//! and blitting goes through [`DrawTarget::fill_contiguous`] so the whole
//! row-major buffer transfers in one call.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

use crate::colors::BLACK;

/// A fixed-size Rgb565 pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Bitmap {
    /// Create a bitmap filled with the given color.
    pub fn new(size: Size, fill: Rgb565) -> Self {
        let len = size.width as usize * size.height as usize;
        Self {
            size,
            pixels: vec![fill; len],
        }
    }

    /// Create a black bitmap (the raw-background fallback color).
    pub fn black(size: Size) -> Self {
        Self::new(size, BLACK)
    }

    /// Read a pixel. Returns `None` outside the bitmap bounds.
    pub fn get_pixel(&self, point: Point) -> Option<Rgb565> {
        self.index_of(point).map(|idx| self.pixels[idx])
    }

    /// The raw row-major pixel data.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Blit this bitmap onto `target` at the origin.
    pub fn draw_to<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) {
        let area = Rectangle::new(Point::zero(), self.size);
        target.fill_contiguous(&area, self.pixels.iter().copied()).ok();
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y * self.size.width + x) as usize)
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Bitmap {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Out-of-bounds pixels are clipped, not errors.
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index_of(point) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
