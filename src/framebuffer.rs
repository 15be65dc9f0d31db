//! In-memory RGB565 frame buffer.
//!
//! Stands in for the panel on a development host and in tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use std::convert::Infallible;

/// Requested buffer has more pixels than the host can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Frame buffer {}x{} is too large", width, height)]
pub struct FrameBufferTooLarge {
    /// Requested width.
    pub width: u32,
    /// Requested height.
    pub height: u32,
}

/// A `width x height` grid of pixels implementing `DrawTarget`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl FrameBuffer {
    /// Creates a black frame buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferTooLarge> {
        let len = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<Rgb565>())
            .ok_or(FrameBufferTooLarge { width, height })?;
        Ok(Self {
            size: Size::new(width, height),
            pixels: vec![Rgb565::BLACK; len],
        })
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Counts pixels of the given colour.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Off-panel pixels are dropped, as the panel does.
            if x < 0 || y < 0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            if x >= self.size.width || y >= self.size.height {
                continue;
            }
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_black() {
        let fb = FrameBuffer::new(4, 3).unwrap();
        assert_eq!(fb.count(Rgb565::BLACK), 12);
        assert_eq!(fb.pixel(4, 0), None);
    }

    #[test]
    fn test_unaddressable_size_rejected() {
        assert_eq!(
            FrameBuffer::new(u32::MAX, u32::MAX),
            Err(FrameBufferTooLarge {
                width: u32::MAX,
                height: u32::MAX,
            })
        );
    }

    #[test]
    fn test_out_of_bounds_pixels_dropped() {
        let mut fb = FrameBuffer::new(2, 2).unwrap();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(1, 1), Rgb565::RED),
            Pixel(Point::new(2, 0), Rgb565::RED),
        ])
        .unwrap();
        assert_eq!(fb.count(Rgb565::RED), 1);
        assert_eq!(fb.pixel(1, 1), Some(Rgb565::RED));
    }
}
