//! The display collaborator.
//!
//! [`Display`] is the small set of drawing primitives the game needs from a
//! panel driver. [`GraphicsDisplay`] provides it for anything that speaks
//! `embedded-graphics`, which covers most SPI panel drivers as well as the
//! in-memory [`FrameBuffer`](crate::FrameBuffer).

use crate::Color565;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

/// Width of one text glyph in pixels.
pub const GLYPH_WIDTH: u32 = 8;
/// Height of one text glyph in pixels.
pub const GLYPH_HEIGHT: u32 = 13;

/// Drawing primitives consumed by the renderer.
///
/// Coordinates are panel pixels, origin top-left. Text is drawn with its top
/// edge at `y` using [`GLYPH_WIDTH`] x [`GLYPH_HEIGHT`] glyphs.
pub trait Display {
    /// Error reported by the underlying driver.
    type Error: std::fmt::Debug;

    /// Panel width in pixels.
    fn width(&self) -> u32;

    /// Panel height in pixels.
    fn height(&self) -> u32;

    /// Draws a horizontal line of `length` pixels starting at `(x, y)`.
    fn draw_hline(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    /// Draws a vertical line of `length` pixels starting at `(x, y)`.
    fn draw_vline(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    /// Draws a line between two points, both inclusive.
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    /// Draws a circle outline.
    fn draw_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        color: Color565,
    ) -> Result<(), Self::Error>;

    /// Draws text, filling glyph cells with `background` when given.
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        foreground: Color565,
        background: Option<Color565>,
    ) -> Result<(), Self::Error>;

    /// Blanks the whole panel.
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// [`Display`] over an `embedded-graphics` draw target.
#[derive(Debug)]
pub struct GraphicsDisplay<D> {
    target: D,
}

impl<D> GraphicsDisplay<D> {
    /// Wraps a draw target.
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Returns the wrapped target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Unwraps the draw target.
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn stroke_line(&mut self, start: Point, end: Point, color: Color565) -> Result<(), D::Error> {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::from(color), 1))
            .draw(&mut self.target)
    }
}

impl<D> Display for GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
    D::Error: std::fmt::Debug,
{
    type Error = D::Error;

    fn width(&self) -> u32 {
        self.target.size().width
    }

    fn height(&self) -> u32 {
        self.target.size().height
    }

    fn draw_hline(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        if length == 0 {
            return Ok(());
        }
        self.stroke_line(Point::new(x, y), Point::new(x + length as i32 - 1, y), color)
    }

    fn draw_vline(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        if length == 0 {
            return Ok(());
        }
        self.stroke_line(Point::new(x, y), Point::new(x, y + length as i32 - 1), color)
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        self.stroke_line(Point::new(x0, y0), Point::new(x1, y1), color)
    }

    fn draw_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        color: Color565,
    ) -> Result<(), Self::Error> {
        Circle::with_center(Point::new(cx, cy), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::from(color), 1))
            .draw(&mut self.target)
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        foreground: Color565,
        background: Option<Color565>,
    ) -> Result<(), Self::Error> {
        let mut style = MonoTextStyleBuilder::new()
            .font(&FONT_8X13)
            .text_color(Rgb565::from(foreground));
        if let Some(background) = background {
            style = style.background_color(Rgb565::from(background));
        }
        Text::with_baseline(text, Point::new(x, y), style.build(), Baseline::Top)
            .draw(&mut self.target)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.target.clear(Rgb565::BLACK)
    }
}
