//! `embedded-graphics` backend
//!
//! Splits any monochrome draw target into three equal horizontal bands
//! and centers each row's text in its band. The instruction uses a larger
//! font than the two countdowns.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::backend::{DisplayBackend, DisplayError};
use crate::screen::{Row, SCREEN_ROWS};

/// Font for a row
fn font_for(row: Row) -> &'static MonoFont<'static> {
    match row {
        Row::Instruction => &FONT_10X20,
        Row::PhaseTimer | Row::TotalTimer => &FONT_9X18_BOLD,
    }
}

/// Draws watch-face rows onto a `DrawTarget`
pub struct GraphicsBackend<D> {
    target: D,
}

impl<D> GraphicsBackend<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Access the draw target (e.g. to flush a framebuffer)
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Unwrap the draw target
    pub fn into_inner(self) -> D {
        self.target
    }

    /// Pixel band occupied by a row
    pub fn row_area(&self, row: Row) -> Rectangle {
        let bounds = self.target.bounding_box();
        let band = bounds.size.height / SCREEN_ROWS as u32;
        let top = bounds.top_left.y + (band * row.index() as u32) as i32;
        Rectangle::new(
            Point::new(bounds.top_left.x, top),
            Size::new(bounds.size.width, band),
        )
    }
}

impl<D> DisplayBackend for GraphicsBackend<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn clear_row(&mut self, row: Row) -> Result<(), DisplayError> {
        let area = self.row_area(row);
        self.target
            .fill_solid(&area, BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_row(&mut self, row: Row, text: &str) -> Result<(), DisplayError> {
        let area = self.row_area(row);
        let character_style = MonoTextStyle::new(font_for(row), BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(text, area.center(), character_style, text_style)
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        !self.target.bounding_box().is_zero_sized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::Pixel;

    /// 128x64 target that counts lit pixels per band
    struct CountingTarget {
        lit: [u32; SCREEN_ROWS],
        cleared: u32,
    }

    impl CountingTarget {
        fn new() -> Self {
            Self {
                lit: [0; SCREEN_ROWS],
                cleared: 0,
            }
        }
    }

    impl OriginDimensions for CountingTarget {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for CountingTarget {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.y < 0 || point.y >= 63 {
                    continue;
                }
                let band = (point.y / 21) as usize;
                match color {
                    BinaryColor::On => self.lit[band] += 1,
                    BinaryColor::Off => self.cleared += 1,
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_row_areas_stack() {
        let backend = GraphicsBackend::new(CountingTarget::new());
        assert_eq!(
            backend.row_area(Row::Instruction),
            Rectangle::new(Point::new(0, 0), Size::new(128, 21))
        );
        assert_eq!(backend.row_area(Row::PhaseTimer).top_left, Point::new(0, 21));
        assert_eq!(backend.row_area(Row::TotalTimer).top_left, Point::new(0, 42));
    }

    #[test]
    fn test_text_lands_in_its_band() {
        let mut backend = GraphicsBackend::new(CountingTarget::new());
        backend.draw_row(Row::PhaseTimer, "11").unwrap();

        let target = backend.into_inner();
        assert_eq!(target.lit[0], 0);
        assert!(target.lit[1] > 0);
        assert_eq!(target.lit[2], 0);
    }

    #[test]
    fn test_clear_row_blanks_band() {
        let mut backend = GraphicsBackend::new(CountingTarget::new());
        backend.clear_row(Row::Instruction).unwrap();

        let target = backend.into_inner();
        assert_eq!(target.cleared, 128 * 21);
        assert_eq!(target.lit, [0; SCREEN_ROWS]);
    }

    #[test]
    fn test_clear_blanks_whole_panel() {
        let mut backend = GraphicsBackend::new(CountingTarget::new());
        backend.clear().unwrap();

        let target = backend.into_inner();
        // Bottom pixel row sits outside the three 21-pixel bands
        assert_eq!(target.cleared, 128 * 63);
        assert_eq!(target.lit, [0; SCREEN_ROWS]);
    }

    #[test]
    fn test_ready() {
        let backend = GraphicsBackend::new(CountingTarget::new());
        assert!(backend.is_ready());
    }
}
