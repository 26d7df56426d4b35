//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`Rgb565`] colors, so any
//! embedded-graphics drawable can be rendered straight to the panel. There is
//! no frame buffer: pixels go to the controller as they are produced.
//!
//! Solid fills and contiguous areas that fit on the canvas are streamed
//! through a single address window; everything else falls back to
//! per-pixel writes, clipped to the current logical extent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ili9225::Display;
//! # use ili9225::{Builder, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::SpiBus;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _r: &mut [u8], _w: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin, None::<MockPin>);
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(interface, config);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, ILI9225!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::YELLOW),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::AutoIncrement;

/// Convert an on-canvas rectangle to inclusive `u16` corners
fn corners(area: &Rectangle) -> Option<(u16, u16, u16, u16)> {
    let bottom_right = area.bottom_right()?;
    Some((
        u16::try_from(area.top_left.x).ok()?,
        u16::try_from(area.top_left.y).ok()?,
        u16::try_from(bottom_right.x).ok()?,
        u16::try_from(bottom_right.y).ok()?,
    ))
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    fn canvas(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }

    /// Stream colors row by row into an on-canvas window
    fn stream_area<C>(&mut self, area: (u16, u16, u16, u16), colors: C) -> DisplayResult<I>
    where
        C: IntoIterator<Item = Rgb565>,
    {
        let (x0, y0, x1, y1) = area;
        let count = (usize::from(x1 - x0) + 1) * (usize::from(y1 - y0) + 1);
        self.batched(|d| {
            d.set_window(x0, y0, x1, y1, AutoIncrement::L2rTopDown)?;
            for color in colors.into_iter().take(count) {
                d.interface
                    .send_data16(Color::from(color).raw())
                    .map_err(Error::Interface)?;
            }
            d.reset_window()
        })
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.batched(|d| {
            for Pixel(Point { x, y }, color) in pixels {
                let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                    continue;
                };
                d.draw_pixel(x, y, Color::from(color))?;
            }
            Ok(())
        })
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.canvas());
        match corners(area) {
            Some(corners) if visible == *area => self.stream_area(corners, colors),
            _ => self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            ),
        }
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.canvas());
        let Some((x0, y0, x1, y1)) = corners(&visible) else {
            return Ok(());
        };
        self.fill_rectangle(x0, y0, x1, y1, Color::from(color))
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let (width, height) = self.display_extent();
        Size::new(u32::from(width), u32::from(height))
    }
}
