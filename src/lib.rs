//! ILI9225 / ILI9341 TFT LCD Driver
//!
//! A driver for small RGB565 TFT panels on the ILI9225 (176x220) and ILI9341
//! (240x320) controllers over 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Four display rotations with logical coordinates
//! - Address-window streaming for rectangles, text cells and images
//! - Re-entrant write batching to keep chip select asserted
//! - Fixed-table and GFX bitmap fonts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use ili9225::{Builder, Color, Display, Interface, Rotation, StandardFont};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # static FONT: [u8; 4] = [6, 8, 0x20, 0];
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let cs = MockPin;
//! # let led = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, cs, Some(led));
//! let config = match Builder::new().rotation(Rotation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.begin(&mut delay);
//! let _ = display.fill_rectangle(10, 10, 60, 40, Color::BLUE);
//!
//! if let Ok(font) = StandardFont::new(&FONT, false) {
//!     display.set_font(font);
//!     let _ = display.draw_text(10, 50, "Hello", Color::WHITE);
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 color type and conversions
pub mod color;
/// ILI9225 and ILI9341 register definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Controller variants and their init sequences
pub mod controller;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Font assets
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Shape rasterization
pub mod primitives;
/// Coordinate rotation utilities
pub mod rotation;
/// Text rendering
pub mod text;
/// Address windows and write batching
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use color::{Color, pack_rgb565, rgb565_to_bgr565, unpack_rgb565};
pub use config::{Builder, ColorOrder, Config, Dimensions};
pub use controller::Controller;
pub use display::Display;
pub use error::{BuilderError, Error, FontError, InvalidOrientation};
pub use font::{GfxFont, Glyph, StandardFont};
pub use interface::{DisplayInterface, Interface, InterfaceError};
pub use primitives::Bitmap;
pub use rotation::{AutoIncrement, Rotation};
pub use window::{AddressWindow, WriteBatch};
