//! Address windows and write batching
//!
//! Bulk pixel transfers go through an address window: a rectangle of
//! display memory that the controller fills word by word, advancing its
//! cursor according to an [`AutoIncrement`] mode. Windows are given in
//! logical coordinates; [`Display::set_window`] clamps, rotates and orders
//! the corners and remaps the scan direction before programming the chip.
//!
//! Every bus access happens inside a write batch. Batches nest: chip select
//! is asserted when the outermost batch opens and released when it closes,
//! unless [`Display::hold_transaction`] keeps the bus claimed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ili9225::{Color, Display};
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
//! // Draw a grid under a single chip select assertion
//! let mut batch = match display.start_write() {
//!     Ok(batch) => batch,
//!     Err(_) => return,
//! };
//! for i in 0..10u16 {
//!     let _ = batch.draw_line(0, i * 20, 175, i * 20, Color::GRAY);
//! }
//! let _ = batch.finish();
//! ```

use core::ops::{Deref, DerefMut};

use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::{AutoIncrement, orient};

/// A physical address window ready to be programmed into the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow {
    /// Left column (inclusive)
    pub x0: u16,
    /// Top row (inclusive)
    pub y0: u16,
    /// Right column (inclusive)
    pub x1: u16,
    /// Bottom row (inclusive)
    pub y1: u16,
    /// Physical scan direction
    pub mode: AutoIncrement,
}

impl AddressWindow {
    /// Number of pixels in the window
    pub fn pixel_count(&self) -> u32 {
        (u32::from(self.x1) - u32::from(self.x0) + 1)
            * (u32::from(self.y1) - u32::from(self.y0) + 1)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Map a logical window to physical coordinates
    ///
    /// Corners are clamped to the canvas, rotated, then ordered so that
    /// `x0 <= x1` and `y0 <= y1`. The mode is remapped for the rotation.
    pub fn address_window(
        &self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        mode: AutoIncrement,
    ) -> AddressWindow {
        let (max_x, max_y) = (self.max_x, self.max_y);
        let clamp = |v: u16, max: u16| v.min(max.saturating_sub(1));
        let rotation = self.rotation;
        let (ax, ay) = orient(clamp(x0, max_x), clamp(y0, max_y), max_x, max_y, rotation);
        let (bx, by) = orient(clamp(x1, max_x), clamp(y1, max_y), max_x, max_y, rotation);
        AddressWindow {
            x0: ax.min(bx),
            y0: ay.min(by),
            x1: ax.max(bx),
            y1: ay.max(by),
            mode: mode.remap(self.rotation),
        }
    }

    /// Open an address window and select the GRAM data register
    ///
    /// Coordinates are logical and inclusive. Data words sent afterwards
    /// (for example with [`DisplayInterface::send_data16`]) fill the window
    /// following `mode` as seen in logical space.
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        mode: AutoIncrement,
    ) -> DisplayResult<I> {
        let window = self.address_window(x0, y0, x1, y1, mode);
        log::trace!(
            "window ({}, {})-({}, {}) mode {:?}",
            window.x0,
            window.y0,
            window.x1,
            window.y1,
            window.mode
        );
        let controller = self.config.controller;
        let order = self.config.color_order;
        self.batched(|d| {
            controller
                .write_window(&mut d.interface, &window, order)
                .map_err(Error::Interface)
        })
    }

    /// Restore the full-panel window
    pub fn reset_window(&mut self) -> DisplayResult<I> {
        let controller = self.config.controller;
        let panel = self.config.dimensions;
        let order = self.config.color_order;
        self.batched(|d| {
            controller
                .reset_window(&mut d.interface, panel, order)
                .map_err(Error::Interface)
        })
    }

    /// Open a write batch
    ///
    /// The bus stays claimed until the returned guard is finished or dropped
    /// (and every enclosing batch has closed). Drawing calls made through the
    /// guard join the batch instead of toggling chip select themselves.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the bus cannot be claimed.
    pub fn start_write(&mut self) -> Result<WriteBatch<'_, I>, Error<I>> {
        self.begin_batch()?;
        Ok(WriteBatch {
            display: self,
            finished: false,
        })
    }

    /// Keep the bus claimed between calls
    ///
    /// While held, closing the outermost batch leaves chip select asserted.
    /// Clearing the hold releases the bus if no batch is open.
    pub fn hold_transaction(&mut self, hold: bool) -> DisplayResult<I> {
        self.hold = hold;
        if hold {
            Ok(())
        } else {
            self.release_if_idle()
        }
    }

    /// Current batch nesting depth
    pub fn write_depth(&self) -> usize {
        self.write_depth
    }

    pub(crate) fn begin_batch(&mut self) -> DisplayResult<I> {
        if !self.bus_open {
            self.interface
                .begin_transaction()
                .map_err(Error::Interface)?;
            self.bus_open = true;
        }
        self.write_depth += 1;
        Ok(())
    }

    pub(crate) fn end_batch(&mut self) -> DisplayResult<I> {
        self.write_depth = self.write_depth.saturating_sub(1);
        self.release_if_idle()
    }

    fn release_if_idle(&mut self) -> DisplayResult<I> {
        if self.write_depth == 0 && !self.hold && self.bus_open {
            self.bus_open = false;
            self.interface.end_transaction().map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Run `f` inside a write batch
    ///
    /// The batch is closed on every path. The first error wins.
    pub(crate) fn batched<T, F>(&mut self, f: F) -> Result<T, Error<I>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<I>>,
    {
        self.begin_batch()?;
        let result = f(self);
        let closed = self.end_batch();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Run `f` inside a batch with the transaction hold set
    ///
    /// The previous hold state is restored afterwards.
    pub(crate) fn held<T, F>(&mut self, f: F) -> Result<T, Error<I>>
    where
        F: FnOnce(&mut Self) -> Result<T, Error<I>>,
    {
        self.batched(|d| {
            let previous = d.hold;
            d.hold = true;
            let result = f(d);
            d.hold = previous;
            result
        })
    }
}

/// An open write batch
///
/// Dereferences to the [`Display`], so every drawing method is available on
/// the guard. Close it with [`WriteBatch::finish`] to observe release
/// errors; dropping it also closes the batch and logs any failure.
pub struct WriteBatch<'a, I>
where
    I: DisplayInterface,
{
    display: &'a mut Display<I>,
    finished: bool,
}

impl<I> WriteBatch<'_, I>
where
    I: DisplayInterface,
{
    /// Close the batch
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if releasing the bus fails.
    pub fn finish(mut self) -> DisplayResult<I> {
        self.finished = true;
        self.display.end_batch()
    }
}

impl<I> Deref for WriteBatch<'_, I>
where
    I: DisplayInterface,
{
    type Target = Display<I>;

    fn deref(&self) -> &Self::Target {
        self.display
    }
}

impl<I> DerefMut for WriteBatch<'_, I>
where
    I: DisplayInterface,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.display
    }
}

impl<I> Drop for WriteBatch<'_, I>
where
    I: DisplayInterface,
{
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(Error::Interface(err)) = self.display.end_batch() {
            log::warn!("failed to release bus after write batch: {err:?}");
        }
    }
}
