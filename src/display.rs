//! Core display operations
//!
//! [`Display`] owns the interface and the session state: rotation, logical
//! extents, background color, batch depth and the active fonts. Drawing
//! primitives live in [`primitives`](crate::primitives), text rendering in
//! [`text`](crate::text) and window handling in [`window`](crate::window);
//! they all extend this type.
//!
//! `Display` is not meant to be shared between threads or interrupt
//! contexts without external synchronization.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::font::{GfxFont, StandardFont};
use crate::interface::DisplayInterface;
use crate::rotation::{Rotation, orient};

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Display driver for ILI9225 and ILI9341 panels
///
/// Coordinates passed to drawing methods are logical: `(0, 0)` is the top
/// left corner for the current [`Rotation`]. Anything outside the canvas is
/// clipped.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    pub(crate) config: Config,
    /// Active rotation
    pub(crate) rotation: Rotation,
    /// Logical width
    pub(crate) max_x: u16,
    /// Logical height
    pub(crate) max_y: u16,
    /// Background for text cells
    pub(crate) background: Color,
    /// Open write batches
    pub(crate) write_depth: usize,
    /// Chip select asserted
    pub(crate) bus_open: bool,
    /// Keep the bus claimed when the outermost batch closes
    pub(crate) hold: bool,
    /// Backlight state and last requested brightness
    pub(crate) backlight: (bool, u8),
    /// Whether the panel is powered and scanning
    pub(crate) is_display_on: bool,
    /// Active standard font
    pub(crate) font: Option<StandardFont<'static>>,
    /// Active GFX font
    pub(crate) gfx_font: Option<GfxFont<'static>>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`Display::begin`].
    pub fn new(interface: I, config: Config) -> Self {
        let (max_x, max_y) = config
            .rotation
            .extents(config.dimensions.width, config.dimensions.height);
        Self {
            interface,
            rotation: config.rotation,
            max_x,
            max_y,
            background: config.background,
            write_depth: 0,
            bus_open: false,
            hold: false,
            backlight: (false, u8::MAX),
            is_display_on: false,
            font: None,
            gfx_font: None,
            config,
        }
    }

    /// Reset and initialize the controller, then clear the screen
    ///
    /// Runs the hardware reset pulse, replays the controller's power-on
    /// sequence, turns the backlight on, applies the configured rotation and
    /// clears to black. Session state (batches, hold flag, rotation,
    /// background) is reset; selected fonts are kept.
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "begin: {:?} {:?}",
            self.config.controller,
            self.config.dimensions
        );
        self.write_depth = 0;
        self.bus_open = false;
        self.hold = false;
        self.background = self.config.background;

        self.interface.reset(delay);
        let controller = self.config.controller;
        let order = self.config.color_order;
        self.batched(|d| {
            controller
                .init(&mut d.interface, delay, order)
                .map_err(Error::Interface)
        })?;
        self.is_display_on = true;

        self.set_backlight(true, self.backlight.1)?;
        self.set_orientation(self.config.rotation);
        self.clear()
    }

    /// Fill the whole panel with black
    ///
    /// The fill runs in native orientation; the active rotation is restored
    /// afterwards.
    pub fn clear(&mut self) -> DisplayResult<I> {
        let rotation = self.rotation;
        self.apply_rotation(Rotation::Rotate0);
        let (max_x, max_y) = (self.max_x, self.max_y);
        let result = self.fill_rectangle(
            0,
            0,
            max_x.saturating_sub(1),
            max_y.saturating_sub(1),
            Color::BLACK,
        );
        self.apply_rotation(rotation);
        result
    }

    /// Power the panel on or off
    pub fn set_display<D: DelayNs>(&mut self, on: bool, delay: &mut D) -> DisplayResult<I> {
        log::debug!("display {}", if on { "on" } else { "off" });
        let controller = self.config.controller;
        self.batched(|d| {
            if on {
                controller.display_on(&mut d.interface, delay)
            } else {
                controller.display_off(&mut d.interface, delay)
            }
            .map_err(Error::Interface)
        })?;
        self.is_display_on = on;
        Ok(())
    }

    /// Switch the backlight and record the requested brightness
    pub fn set_backlight(&mut self, on: bool, brightness: u8) -> DisplayResult<I> {
        self.interface
            .set_backlight(on, brightness)
            .map_err(Error::Interface)?;
        self.backlight = (on, brightness);
        Ok(())
    }

    /// Set the rotation used for all later drawing
    ///
    /// Odd rotations swap the logical width and height.
    pub fn set_orientation(&mut self, rotation: Rotation) {
        log::debug!("orientation {rotation:?}");
        self.apply_rotation(rotation);
    }

    /// Set the rotation from a raw quarter-turn count
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOrientation` for values above 3.
    pub fn set_orientation_index(&mut self, index: u8) -> DisplayResult<I> {
        let rotation = Rotation::try_from(index)?;
        self.set_orientation(rotation);
        Ok(())
    }

    fn apply_rotation(&mut self, rotation: Rotation) {
        let Dimensions { width, height } = self.config.dimensions;
        let (max_x, max_y) = rotation.extents(width, height);
        self.rotation = rotation;
        self.max_x = max_x;
        self.max_y = max_y;
    }

    /// Active rotation
    pub fn orientation(&self) -> Rotation {
        self.rotation
    }

    /// Logical `(width, height)` for the active rotation
    pub fn display_extent(&self) -> (u16, u16) {
        (self.max_x, self.max_y)
    }

    /// Set the background color used by standard-font text cells
    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    /// Background color used by standard-font text cells
    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Whether the panel is powered on
    pub fn is_display_on(&self) -> bool {
        self.is_display_on
    }

    /// Backlight state and last requested brightness
    pub fn backlight(&self) -> (bool, u8) {
        self.backlight
    }

    /// Draw a single pixel
    ///
    /// Pixels outside the canvas are ignored.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        if x >= self.max_x || y >= self.max_y {
            return Ok(());
        }
        let (px, py) = orient(x, y, self.max_x, self.max_y, self.rotation);
        let controller = self.config.controller;
        self.batched(|d| {
            controller
                .write_pixel(&mut d.interface, px, py, color.raw())
                .map_err(Error::Interface)
        })
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the interface
    ///
    /// Useful for streaming pixel data after [`Display::set_window`].
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
