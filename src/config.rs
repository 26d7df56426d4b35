//! Display configuration types and builder

pub use crate::error::BuilderError;

use crate::color::Color;
use crate::controller::Controller;
use crate::rotation::Rotation;

/// Physical panel dimensions in native (portrait) orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    /// Whether the panel fits the controller is checked by [`Builder::build`].
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }
}

/// Order of the color filters on the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red in the high bits
    Rgb,
    /// Blue in the high bits; both supported modules ship this way
    #[default]
    Bgr,
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Controller register dialect
    pub controller: Controller,
    /// Physical panel dimensions
    pub dimensions: Dimensions,
    /// Rotation applied by `begin`
    pub rotation: Rotation,
    /// Background color used by text rendering
    pub background: Color,
    /// Panel color filter order
    pub color_order: ColorOrder,
}

impl Config {
    /// Logical dimensions for the configured rotation
    pub fn rotated_dimensions(&self) -> Dimensions {
        let (width, height) = self
            .rotation
            .extents(self.dimensions.width, self.dimensions.height);
        Dimensions { width, height }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ili9225::{Builder, Color, Controller, Rotation};
///
/// let config = match Builder::new()
///     .controller(Controller::Ili9225)
///     .rotation(Rotation::Rotate90)
///     .background(Color::NAVY)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dimensions.width, 176);
/// assert_eq!(config.rotated_dimensions().width, 220);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Controller register dialect
    controller: Controller,
    /// Panel dimensions; the controller's native size when unset
    dimensions: Option<Dimensions>,
    /// Rotation applied by `begin`
    rotation: Rotation,
    /// Background color used by text rendering
    background: Color,
    /// Panel color filter order
    color_order: ColorOrder,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controller
    pub fn controller(mut self, controller: Controller) -> Self {
        self.controller = controller;
        self
    }

    /// Set panel dimensions
    ///
    /// Defaults to the controller's native size.
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the text background color
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the panel color filter order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if a side is zero or larger
    /// than the controller's native panel.
    pub fn build(self) -> Result<Config, BuilderError> {
        let native = self.controller.native_size();
        let dimensions = self.dimensions.unwrap_or(native);
        if dimensions.width == 0
            || dimensions.height == 0
            || dimensions.width > native.width
            || dimensions.height > native.height
        {
            return Err(BuilderError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        Ok(Config {
            controller: self.controller,
            dimensions,
            rotation: self.rotation,
            background: self.background,
            color_order: self.color_order,
        })
    }
}
