//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! font construction ([`FontError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`FontError`] - Malformed font blobs
//! - [`InvalidOrientation`] - Rotation or auto-increment value out of range
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! None of these are retried by the driver. An operation that fails closes any
//! bus transaction it opened before returning.
//!
//! ## Example
//!
//! ```
//! use ili9225::{Builder, Controller, Dimensions, BuilderError};
//!
//! // Larger than the ILI9225 panel
//! let result = Builder::new()
//!     .controller(Controller::Ili9225)
//!     .dimensions(Dimensions { width: 240, height: 320 })
//!     .build();
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Zero-sized
//! assert!(Dimensions::new(0, 220).is_err());
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// Board-level failures raised by the interface (an unsupported pin
/// configuration, a bus fault) arrive unchanged in [`Error::Interface`].
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Text was drawn before a font of the matching kind was selected
    FontNotSet,
    /// The active font has no glyph for this character
    GlyphNotFound(char),
    /// Rotation outside 0..=3 or auto-increment mode outside 0..=7
    InvalidOrientation {
        /// The rejected value
        value: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::FontNotSet => write!(f, "No font selected"),
            Self::GlyphNotFound(ch) => write!(f, "Glyph not found for {ch:?}"),
            Self::InvalidOrientation { value } => {
                write!(f, "Invalid orientation value: {value}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<InvalidOrientation> for Error<I> {
    fn from(err: InvalidOrientation) -> Self {
        Self::InvalidOrientation { value: err.value }
    }
}

/// A rotation or auto-increment mode outside its defined domain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidOrientation {
    /// The rejected value
    pub value: u8,
}

impl core::fmt::Display for InvalidOrientation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid orientation value: {}", self.value)
    }
}

impl core::error::Error for InvalidOrientation {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// Both sides must be non-zero and fit the controller's native panel.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (must be non-zero and fit the controller)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors found while validating a font blob
#[derive(Debug, PartialEq, Eq)]
pub enum FontError {
    /// A standard font needs a 4-byte header
    HeaderTooShort {
        /// Bytes provided
        provided: usize,
    },
    /// The blob ends before its last glyph
    DataTooShort {
        /// Bytes needed for every glyph the header announces
        required: usize,
        /// Bytes provided
        provided: usize,
    },
    /// A GFX glyph table whose length disagrees with its character range
    GlyphCountMismatch {
        /// `last - first + 1`
        expected: usize,
        /// Glyphs provided
        provided: usize,
    },
    /// A GFX glyph whose bitmap runs past the end of the bitmap table
    BitmapOutOfRange {
        /// Character code of the offending glyph
        code: u16,
    },
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::HeaderTooShort { provided } => {
                write!(f, "Font header too short: {provided} bytes")
            }
            Self::DataTooShort { required, provided } => write!(
                f,
                "Font data too short: required {required} bytes, provided {provided}"
            ),
            Self::GlyphCountMismatch { expected, provided } => write!(
                f,
                "Glyph table mismatch: expected {expected} glyphs, provided {provided}"
            ),
            Self::BitmapOutOfRange { code } => {
                write!(f, "Glyph {code:#04x} bitmap out of range")
            }
        }
    }
}

impl core::error::Error for FontError {}
