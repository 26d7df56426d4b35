//! RGB565 color codec
//!
//! Both supported controllers take one 16-bit word per pixel in RGB565 layout:
//!
//! | Bits    | Field |
//! |---------|-------|
//! | 15..=11 | Red   |
//! | 10..=5  | Green |
//! | 4..=0   | Blue  |
//!
//! Panels wired for BGR order expect red and blue swapped; see
//! [`rgb565_to_bgr565`].
//!
//! Packing truncates 8-bit channels, so an 8-bit round trip is lossy. Unpacking
//! expands each field back to 8 bits with rounding.
//!
//! ## Example
//!
//! ```
//! use ili9225::color::{pack_rgb565, rgb565_to_bgr565, unpack_rgb565};
//! use ili9225::Color;
//!
//! assert_eq!(pack_rgb565(255, 0, 0), 0xF800);
//! assert_eq!(rgb565_to_bgr565(0xF800), 0x001F);
//! assert_eq!(unpack_rgb565(0xFFFF), (255, 255, 255));
//!
//! let orange = Color::from_rgb(255, 165, 0);
//! assert_eq!(orange, Color::ORANGE);
//! ```

const RED_MASK: u16 = 0xF800;
const GREEN_MASK: u16 = 0x07E0;
const BLUE_MASK: u16 = 0x001F;

/// Pack 8-bit red, green and blue channels into an RGB565 word
///
/// The low bits of each channel are dropped (3 for red and blue, 2 for green).
pub const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Expand an RGB565 word into 8-bit red, green and blue channels
///
/// Each field is scaled to the full 0..=255 range with rounding, so
/// `0x001F` unpacks to a blue of exactly 255.
pub const fn unpack_rgb565(color: u16) -> (u8, u8, u8) {
    let r5 = ((color & RED_MASK) >> 11) as u32;
    let g6 = ((color & GREEN_MASK) >> 5) as u32;
    let b5 = (color & BLUE_MASK) as u32;
    (
        ((r5 * 255 + 15) / 31) as u8,
        ((g6 * 255 + 31) / 63) as u8,
        ((b5 * 255 + 15) / 31) as u8,
    )
}

/// Swap the red and blue fields of an RGB565 word
///
/// Green is left untouched. Applying the swap twice returns the input.
pub const fn rgb565_to_bgr565(color: u16) -> u16 {
    ((color & BLUE_MASK) << 11) | (color & GREEN_MASK) | ((color & RED_MASK) >> 11)
}

/// A 16-bit RGB565 pixel value
///
/// This is the word streamed to the controller's GRAM data register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(u16);

impl Color {
    /// Black
    pub const BLACK: Self = Self(0x0000);
    /// White
    pub const WHITE: Self = Self(0xFFFF);
    /// Blue
    pub const BLUE: Self = Self(0x001F);
    /// Green
    pub const GREEN: Self = Self(0x07E0);
    /// Red
    pub const RED: Self = Self(0xF800);
    /// Navy
    pub const NAVY: Self = Self(0x000F);
    /// Dark blue
    pub const DARK_BLUE: Self = Self(0x0011);
    /// Dark green
    pub const DARK_GREEN: Self = Self(0x03E0);
    /// Dark cyan
    pub const DARK_CYAN: Self = Self(0x03EF);
    /// Cyan
    pub const CYAN: Self = Self(0x07FF);
    /// Turquoise
    pub const TURQUOISE: Self = Self(0x471A);
    /// Indigo
    pub const INDIGO: Self = Self(0x4810);
    /// Dark red
    pub const DARK_RED: Self = Self(0x8000);
    /// Olive
    pub const OLIVE: Self = Self(0x7BE0);
    /// Gray
    pub const GRAY: Self = Self(0x8410);
    /// Light gray
    pub const LIGHT_GRAY: Self = Self(0xC618);
    /// Dark gray
    pub const DARK_GRAY: Self = Self(0x7BEF);
    /// Magenta
    pub const MAGENTA: Self = Self(0xF81F);
    /// Orange
    pub const ORANGE: Self = Self(0xFD20);
    /// Yellow
    pub const YELLOW: Self = Self(0xFFE0);
    /// Gold
    pub const GOLD: Self = Self(0xFEA0);
    /// Violet
    pub const VIOLET: Self = Self(0x915C);

    /// Wrap a raw RGB565 word
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build a color from 8-bit channels (see [`pack_rgb565`])
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(pack_rgb565(r, g, b))
    }

    /// Expand to 8-bit channels (see [`unpack_rgb565`])
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        unpack_rgb565(self.0)
    }

    /// The same color with red and blue fields swapped
    pub const fn to_bgr(self) -> Self {
        Self(rgb565_to_bgr565(self.0))
    }

    /// The raw RGB565 word
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}
