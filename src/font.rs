//! Font assets
//!
//! Two independent glyph formats are supported:
//!
//! - [`StandardFont`]: a fixed-stride table of column-major glyphs, as found
//!   in many small TFT libraries.
//! - [`GfxFont`]: variable-metric glyphs packed into one bitmap, in the
//!   layout produced by the `fontconvert` tool.
//!
//! Fonts borrow their data and never change after construction.
//!
//! ## Standard font layout
//!
//! | Offset | Content |
//! |--------|---------|
//! | 0 | glyph width |
//! | 1 | glyph height |
//! | 2 | first character code |
//! | 3 | glyph count |
//! | 4.. | glyphs |
//!
//! Each glyph is `width * ceil(height / 8) + 1` bytes: a width byte followed
//! by the columns, left to right. Each column is `ceil(height / 8)` bytes, top
//! to bottom, least significant bit uppermost.

use crate::error::FontError;

/// Size of the standard font header
pub const FONT_HEADER_SIZE: usize = 4;

/// A fixed-stride bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardFont<'a> {
    data: &'a [u8],
    width: u8,
    height: u8,
    offset: u8,
    count: u8,
    monospaced: bool,
}

impl<'a> StandardFont<'a> {
    /// Wrap a font blob
    ///
    /// With `monospaced` set, every glyph is drawn at the header width and
    /// the per-glyph width byte is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FontError::HeaderTooShort` if the blob has no header, or
    /// `FontError::DataTooShort` if it ends before the last glyph.
    pub const fn new(data: &'a [u8], monospaced: bool) -> Result<Self, FontError> {
        if data.len() < FONT_HEADER_SIZE {
            return Err(FontError::HeaderTooShort {
                provided: data.len(),
            });
        }
        let font = Self {
            data,
            width: data[0],
            height: data[1],
            offset: data[2],
            count: data[3],
            monospaced,
        };
        let required = FONT_HEADER_SIZE + font.stride() * font.count as usize;
        if data.len() < required {
            return Err(FontError::DataTooShort {
                required,
                provided: data.len(),
            });
        }
        Ok(font)
    }

    /// Header width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Glyph height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// First character code in the table
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Number of glyphs in the table
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Whether glyphs are drawn at a fixed width
    pub const fn is_monospaced(&self) -> bool {
        self.monospaced
    }

    /// Bytes per column
    pub const fn rows(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    /// Bytes per glyph, width byte included
    pub const fn stride(&self) -> usize {
        self.width as usize * self.rows() + 1
    }

    /// Look up the glyph for `ch`
    ///
    /// Returns `None` for characters outside the table.
    pub fn glyph(&self, ch: char) -> Option<StandardGlyph<'a>> {
        let code = u8::try_from(u32::from(ch)).ok()?;
        let index = code.checked_sub(self.offset)?;
        if index >= self.count {
            return None;
        }
        let start = self.stride() * usize::from(index) + FONT_HEADER_SIZE;
        let bytes = self.data.get(start..start + self.stride())?;
        let width = if self.monospaced {
            self.width
        } else {
            bytes[0]
        };
        Some(StandardGlyph {
            width,
            height: self.height,
            rows: self.rows(),
            columns: &bytes[1..],
        })
    }
}

/// One glyph of a [`StandardFont`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardGlyph<'a> {
    /// Drawn width in pixels, before the spacing column
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    rows: usize,
    columns: &'a [u8],
}

impl StandardGlyph<'_> {
    /// Whether pixel `(column, row)` is set
    ///
    /// Columns at or beyond the glyph's stored data read as clear, which
    /// makes the trailing spacing column blank.
    pub fn is_set(&self, column: u8, row: u8) -> bool {
        let index = usize::from(column) * self.rows + usize::from(row / 8);
        if column >= self.width {
            return false;
        }
        self.columns
            .get(index)
            .is_some_and(|byte| byte & (1 << (row % 8)) != 0)
    }
}

/// Metrics and bitmap location of one [`GfxFont`] glyph
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Offset of the first bitmap byte
    pub bitmap_offset: u16,
    /// Bitmap width
    pub width: u8,
    /// Bitmap height
    pub height: u8,
    /// Cursor advance after drawing
    pub x_advance: u8,
    /// Horizontal offset from the cursor to the bitmap's left edge
    pub x_offset: i8,
    /// Vertical offset from the baseline to the bitmap's top edge
    pub y_offset: i8,
}

impl Glyph {
    /// Bytes the glyph's bitmap occupies
    pub const fn bitmap_len(&self) -> usize {
        (self.width as usize * self.height as usize).div_ceil(8)
    }
}

/// A variable-metric font
///
/// Glyph bitmaps are 1 bpp, most significant bit first, rows packed back to
/// back without padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GfxFont<'a> {
    bitmap: &'a [u8],
    glyphs: &'a [Glyph],
    first: u16,
    last: u16,
    y_advance: u8,
}

impl<'a> GfxFont<'a> {
    /// Wrap a bitmap and its glyph table covering `first..=last`
    ///
    /// # Errors
    ///
    /// Returns `FontError::GlyphCountMismatch` if the table does not hold
    /// exactly one glyph per code, or `FontError::BitmapOutOfRange` if a glyph
    /// points past the end of the bitmap.
    pub fn new(
        bitmap: &'a [u8],
        glyphs: &'a [Glyph],
        first: u16,
        last: u16,
        y_advance: u8,
    ) -> Result<Self, FontError> {
        let expected = if last >= first {
            usize::from(last - first) + 1
        } else {
            0
        };
        if glyphs.len() != expected {
            return Err(FontError::GlyphCountMismatch {
                expected,
                provided: glyphs.len(),
            });
        }
        for (code, glyph) in (first..=last).zip(glyphs) {
            if usize::from(glyph.bitmap_offset) + glyph.bitmap_len() > bitmap.len() {
                return Err(FontError::BitmapOutOfRange { code });
            }
        }
        Ok(Self {
            bitmap,
            glyphs,
            first,
            last,
            y_advance,
        })
    }

    /// First character code
    pub const fn first(&self) -> u16 {
        self.first
    }

    /// Last character code
    pub const fn last(&self) -> u16 {
        self.last
    }

    /// Line height
    pub const fn y_advance(&self) -> u8 {
        self.y_advance
    }

    /// Metrics for `ch`, or `None` outside `first..=last`
    pub fn glyph(&self, ch: char) -> Option<&'a Glyph> {
        let code = u16::try_from(u32::from(ch)).ok()?;
        if code < self.first || code > self.last {
            return None;
        }
        self.glyphs.get(usize::from(code - self.first))
    }

    /// Bitmap bytes of `glyph`
    pub fn glyph_bitmap(&self, glyph: &Glyph) -> &'a [u8] {
        let start = usize::from(glyph.bitmap_offset);
        self.bitmap
            .get(start..start + glyph.bitmap_len())
            .unwrap_or(&[])
    }
}
