//! Text rendering
//!
//! Standard-font glyphs are drawn as opaque cells: set bits take the text
//! color, clear bits the background color, followed by one blank spacing
//! column. GFX-font glyphs are transparent and only plot their set bits.
//!
//! Strings are drawn inside a single write batch with the transaction hold
//! set, so chip select stays asserted across glyphs.

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::font::{GfxFont, StandardFont, StandardGlyph};
use crate::interface::DisplayInterface;
use crate::rotation::AutoIncrement;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Select the standard font
    pub fn set_font(&mut self, font: StandardFont<'static>) {
        log::debug!(
            "Standard font {}x{}, {} glyphs from {:#04x}",
            font.width(),
            font.height(),
            font.count(),
            font.offset()
        );
        self.font = Some(font);
    }

    /// Currently selected standard font
    pub fn font(&self) -> Option<&StandardFont<'static>> {
        self.font.as_ref()
    }

    fn standard_glyph(&self, ch: char) -> Result<StandardGlyph<'static>, Error<I>> {
        let font = self.font.ok_or(Error::FontNotSet)?;
        font.glyph(ch).ok_or(Error::GlyphNotFound(ch))
    }

    /// Draw one character with its top-left corner at `(x, y)`
    ///
    /// Returns the glyph width. The cell drawn is one column wider, the
    /// extra column being filled with the background color.
    ///
    /// # Errors
    ///
    /// Returns `Error::FontNotSet` without a standard font, or
    /// `Error::GlyphNotFound` for characters outside the font.
    pub fn draw_char(&mut self, x: u16, y: u16, ch: char, color: Color) -> Result<u16, Error<I>> {
        let glyph = self.standard_glyph(ch)?;
        let width = u16::from(glyph.width);
        let height = u16::from(glyph.height);
        if height == 0 {
            return Ok(width);
        }
        let background = self.background;
        let fast = u32::from(x) + u32::from(width) + 1 < u32::from(self.max_x)
            && u32::from(y) + u32::from(height) - 1 < u32::from(self.max_y);

        self.batched(|d| {
            if fast {
                d.set_window(x, y, x + width, y + height - 1, AutoIncrement::TopDownL2r)?;
                for column in 0..=glyph.width {
                    for row in 0..glyph.height {
                        let word = if glyph.is_set(column, row) {
                            color
                        } else {
                            background
                        };
                        d.interface
                            .send_data16(word.raw())
                            .map_err(Error::Interface)?;
                    }
                }
            } else {
                for column in 0..=glyph.width {
                    for row in 0..glyph.height {
                        let word = if glyph.is_set(column, row) {
                            color
                        } else {
                            background
                        };
                        d.plot(
                            i32::from(x) + i32::from(column),
                            i32::from(y) + i32::from(row),
                            word,
                        )?;
                    }
                }
            }
            d.reset_window()
        })?;
        Ok(width)
    }

    /// Draw a string with the standard font
    ///
    /// Each glyph advances the cursor by its width plus one. Returns the x
    /// position after the last glyph.
    ///
    /// # Errors
    ///
    /// Stops at the first character that fails to draw.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Color) -> Result<u16, Error<I>> {
        self.held(|d| {
            let mut cursor = x;
            for ch in text.chars() {
                let width = d.draw_char(cursor, y, ch, color)?;
                cursor = cursor.saturating_add(width + 1);
            }
            Ok(cursor)
        })
    }

    /// Size of `text` in the standard font, without drawing it
    ///
    /// The width matches the advance [`Self::draw_text`] produces.
    ///
    /// # Errors
    ///
    /// Same as [`Self::draw_text`].
    pub fn get_text_extent(&self, text: &str) -> Result<(u16, u16), Error<I>> {
        let font = self.font.ok_or(Error::FontNotSet)?;
        let mut width = 0_u16;
        for ch in text.chars() {
            let glyph = font.glyph(ch).ok_or(Error::GlyphNotFound(ch))?;
            width = width.saturating_add(u16::from(glyph.width) + 1);
        }
        Ok((width, u16::from(font.height())))
    }

    /// Select the GFX font
    pub fn set_gfx_font(&mut self, font: GfxFont<'static>) {
        log::debug!(
            "GFX font {:#06x}..={:#06x}, line height {}",
            font.first(),
            font.last(),
            font.y_advance()
        );
        self.gfx_font = Some(font);
    }

    /// Currently selected GFX font
    pub fn gfx_font(&self) -> Option<&GfxFont<'static>> {
        self.gfx_font.as_ref()
    }

    /// Draw one GFX glyph with its origin on the baseline at `(x, y)`
    ///
    /// Only set bits are drawn. Returns the glyph's x advance.
    ///
    /// # Errors
    ///
    /// Returns `Error::FontNotSet` without a GFX font, or
    /// `Error::GlyphNotFound` for characters outside the font's range.
    pub fn draw_gfx_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        color: Color,
    ) -> Result<u16, Error<I>> {
        let font = self.gfx_font.ok_or(Error::FontNotSet)?;
        let glyph = font.glyph(ch).ok_or(Error::GlyphNotFound(ch))?;
        let bitmap = font.glyph_bitmap(glyph);
        let left = i32::from(x) + i32::from(glyph.x_offset);
        let top = i32::from(y) + i32::from(glyph.y_offset);

        self.batched(|d| {
            let mut bytes = bitmap.iter().copied();
            let mut bits = 0_u8;
            let mut bit = 0_u8;
            for yy in 0..glyph.height {
                for xx in 0..glyph.width {
                    if bit % 8 == 0 {
                        bits = bytes.next().unwrap_or(0);
                    }
                    bit = bit.wrapping_add(1);
                    if bits & 0x80 != 0 {
                        d.plot(left + i32::from(xx), top + i32::from(yy), color)?;
                    }
                    bits <<= 1;
                }
            }
            Ok(())
        })?;
        Ok(u16::from(glyph.x_advance))
    }

    /// Draw a string with the GFX font
    ///
    /// Each glyph advances the cursor by its x advance plus one. Returns the x
    /// position after the last glyph.
    ///
    /// # Errors
    ///
    /// Stops at the first character that fails to draw.
    pub fn draw_gfx_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
    ) -> Result<u16, Error<I>> {
        self.held(|d| {
            let mut cursor = x;
            for ch in text.chars() {
                let advance = d.draw_gfx_char(cursor, y, ch, color)?;
                cursor = cursor.saturating_add(advance + 1);
            }
            Ok(cursor)
        })
    }

    /// Size of `text` in the GFX font, without drawing it
    ///
    /// The height is that of the tallest glyph.
    ///
    /// # Errors
    ///
    /// Same as [`Self::draw_gfx_text`].
    pub fn get_gfx_text_extent(&self, text: &str) -> Result<(u16, u16), Error<I>> {
        let font = self.gfx_font.ok_or(Error::FontNotSet)?;
        let mut width = 0_u16;
        let mut height = 0_u16;
        for ch in text.chars() {
            let glyph = font.glyph(ch).ok_or(Error::GlyphNotFound(ch))?;
            width = width.saturating_add(u16::from(glyph.x_advance) + 1);
            height = height.max(u16::from(glyph.height));
        }
        Ok((width, height))
    }
}
