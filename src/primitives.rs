//! Primitive rasterizer
//!
//! Lines, rectangles, circles, triangles and 1-bpp bitmaps in logical
//! coordinates. Every primitive runs inside one write batch, so nested
//! calls (a filled circle drawing its chords) share a single bus
//! transaction. Points that fall off the canvas are clipped.
//!
//! Shapes that can extend past the top or left edge are rasterized with
//! signed coordinates; negative points are dropped before they reach
//! [`Display::draw_pixel`].

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::AutoIncrement;

/// A 1-bpp bitmap, rows padded to whole bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<'a> {
    /// Packed rows
    pub data: &'a [u8],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Bit order within each byte: `true` consumes bit 0 first (XBM style)
    pub lsb_first: bool,
}

impl<'a> Bitmap<'a> {
    /// An MSB-first bitmap
    pub const fn new(data: &'a [u8], width: u16, height: u16) -> Self {
        Self {
            data,
            width,
            height,
            lsb_first: false,
        }
    }

    /// The same bitmap read LSB first
    #[must_use]
    pub const fn lsb_first(mut self) -> Self {
        self.lsb_first = true;
        self
    }

    /// Whether pixel `(x, y)` is set; bytes missing from `data` read as clear
    pub fn is_set(&self, x: u16, y: u16) -> bool {
        let row_bytes = usize::from(self.width).div_ceil(8);
        let index = usize::from(y) * row_bytes + usize::from(x / 8);
        let byte = self.data.get(index).copied().unwrap_or(0);
        let bit = x % 8;
        if self.lsb_first {
            byte & (1 << bit) != 0
        } else {
            byte & (0x80 >> bit) != 0
        }
    }
}

/// X position on a triangle edge, truncating toward zero
fn edge(x: i32, sum: i64, dy: i64) -> i32 {
    let x = i64::from(x) + sum / dy;
    let saturated = if x < 0 { i32::MIN } else { i32::MAX };
    i32::try_from(x).unwrap_or(saturated)
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Plot a signed point, dropping anything off the canvas
    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.draw_pixel(x, y, color),
            _ => Ok(()),
        }
    }

    /// Draw a line between two points, both endpoints included
    pub fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> DisplayResult<I> {
        self.line(
            i32::from(x0),
            i32::from(y0),
            i32::from(x1),
            i32::from(y1),
            color,
        )
    }

    /// Bresenham over signed coordinates
    #[allow(clippy::many_single_char_names)]
    pub(crate) fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> DisplayResult<I> {
        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };

        self.batched(|d| {
            let mut err = dx / 2;
            let mut y = y0;
            for x in x0..=x1 {
                if steep {
                    d.plot(y, x, color)?;
                } else {
                    d.plot(x, y, color)?;
                }
                err -= dy;
                if err < 0 {
                    y += y_step;
                    err += dx;
                }
            }
            Ok(())
        })
    }

    /// Draw a rectangle outline with corners `(x0, y0)` and `(x1, y1)`
    pub fn draw_rectangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> DisplayResult<I> {
        self.batched(|d| {
            d.draw_line(x0, y0, x0, y1, color)?;
            d.draw_line(x0, y0, x1, y0, color)?;
            d.draw_line(x0, y1, x1, y1, color)?;
            d.draw_line(x1, y0, x1, y1, color)
        })
    }

    /// Fill a rectangle through one address window
    ///
    /// Corners may be given in any order. The rectangle is clipped to the
    /// canvas and the window is reset afterwards.
    pub fn fill_rectangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: Color,
    ) -> DisplayResult<I> {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        if x0 >= self.max_x || y0 >= self.max_y {
            return Ok(());
        }
        let x1 = x1.min(self.max_x - 1);
        let y1 = y1.min(self.max_y - 1);
        let count = (u32::from(x1 - x0) + 1) * (u32::from(y1 - y0) + 1);

        self.batched(|d| {
            d.set_window(x0, y0, x1, y1, AutoIncrement::default())?;
            d.interface
                .send_data16_repeated(color.raw(), count)
                .map_err(Error::Interface)?;
            d.reset_window()
        })
    }

    /// Fill a rectangle given in signed coordinates
    fn fill_rect_signed(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> DisplayResult<I> {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        if x1 < 0 || y1 < 0 {
            return Ok(());
        }
        let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
        self.fill_rectangle(clamp(x0), clamp(y0), clamp(x1), clamp(y1), color)
    }

    /// Draw a circle outline
    pub fn draw_circle(&mut self, x0: u16, y0: u16, radius: u16, color: Color) -> DisplayResult<I> {
        let (x0, y0, r) = (i32::from(x0), i32::from(y0), i32::from(radius));
        self.batched(|d| {
            let mut f = 1 - r;
            let mut dd_f_x = 1;
            let mut dd_f_y = -2 * r;
            let mut x = 0;
            let mut y = r;

            d.plot(x0, y0 + r, color)?;
            d.plot(x0, y0 - r, color)?;
            d.plot(x0 + r, y0, color)?;
            d.plot(x0 - r, y0, color)?;

            while x < y {
                if f >= 0 {
                    y -= 1;
                    dd_f_y += 2;
                    f += dd_f_y;
                }
                x += 1;
                dd_f_x += 2;
                f += dd_f_x;

                d.plot(x0 + x, y0 + y, color)?;
                d.plot(x0 - x, y0 + y, color)?;
                d.plot(x0 + x, y0 - y, color)?;
                d.plot(x0 - x, y0 - y, color)?;
                d.plot(x0 + y, y0 + x, color)?;
                d.plot(x0 - y, y0 + x, color)?;
                d.plot(x0 + y, y0 - x, color)?;
                d.plot(x0 - y, y0 - x, color)?;
            }
            Ok(())
        })
    }

    /// Draw a filled circle
    ///
    /// Chords cover the outer band; the inscribed square is filled through
    /// one address window.
    pub fn fill_circle(&mut self, x0: u16, y0: u16, radius: u16, color: Color) -> DisplayResult<I> {
        let (x0, y0, r) = (i32::from(x0), i32::from(y0), i32::from(radius));
        self.batched(|d| {
            let mut f = 1 - r;
            let mut dd_f_x = 1;
            let mut dd_f_y = -2 * r;
            let mut x = 0;
            let mut y = r;

            while x < y {
                if f >= 0 {
                    y -= 1;
                    dd_f_y += 2;
                    f += dd_f_y;
                }
                x += 1;
                dd_f_x += 2;
                f += dd_f_x;

                // bottom, top, right, left
                d.line(x0 + x, y0 + y, x0 - x, y0 + y, color)?;
                d.line(x0 + x, y0 - y, x0 - x, y0 - y, color)?;
                d.line(x0 + y, y0 - x, x0 + y, y0 + x, color)?;
                d.line(x0 - y, y0 - x, x0 - y, y0 + x, color)?;
            }
            d.fill_rect_signed(x0 - x, y0 - x, x0 + x, y0 + x, color)
        })
    }

    /// Draw a triangle outline through the vertices in order
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Color,
    ) -> DisplayResult<I> {
        self.batched(|d| {
            d.draw_line(x0, y0, x1, y1, color)?;
            d.draw_line(x1, y1, x2, y2, color)?;
            d.draw_line(x2, y2, x0, y0, color)
        })
    }

    /// Draw a filled triangle, one horizontal span per scanline
    ///
    /// Span ends are interpolated along each edge with integer division
    /// truncating toward zero.
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn fill_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Color,
    ) -> DisplayResult<I> {
        let mut v = [
            (i32::from(x0), i32::from(y0)),
            (i32::from(x1), i32::from(y1)),
            (i32::from(x2), i32::from(y2)),
        ];
        // Sort by y, stable so equal rows keep their order
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        if v[1].1 > v[2].1 {
            v.swap(1, 2);
        }
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        self.batched(|d| {
            if y0 == y2 {
                let a = x0.min(x1).min(x2);
                let b = x0.max(x1).max(x2);
                return d.span(a, b, y0, color);
            }

            // Edge sums reach dx * dy, beyond i32 for far off-canvas vertices
            let (dx01, dy01) = (i64::from(x1 - x0), i64::from(y1 - y0));
            let (dx02, dy02) = (i64::from(x2 - x0), i64::from(y2 - y0));
            let (dx12, dy12) = (i64::from(x2 - x1), i64::from(y2 - y1));
            let bottom = y2.min(i32::from(d.max_y) - 1);

            // Include the middle row in the upper half only for a flat bottom
            let last = if y1 == y2 { y1 } else { y1 - 1 };

            let mut sa = 0;
            let mut sb = 0;
            let mut y = y0;
            while y <= last.min(bottom) {
                let a = edge(x0, sa, dy01);
                let b = edge(x0, sb, dy02);
                sa += dx01;
                sb += dx02;
                d.span(a, b, y, color)?;
                y += 1;
            }

            sa = dx12 * i64::from(y - y1);
            sb = dx02 * i64::from(y - y0);
            while y <= bottom {
                let a = edge(x1, sa, dy12);
                let b = edge(x0, sb, dy02);
                sa += dx12;
                sb += dx02;
                d.span(a, b, y, color)?;
                y += 1;
            }
            Ok(())
        })
    }

    /// Draw the horizontal run between `a` and `b`, clipped to the canvas
    fn span(&mut self, a: i32, b: i32, y: i32, color: Color) -> DisplayResult<I> {
        let (a, b) = (a.min(b).max(0), a.max(b).min(i32::from(self.max_x) - 1));
        if a > b {
            return Ok(());
        }
        self.line(a, y, b, y, color)
    }

    /// Draw a 1-bpp bitmap with its top left corner at `(x, y)`
    ///
    /// Set bits are drawn in `color`. Clear bits are drawn in `background`,
    /// or left untouched when it is `None`.
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        bitmap: &Bitmap<'_>,
        color: Color,
        background: Option<Color>,
    ) -> DisplayResult<I> {
        self.batched(|d| {
            for j in 0..bitmap.height {
                for i in 0..bitmap.width {
                    let px = i32::from(x) + i32::from(i);
                    let py = i32::from(y) + i32::from(j);
                    if bitmap.is_set(i, j) {
                        d.plot(px, py, color)?;
                    } else if let Some(background) = background {
                        d.plot(px, py, background)?;
                    }
                }
            }
            Ok(())
        })
    }
}
