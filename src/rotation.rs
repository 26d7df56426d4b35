//! Coordinate rotation utilities
//!
//! Both panels are portrait native: the controller's GRAM is addressed in
//! physical coordinates where width < height. Drawing happens in logical
//! coordinates, which this module maps to physical ones for the active
//! [`Rotation`].
//!
//! ## Rotation Modes
//!
//! Given the logical extents `max_x` × `max_y` (already swapped for 90° and
//! 270°):
//!
//! - **Rotate0**: identity
//! - **Rotate90**: `(max_y - 1 - y, x)`
//! - **Rotate180**: `(max_x - 1 - x, max_y - 1 - y)`
//! - **Rotate270**: `(y, max_x - 1 - x)`
//!
//! The hardware cursor direction inside an address window
//! ([`AutoIncrement`]) is rotated as well, through [`MODE_REMAP`].
//!
//! ## Example
//!
//! ```
//! use ili9225::rotation::{orient, AutoIncrement, Rotation};
//!
//! // 176x220 panel turned 90 degrees: logical extents are 220x176
//! assert_eq!(orient(0, 0, 220, 176, Rotation::Rotate90), (175, 0));
//! assert_eq!(orient(219, 175, 220, 176, Rotation::Rotate90), (0, 219));
//!
//! // Left-to-right, top-down in logical space runs top-down, right-to-left
//! // on the physical panel
//! assert_eq!(
//!     AutoIncrement::L2rTopDown.remap(Rotation::Rotate90),
//!     AutoIncrement::TopDownR2l
//! );
//! ```

use crate::error::InvalidOrientation;

/// Display rotation relative to the panel's native portrait orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0 = 0,
    /// Rotate 90 degrees
    Rotate90 = 1,
    /// Rotate 180 degrees
    Rotate180 = 2,
    /// Rotate 270 degrees
    Rotate270 = 3,
}

impl Rotation {
    /// Build a rotation from a quarter-turn count, reduced modulo 4
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::Rotate0,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            _ => Self::Rotate270,
        }
    }

    /// Quarter-turn count, 0..=3
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether logical width and height are swapped relative to the panel
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    /// Logical extents for a panel of `width` × `height` physical pixels
    pub const fn extents(self, width: u16, height: u16) -> (u16, u16) {
        if self.is_landscape() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl TryFrom<u8> for Rotation {
    type Error = InvalidOrientation;

    /// Strict conversion: only 0..=3 are accepted
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 4 {
            Ok(Self::from_index(value))
        } else {
            Err(InvalidOrientation { value })
        }
    }
}

/// Hardware cursor movement inside an address window
///
/// The discriminant is the 3-bit field written to the controller:
///
/// - Bit 0 (AM): 0 = advance horizontally first, 1 = vertically first
/// - Bit 1 (ID0): horizontal address increments (left to right)
/// - Bit 2 (ID1): vertical address increments (top down)
///
/// Variant names read "first direction, then second direction".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AutoIncrement {
    /// Right to left, rows bottom up
    R2lBottomUp = 0,
    /// Bottom up, columns right to left
    BottomUpR2l = 1,
    /// Left to right, rows bottom up
    L2rBottomUp = 2,
    /// Bottom up, columns left to right
    BottomUpL2r = 3,
    /// Right to left, rows top down
    R2lTopDown = 4,
    /// Top down, columns right to left
    TopDownR2l = 5,
    /// Left to right, rows top down
    L2rTopDown = 6,
    /// Top down, columns left to right
    #[default]
    TopDownL2r = 7,
}

/// Physical auto-increment mode for each rotation, indexed
/// `[rotation - 1][requested mode]`
///
/// Rotation 0 is the identity and has no row.
pub const MODE_REMAP: [[AutoIncrement; 8]; 3] = {
    use AutoIncrement::{
        BottomUpL2r, BottomUpR2l, L2rBottomUp, L2rTopDown, R2lBottomUp, R2lTopDown, TopDownL2r,
        TopDownR2l,
    };
    [
        [
            BottomUpL2r,
            L2rBottomUp,
            TopDownL2r,
            L2rTopDown,
            BottomUpR2l,
            R2lBottomUp,
            TopDownR2l,
            R2lTopDown,
        ],
        [
            L2rTopDown,
            TopDownL2r,
            R2lTopDown,
            TopDownR2l,
            L2rBottomUp,
            BottomUpL2r,
            R2lBottomUp,
            BottomUpR2l,
        ],
        [
            TopDownR2l,
            R2lTopDown,
            BottomUpR2l,
            R2lBottomUp,
            TopDownL2r,
            L2rTopDown,
            BottomUpL2r,
            L2rBottomUp,
        ],
    ]
};

impl AutoIncrement {
    /// The 3-bit field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Vertical-first (AM bit)
    pub const fn vertical_first(self) -> bool {
        self.bits() & 0x01 != 0
    }

    /// Horizontal address increments (ID0 bit)
    pub const fn x_increments(self) -> bool {
        self.bits() & 0x02 != 0
    }

    /// Vertical address increments (ID1 bit)
    pub const fn y_increments(self) -> bool {
        self.bits() & 0x04 != 0
    }

    /// Reinterpret a logical mode as the physical mode for `rotation`
    pub const fn remap(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Rotate0 => self,
            _ => MODE_REMAP[rotation as usize - 1][self as usize],
        }
    }
}

impl TryFrom<u8> for AutoIncrement {
    type Error = InvalidOrientation;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::R2lBottomUp,
            1 => Self::BottomUpR2l,
            2 => Self::L2rBottomUp,
            3 => Self::BottomUpL2r,
            4 => Self::R2lTopDown,
            5 => Self::TopDownR2l,
            6 => Self::L2rTopDown,
            7 => Self::TopDownL2r,
            _ => return Err(InvalidOrientation { value }),
        })
    }
}

/// Map a logical coordinate to the physical GRAM coordinate
///
/// `max_x` and `max_y` are the logical extents for `rotation`. The caller must
/// keep `x < max_x` and `y < max_y`.
///
/// # Example
///
/// ```
/// use ili9225::rotation::{orient, Rotation};
///
/// assert_eq!(orient(3, 4, 176, 220, Rotation::Rotate0), (3, 4));
/// assert_eq!(orient(0, 0, 176, 220, Rotation::Rotate180), (175, 219));
/// assert_eq!(orient(0, 0, 220, 176, Rotation::Rotate270), (0, 219));
/// ```
pub const fn orient(x: u16, y: u16, max_x: u16, max_y: u16, rotation: Rotation) -> (u16, u16) {
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (max_y - y - 1, x),
        Rotation::Rotate180 => (max_x - x - 1, max_y - y - 1),
        Rotation::Rotate270 => (y, max_x - x - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Rotation; 4] = [
        Rotation::Rotate0,
        Rotation::Rotate90,
        Rotation::Rotate180,
        Rotation::Rotate270,
    ];

    #[test]
    fn test_rotate0_is_identity() {
        for x in (0..176).step_by(5) {
            for y in (0..220).step_by(5) {
                assert_eq!(orient(x, y, 176, 220, Rotation::Rotate0), (x, y));
            }
        }
    }

    #[test]
    fn test_rotate180_twice_is_identity() {
        for x in (0..176).step_by(3) {
            for y in (0..220).step_by(3) {
                let (px, py) = orient(x, y, 176, 220, Rotation::Rotate180);
                assert_eq!(orient(px, py, 176, 220, Rotation::Rotate180), (x, y));
            }
        }
    }

    #[test]
    fn test_rotate90_corners() {
        // Logical 220x176 canvas on a 176x220 panel
        assert_eq!(orient(0, 0, 220, 176, Rotation::Rotate90), (175, 0));
        assert_eq!(orient(219, 0, 220, 176, Rotation::Rotate90), (175, 219));
        assert_eq!(orient(0, 175, 220, 176, Rotation::Rotate90), (0, 0));
        assert_eq!(orient(219, 175, 220, 176, Rotation::Rotate90), (0, 219));
    }

    #[test]
    fn test_rotate270_corners() {
        assert_eq!(orient(0, 0, 220, 176, Rotation::Rotate270), (0, 219));
        assert_eq!(orient(219, 0, 220, 176, Rotation::Rotate270), (0, 0));
        assert_eq!(orient(0, 175, 220, 176, Rotation::Rotate270), (175, 219));
    }

    #[test]
    fn test_orient_stays_on_panel() {
        for rotation in ALL {
            let (max_x, max_y) = rotation.extents(176, 220);
            for x in [0, max_x / 2, max_x - 1] {
                for y in [0, max_y / 2, max_y - 1] {
                    let (px, py) = orient(x, y, max_x, max_y, rotation);
                    assert!(px < 176 && py < 220, "{rotation:?} ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn test_extents_swap_for_odd_rotations() {
        assert_eq!(Rotation::Rotate0.extents(176, 220), (176, 220));
        assert_eq!(Rotation::Rotate90.extents(176, 220), (220, 176));
        assert_eq!(Rotation::Rotate180.extents(176, 220), (176, 220));
        assert_eq!(Rotation::Rotate270.extents(176, 220), (220, 176));
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Rotation::from_index(4), Rotation::Rotate0);
        assert_eq!(Rotation::from_index(7), Rotation::Rotate270);
        assert_eq!(Rotation::from_index(2).index(), 2);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Rotation::try_from(3), Ok(Rotation::Rotate270));
        assert_eq!(Rotation::try_from(4), Err(InvalidOrientation { value: 4 }));
        assert_eq!(AutoIncrement::try_from(7), Ok(AutoIncrement::TopDownL2r));
        assert_eq!(
            AutoIncrement::try_from(8),
            Err(InvalidOrientation { value: 8 })
        );
    }

    #[test]
    fn test_mode_bits_round_trip() {
        for bits in 0..8u8 {
            let mode = AutoIncrement::try_from(bits).unwrap();
            assert_eq!(mode.bits(), bits);
        }
    }

    /// Rebuild the physical mode from the coordinate mapping: track where a
    /// one-step move along each logical axis lands on the panel.
    fn derived_remap(mode: AutoIncrement, rotation: Rotation) -> u8 {
        let am = mode.vertical_first();
        let id0 = mode.x_increments();
        let id1 = mode.y_increments();
        let (am, id0, id1) = match rotation {
            Rotation::Rotate0 => (am, id0, id1),
            // physical x follows -logical y, physical y follows logical x
            Rotation::Rotate90 => (!am, !id1, id0),
            Rotation::Rotate180 => (am, !id0, !id1),
            // physical x follows logical y, physical y follows -logical x
            Rotation::Rotate270 => (!am, id1, !id0),
        };
        u8::from(am) | (u8::from(id0) << 1) | (u8::from(id1) << 2)
    }

    #[test]
    fn test_remap_table_matches_coordinate_transform() {
        for rotation in ALL {
            for bits in 0..8u8 {
                let mode = AutoIncrement::try_from(bits).unwrap();
                assert_eq!(
                    mode.remap(rotation).bits(),
                    derived_remap(mode, rotation),
                    "{rotation:?} {mode:?}"
                );
            }
        }
    }

    #[test]
    fn test_rotate180_remap_is_an_involution() {
        for bits in 0..8u8 {
            let mode = AutoIncrement::try_from(bits).unwrap();
            let twice = mode.remap(Rotation::Rotate180).remap(Rotation::Rotate180);
            assert_eq!(twice, mode);
        }
    }
}
