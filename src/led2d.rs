//! Logical 2D frames for rectangular LED panels, and the cylinder's frame buffer.
//!
//! A [`Frame2d`] is a row-major grid of colors where `(0, 0)` is the top-left
//! LED. It knows nothing about wiring: the
//! [`LedLayout`] describes how each `(x, y)` cell maps onto the physical strip,
//! and output sinks apply that mapping when they render.
//!
//! The cylinder uses [`CylinderFrame`], a 20×5 frame. The scroll engine drives
//! it with three operations:
//!
//! - [`Frame2d::set_column`] writes the newly revealed column at the right edge,
//! - [`Frame2d::shift_left`] moves everything one column left,
//! - [`Frame2d::clear`] blanks the panel between animation segments.
//!
//! # Example
//!
//! ```rust
//! use led_cylinder::led2d::CylinderFrame;
//! use led_cylinder::led_strip::colors;
//!
//! let mut frame = CylinderFrame::new();
//! frame.set_column(19, [colors::RED; 5])?;
//! frame.shift_left();
//! assert_eq!(frame.column(18)?, [colors::RED; 5]);
//! // The right edge keeps its old content until the next set_column.
//! assert_eq!(frame.column(19)?, [colors::RED; 5]);
//! # Ok::<(), led_cylinder::Error>(())
//! ```

pub mod layout;

pub use layout::LedLayout;

use core::ops::{Deref, DerefMut, Index, IndexMut};
use smart_leds::RGB8;

use crate::cylinder::{COLUMNS, ROWS};
use crate::{Error, Result};

/// The cylinder's logical frame buffer: 20 columns × 5 rows.
pub type CylinderFrame = Frame2d<COLUMNS, ROWS>;

const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// A 2D array of RGB pixels representing a single display frame.
///
/// Frames are stored in row-major order: `frame.0[row][column]`. Tuple
/// indexing follows screen convention, `frame[(x, y)]` is column `x`, row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Frame width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of pixels (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[BLACK; W]; H])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    /// Set every cell to black.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Color at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`] if the cell is outside the frame.
    pub fn get(&self, row: usize, column: usize) -> Result<RGB8> {
        self.0
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .ok_or(Error::InvalidCoordinate { row, column })
    }

    /// Overwrite one column, top row first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`] if `column >= W`; the frame is left untouched.
    pub fn set_column(&mut self, column: usize, colors: [RGB8; H]) -> Result<()> {
        if column >= W {
            return Err(Error::InvalidCoordinate { row: 0, column });
        }
        for (cells, color) in self.0.iter_mut().zip(colors) {
            cells[column] = color;
        }
        Ok(())
    }

    /// Read one column, top row first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`] if `column >= W`.
    pub fn column(&self, column: usize) -> Result<[RGB8; H]> {
        if column >= W {
            return Err(Error::InvalidCoordinate { row: 0, column });
        }
        Ok(core::array::from_fn(|row| self.0[row][column]))
    }

    /// Move every column one step left. Column 0 is discarded and the
    /// rightmost column keeps its previous values.
    pub fn shift_left(&mut self) {
        for cells in &mut self.0 {
            cells.copy_within(1.., 0);
        }
    }

    /// Read-only copy of the current state, for rendering.
    #[must_use]
    pub const fn snapshot(&self) -> Self {
        *self
    }

    /// True if every cell is black.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().flatten().all(|color| *color == BLACK)
    }

    /// Iterate `(row, column, color)` over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, RGB8)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, color)| (row, column, *color))
        })
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> From<[[RGB8; W]; H]> for Frame2d<W, H> {
    fn from(array: [[RGB8; W]; H]) -> Self {
        Self(array)
    }
}

impl<const W: usize, const H: usize> From<Frame2d<W, H>> for [[RGB8; W]; H] {
    fn from(frame: Frame2d<W, H>) -> Self {
        frame.0
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
