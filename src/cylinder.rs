//! Fixed geometry of the LED cylinder and its coordinate mapper.
//!
//! The cylinder is a 5-row × 20-column matrix built from a single WS2812
//! strip of 100 LEDs. The strip runs down column 0, up column 1, down
//! column 2 and so on, which keeps neighboring LEDs on the strip physically
//! adjacent on the cylinder.
//!
//! ```text
//!          col 0  col 1  col 2  col 3  ...  col 19
//!   row 0    0      9     10     19          99
//!   row 1    1      8     11     18          98
//!   row 2    2      7     12     17          97
//!   row 3    3      6     13     16          96
//!   row 4    4      5     14     15          95
//! ```
//!
//! Changing this table changes which LED lights for a given logical cell, so
//! it is derived once from [`LedLayout::serpentine_column_major`] and every
//! sink goes through [`physical_index`].

use crate::led2d::LedLayout;
use crate::{Error, Result};

/// Number of LED rows around the cylinder's height.
pub const ROWS: usize = 5;

/// Number of LED columns around the cylinder's circumference.
pub const COLUMNS: usize = 20;

/// Total LEDs on the strip.
pub const LED_COUNT: usize = ROWS * COLUMNS;

/// How the strip is wired through the matrix.
pub const CYLINDER_LAYOUT: LedLayout<LED_COUNT, COLUMNS, ROWS> =
    LedLayout::serpentine_column_major();

/// Physical strip index for each logical cell, row-major (`row * COLUMNS + column`).
pub const PHYSICAL_INDEX_MAP: [u16; LED_COUNT] = CYLINDER_LAYOUT.xy_to_index();

/// Translate a logical `(row, column)` into the LED's position along the strip.
///
/// # Errors
///
/// [`Error::InvalidCoordinate`] if `row >= ROWS` or `column >= COLUMNS`.
///
/// # Example
///
/// ```rust
/// use led_cylinder::cylinder::physical_index;
///
/// assert_eq!(physical_index(0, 0)?, 0);
/// assert_eq!(physical_index(0, 1)?, 9);
/// assert_eq!(physical_index(4, 19)?, 95);
/// assert!(physical_index(5, 0).is_err());
/// # Ok::<(), led_cylinder::Error>(())
/// ```
pub fn physical_index(row: usize, column: usize) -> Result<usize> {
    if row >= ROWS || column >= COLUMNS {
        return Err(Error::InvalidCoordinate { row, column });
    }
    Ok(usize::from(PHYSICAL_INDEX_MAP[row * COLUMNS + column]))
}

/// Logical `(row, column)` lit by strip position `index`, or `None` past the end of the strip.
#[must_use]
pub fn logical_position(index: usize) -> Option<(usize, usize)> {
    CYLINDER_LAYOUT
        .index_to_xy()
        .get(index)
        .map(|&(column, row)| (usize::from(row), usize::from(column)))
}
