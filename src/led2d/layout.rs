//! Compile-time description of panel wiring.
//!
//! See [`LedLayout`] for the serpentine layout the cylinder is built from.

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` records, for each LED in strip order, the `(x, y)` cell it
/// lights. Coordinates use a screen-style convention: `(0, 0)` is the top-left
/// corner, `x` increases to the right, and `y` increases downward.
///
/// ## Validation
///
/// Layouts are validated at **compile time** when built in a `const`:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// so a layout that compiles is a bijection between strip positions and cells.
///
/// # Example
///
/// The cylinder wiring: a 20×5 panel whose strip snakes down even columns and
/// back up odd ones.
///
/// ```rust
/// use led_cylinder::led2d::layout::LedLayout;
///
/// const CYLINDER: LedLayout<100, 20, 5> = LedLayout::serpentine_column_major();
/// const BY_XY: [u16; 100] = CYLINDER.xy_to_index();
///
/// assert_eq!(&BY_XY[..4], &[0, 9, 10, 19]); // top row
/// assert_eq!(CYLINDER.index_to_xy()[9], (1, 0));
/// ```
///
/// ```text
/// Serpentine 3×2 (column major):
///   LED0  LED3  LED4
///   LED1  LED2  LED5
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for a zero-sized layout, which [`Self::new`] rejects.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Invert the layout: entry `y * W + x` is the strip index of cell `(x, y)`.
    #[must_use]
    pub const fn xy_to_index(&self) -> [u16; N] {
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for xy_to_index"
        );

        let mut mapping = [None; N];

        let mut led_index = 0;
        while led_index < N {
            let (col, row) = self.map[led_index];
            let col = col as usize;
            let row = row as usize;
            assert!(col < W, "column out of bounds in xy_to_index");
            assert!(row < H, "row out of bounds in xy_to_index");
            let target_index = row * W + col;

            let slot = &mut mapping[target_index];
            assert!(
                slot.is_none(),
                "duplicate (col,row) in xy_to_index inversion"
            );
            *slot = Some(led_index as u16);

            led_index += 1;
        }

        let mut finalized = [0u16; N];
        let mut i = 0;
        while i < N {
            finalized[i] = mapping[i].expect("xy_to_index requires every (col,row) to be covered");
            i += 1;
        }

        finalized
    }

    /// Const equality helper.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the mapping covers every cell of the W×H panel exactly once.
    ///
    /// ```rust
    /// use led_cylinder::led2d::layout::LedLayout;
    ///
    /// const MAP: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)]);
    /// const _: () = assert!(MAP.equals(&LedLayout::serpentine_column_major()));
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Serpentine column-major mapping: even columns run top-to-bottom, odd
    /// columns bottom-to-top, so consecutive LEDs stay physically adjacent.
    ///
    /// ```text
    /// Strip snakes down columns (3×2 example):
    ///   LED0  LED3  LED4
    ///   LED1  LED2  LED5
    /// ```
    #[must_use]
    pub const fn serpentine_column_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if x_index % 2 == 0 {
                    // Even column: top-to-bottom
                    x_index * H + y_index
                } else {
                    // Odd column: bottom-to-top
                    x_index * H + (H - 1 - y_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }
}
