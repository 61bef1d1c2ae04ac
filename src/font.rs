//! 3×5 bitmap font for the cylinder's scrolling text.
//!
//! Each [`Glyph`] is three column bytes, left to right. Bit `j` (0..=4) of a
//! byte lights row `j`, with row 0 at the top; the upper three bits are
//! ignored. The table covers printable ASCII (`' '..='~'`); lowercase letters
//! share the uppercase bitmaps.
//!
//! ```text
//! 'A' = [0x1E, 0x05, 0x1E]
//!
//!   . # .      row 0
//!   # . #      row 1
//!   # # #      row 2
//!   # . #      row 3
//!   # . #      row 4
//! ```

use crate::cylinder::ROWS;
use crate::{Error, Result};

/// Columns per glyph.
pub const GLYPH_WIDTH: usize = 3;

/// One character's bitmap: three column bytes, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph(pub [u8; GLYPH_WIDTH]);

impl Glyph {
    /// A glyph with no lit pixels. Used in place of unsupported characters.
    pub const BLANK: Self = Self([0; GLYPH_WIDTH]);

    /// Column bytes, left to right.
    #[must_use]
    pub const fn columns(&self) -> [u8; GLYPH_WIDTH] {
        self.0
    }

    /// True if the pixel at `(column, row)` is lit. Out-of-range positions are unlit.
    #[must_use]
    pub const fn is_lit(&self, column: usize, row: usize) -> bool {
        column < GLYPH_WIDTH && row < ROWS && (self.0[column] >> row) & 1 == 1
    }

    /// Lit flags for one column, top row first.
    #[must_use]
    pub fn column_mask(&self, column: usize) -> [bool; ROWS] {
        core::array::from_fn(|row| self.is_lit(column, row))
    }
}

/// Look up the glyph for `character`.
///
/// # Errors
///
/// [`Error::UnsupportedCharacter`] if the font has no bitmap for it.
///
/// # Example
///
/// ```rust
/// use led_cylinder::font::{glyph_of, Glyph};
///
/// assert_eq!(glyph_of('H')?, Glyph([0x1F, 0x04, 0x1F]));
/// assert_eq!(glyph_of('h')?, glyph_of('H')?);
/// assert!(glyph_of('é').is_err());
/// # Ok::<(), led_cylinder::Error>(())
/// ```
pub fn glyph_of(character: char) -> Result<Glyph> {
    let unsupported = Error::UnsupportedCharacter { character };
    if !character.is_ascii() {
        return Err(unsupported);
    }
    let code = character.to_ascii_uppercase() as usize;
    match code {
        FIRST_CHAR..=LAST_MAIN_CHAR => Ok(MAIN_GLYPHS[code - FIRST_CHAR]),
        FIRST_BRACE_CHAR..=LAST_CHAR => Ok(BRACE_GLYPHS[code - FIRST_BRACE_CHAR]),
        _ => Err(unsupported),
    }
}

/// Like [`glyph_of`], but substitutes [`Glyph::BLANK`] for unsupported
/// characters so scrolling can continue.
#[must_use]
pub fn glyph_or_blank(character: char) -> Glyph {
    glyph_of(character).unwrap_or_else(|err| {
        log::warn!("{err}; drawing a blank glyph");
        Glyph::BLANK
    })
}

const FIRST_CHAR: usize = b' ' as usize;
const LAST_MAIN_CHAR: usize = b'`' as usize;
const FIRST_BRACE_CHAR: usize = b'{' as usize;
const LAST_CHAR: usize = b'~' as usize;

/// `' '..='`'`; lowercase letters are folded into this range before lookup.
#[rustfmt::skip]
const MAIN_GLYPHS: [Glyph; LAST_MAIN_CHAR - FIRST_CHAR + 1] = [
    Glyph([0x00, 0x00, 0x00]), // space
    Glyph([0x00, 0x17, 0x00]), // !
    Glyph([0x03, 0x00, 0x03]), // "
    Glyph([0x1f, 0x0a, 0x1f]), // #
    Glyph([0x12, 0x1f, 0x09]), // $
    Glyph([0x19, 0x04, 0x13]), // %
    Glyph([0x0a, 0x15, 0x1a]), // &
    Glyph([0x00, 0x03, 0x00]), // '
    Glyph([0x00, 0x0e, 0x11]), // (
    Glyph([0x11, 0x0e, 0x00]), // )
    Glyph([0x0a, 0x04, 0x0a]), // *
    Glyph([0x04, 0x0e, 0x04]), // +
    Glyph([0x10, 0x08, 0x00]), // ,
    Glyph([0x04, 0x04, 0x04]), // -
    Glyph([0x00, 0x10, 0x00]), // .
    Glyph([0x18, 0x04, 0x03]), // /
    Glyph([0x1f, 0x11, 0x1f]), // 0
    Glyph([0x12, 0x1f, 0x10]), // 1
    Glyph([0x1d, 0x15, 0x17]), // 2
    Glyph([0x11, 0x15, 0x1f]), // 3
    Glyph([0x07, 0x04, 0x1f]), // 4
    Glyph([0x17, 0x15, 0x1d]), // 5
    Glyph([0x1f, 0x15, 0x1d]), // 6
    Glyph([0x01, 0x1d, 0x03]), // 7
    Glyph([0x1f, 0x15, 0x1f]), // 8
    Glyph([0x17, 0x15, 0x1f]), // 9
    Glyph([0x00, 0x0a, 0x00]), // :
    Glyph([0x10, 0x0a, 0x00]), // ;
    Glyph([0x04, 0x0a, 0x11]), // <
    Glyph([0x0a, 0x0a, 0x0a]), // =
    Glyph([0x11, 0x0a, 0x04]), // >
    Glyph([0x01, 0x15, 0x07]), // ?
    Glyph([0x1f, 0x15, 0x17]), // @
    Glyph([0x1e, 0x05, 0x1e]), // A
    Glyph([0x1f, 0x15, 0x0a]), // B
    Glyph([0x0e, 0x11, 0x11]), // C
    Glyph([0x1f, 0x11, 0x0e]), // D
    Glyph([0x1f, 0x15, 0x11]), // E
    Glyph([0x1f, 0x05, 0x01]), // F
    Glyph([0x0e, 0x11, 0x1d]), // G
    Glyph([0x1f, 0x04, 0x1f]), // H
    Glyph([0x11, 0x1f, 0x11]), // I
    Glyph([0x08, 0x10, 0x0f]), // J
    Glyph([0x1f, 0x04, 0x1b]), // K
    Glyph([0x1f, 0x10, 0x10]), // L
    Glyph([0x1f, 0x06, 0x1f]), // M
    Glyph([0x1f, 0x01, 0x1e]), // N
    Glyph([0x0e, 0x11, 0x0e]), // O
    Glyph([0x1f, 0x05, 0x02]), // P
    Glyph([0x0e, 0x19, 0x16]), // Q
    Glyph([0x1f, 0x05, 0x1a]), // R
    Glyph([0x12, 0x15, 0x09]), // S
    Glyph([0x01, 0x1f, 0x01]), // T
    Glyph([0x1f, 0x10, 0x1f]), // U
    Glyph([0x0f, 0x10, 0x0f]), // V
    Glyph([0x1f, 0x0c, 0x1f]), // W
    Glyph([0x1b, 0x04, 0x1b]), // X
    Glyph([0x03, 0x1c, 0x03]), // Y
    Glyph([0x19, 0x15, 0x13]), // Z
    Glyph([0x1f, 0x11, 0x00]), // [
    Glyph([0x03, 0x04, 0x18]), // backslash
    Glyph([0x00, 0x11, 0x1f]), // ]
    Glyph([0x02, 0x01, 0x02]), // ^
    Glyph([0x10, 0x10, 0x10]), // _
    Glyph([0x01, 0x02, 0x00]), // `
];

/// `'{'..='~'`
#[rustfmt::skip]
const BRACE_GLYPHS: [Glyph; LAST_CHAR - FIRST_BRACE_CHAR + 1] = [
    Glyph([0x04, 0x1b, 0x11]), // {
    Glyph([0x00, 0x1f, 0x00]), // |
    Glyph([0x11, 0x1b, 0x04]), // }
    Glyph([0x02, 0x04, 0x02]), // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_printable_ascii_character_has_a_glyph() {
        for character in ' '..='~' {
            assert!(glyph_of(character).is_ok(), "missing glyph for {character:?}");
        }
    }

    #[test]
    fn glyph_bytes_line_up_with_their_characters() {
        let expected = [
            (' ', [0x00, 0x00, 0x00]),
            ('0', [0x1f, 0x11, 0x1f]),
            ('A', [0x1e, 0x05, 0x1e]),
            ('Z', [0x19, 0x15, 0x13]),
            ('`', [0x01, 0x02, 0x00]),
            ('{', [0x04, 0x1b, 0x11]),
            ('|', [0x00, 0x1f, 0x00]),
            ('}', [0x11, 0x1b, 0x04]),
            ('~', [0x02, 0x04, 0x02]),
        ];
        for (character, columns) in expected {
            assert_eq!(glyph_of(character).ok(), Some(Glyph(columns)), "{character:?}");
        }
    }

    #[test]
    fn lowercase_shares_uppercase_but_braces_do_not() {
        assert_eq!(glyph_of('z').ok(), glyph_of('Z').ok());
        assert_eq!(glyph_of('a').ok(), glyph_of('A').ok());
        assert_ne!(glyph_of('{').ok(), glyph_of('Z').ok());
        assert_ne!(glyph_of('~').ok(), glyph_of('}').ok());
    }

    #[test]
    fn control_characters_are_unsupported() {
        assert!(matches!(
            glyph_of('\n'),
            Err(Error::UnsupportedCharacter { character: '\n' })
        ));
        assert!(glyph_of('\u{7f}').is_err());
    }

    #[test]
    fn glyphs_only_use_five_rows() {
        for glyph in MAIN_GLYPHS.iter().chain(&BRACE_GLYPHS) {
            assert!(glyph.columns().iter().all(|byte| byte & !0x1F == 0), "{glyph:?}");
        }
    }

    #[test]
    fn fallback_is_blank() {
        assert_eq!(glyph_or_blank('\u{2603}'), Glyph::BLANK);
        assert_eq!(glyph_or_blank(' '), Glyph::BLANK);
    }

    #[test]
    fn column_mask_reads_top_row_first() {
        let glyph = Glyph([0b0_0001, 0b1_0000, 0]);
        assert_eq!(glyph.column_mask(0), [true, false, false, false, false]);
        assert_eq!(glyph.column_mask(1), [false, false, false, false, true]);
        assert!(!glyph.is_lit(3, 0));
    }
}
