use derive_more::{Display, Error, From};

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by the cylinder display stack.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A row or column outside the 5×20 frame was passed to the frame buffer
    /// or the coordinate mapper.
    #[display("invalid coordinate: row {row}, column {column}")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The font has no glyph for this character.
    #[display("unsupported character {character:?}")]
    UnsupportedCharacter {
        /// The character that has no glyph.
        character: char,
    },

    /// The strip transport rejected a write.
    #[display("hardware write failed: {detail}")]
    HardwareWrite {
        /// Transport-specific description of the failure.
        detail: String,
    },

    /// An interrupt or a window-close event asked the display to stop.
    #[display("shutdown requested")]
    ShutdownRequested,

    /// Opening a device or writing a preview file failed.
    #[display("i/o error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Encoding a PNG preview failed.
    #[display("png encoding error: {_0}")]
    #[from]
    Png(png::EncodingError),
}

impl Error {
    /// True for [`Error::ShutdownRequested`].
    #[must_use]
    pub const fn is_shutdown(&self) -> bool {
        matches!(self, Self::ShutdownRequested)
    }
}
