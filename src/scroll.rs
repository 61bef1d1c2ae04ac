//! Scrolling text across the cylinder.
//!
//! Text enters at the right edge (column 19) and moves left one column per
//! tick. Each character contributes its three glyph columns followed by one
//! blank spacer column; after the last character, a full matrix width of
//! blank columns pushes the text off the left edge. A string of `n`
//! characters therefore takes `4 * n + 20` ticks.
//!
//! ```rust
//! use led_cylinder::led_strip::colors;
//! use led_cylinder::scroll::ScrollColumns;
//!
//! let columns = ScrollColumns::new("HI", colors::RED);
//! assert_eq!(columns.len(), 28);
//! ```
//!
//! [`ScrollColumns`] only says *what* column comes next; [`scroll_text`]
//! drives a frame buffer and an [`OutputSink`] with it, one tick at a time:
//! write the right edge, render, wait, shift left.

use core::iter::FusedIterator;
use std::time::Duration;

use smart_leds::RGB8;

use crate::cylinder::{COLUMNS, ROWS};
use crate::font::{GLYPH_WIDTH, Glyph, glyph_or_blank};
use crate::led2d::CylinderFrame;
use crate::led_strip::colors;
use crate::shutdown::ShutdownSignal;
use crate::sink::OutputSink;
use crate::{Error, Result};

/// One column of colors, top row first.
pub type Column = [RGB8; ROWS];

const BLANK_COLUMN: Column = [colors::BLACK; ROWS];

/// Columns per character: the glyph plus one spacer.
const COLUMNS_PER_CHAR: usize = GLYPH_WIDTH + 1;

/// Where [`ScrollColumns`] is in the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    /// Next column is glyph column `sub_column` of character `char_index`.
    EmittingGlyph {
        /// Index into the text's characters.
        char_index: usize,
        /// 0..3, left to right.
        sub_column: usize,
    },
    /// Next column is the blank spacer after character `char_index`.
    EmittingSpacer {
        /// Index into the text's characters.
        char_index: usize,
    },
    /// `remaining` blank columns still to come after the text.
    FlushingTail {
        /// Blank columns left.
        remaining: usize,
    },
    /// Nothing left.
    Done,
}

/// Iterator over the columns revealed while `text` scrolls through.
#[derive(Clone, Debug)]
pub struct ScrollColumns {
    glyphs: Vec<Glyph>,
    color: RGB8,
    state: ScrollState,
}

impl ScrollColumns {
    /// Columns for `text` drawn in `color`. Characters with no glyph scroll
    /// through as blank space.
    #[must_use]
    pub fn new(text: &str, color: RGB8) -> Self {
        let glyphs: Vec<Glyph> = text.chars().map(glyph_or_blank).collect();
        let state = if glyphs.is_empty() {
            ScrollState::FlushingTail { remaining: COLUMNS }
        } else {
            ScrollState::EmittingGlyph {
                char_index: 0,
                sub_column: 0,
            }
        };
        Self {
            glyphs,
            color,
            state,
        }
    }

    /// Where the iterator is now.
    #[must_use]
    pub const fn state(&self) -> ScrollState {
        self.state
    }

    fn glyph_column(&self, glyph: Glyph, sub_column: usize) -> Column {
        glyph
            .column_mask(sub_column)
            .map(|lit| if lit { self.color } else { colors::BLACK })
    }

    fn after_text(&self, char_index: usize) -> ScrollState {
        if char_index + 1 < self.glyphs.len() {
            ScrollState::EmittingGlyph {
                char_index: char_index + 1,
                sub_column: 0,
            }
        } else {
            ScrollState::FlushingTail { remaining: COLUMNS }
        }
    }
}

impl Iterator for ScrollColumns {
    type Item = Column;

    fn next(&mut self) -> Option<Column> {
        let (column, next_state) = match self.state {
            ScrollState::EmittingGlyph {
                char_index,
                sub_column,
            } => {
                let column = self.glyph_column(self.glyphs[char_index], sub_column);
                let next_state = if sub_column + 1 < GLYPH_WIDTH {
                    ScrollState::EmittingGlyph {
                        char_index,
                        sub_column: sub_column + 1,
                    }
                } else {
                    ScrollState::EmittingSpacer { char_index }
                };
                (column, next_state)
            }
            ScrollState::EmittingSpacer { char_index } => {
                (BLANK_COLUMN, self.after_text(char_index))
            }
            ScrollState::FlushingTail { remaining } => {
                let next_state = if remaining > 1 {
                    ScrollState::FlushingTail {
                        remaining: remaining - 1,
                    }
                } else {
                    ScrollState::Done
                };
                (BLANK_COLUMN, next_state)
            }
            ScrollState::Done => return None,
        };
        self.state = next_state;
        Some(column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state {
            ScrollState::EmittingGlyph {
                char_index,
                sub_column,
            } => (self.glyphs.len() - char_index) * COLUMNS_PER_CHAR - sub_column + COLUMNS,
            ScrollState::EmittingSpacer { char_index } => {
                (self.glyphs.len() - char_index - 1) * COLUMNS_PER_CHAR + 1 + COLUMNS
            }
            ScrollState::FlushingTail { remaining } => remaining,
            ScrollState::Done => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScrollColumns {}

impl FusedIterator for ScrollColumns {}

/// Blocks between animation steps.
pub trait Pacer {
    /// Wait for `duration`.
    fn wait(&mut self, duration: Duration);
}

/// Sleeps the current thread. Zero durations return immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn wait(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration);
    }
}

/// How a scroll ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum ScrollOutcome {
    /// Every column scrolled through.
    Completed {
        /// Ticks run.
        ticks: usize,
    },
    /// Shutdown was requested; the scroll stopped between ticks.
    Interrupted {
        /// Ticks run before stopping.
        ticks: usize,
    },
}

impl ScrollOutcome {
    /// Ticks run, however the scroll ended.
    #[must_use]
    pub const fn ticks(self) -> usize {
        match self {
            Self::Completed { ticks } | Self::Interrupted { ticks } => ticks,
        }
    }

    /// `Ok(ticks)` for a completed scroll, for use in `?` chains.
    ///
    /// # Errors
    ///
    /// [`Error::ShutdownRequested`] if the scroll was interrupted.
    pub const fn into_result(self) -> Result<usize> {
        match self {
            Self::Completed { ticks } => Ok(ticks),
            Self::Interrupted { .. } => Err(Error::ShutdownRequested),
        }
    }
}

/// Scroll `text` across the cylinder in `color`, one column per `tick`.
///
/// `frame` is not cleared first; whatever it holds scrolls off to the left
/// as the text comes in. When the scroll completes, the frame is blank.
///
/// # Errors
///
/// Sink errors end the scroll immediately and are returned as is.
pub fn scroll_text<S, P>(
    frame: &mut CylinderFrame,
    sink: &mut S,
    pacer: &mut P,
    shutdown: &ShutdownSignal,
    text: &str,
    color: RGB8,
    tick: Duration,
) -> Result<ScrollOutcome>
where
    S: OutputSink + ?Sized,
    P: Pacer + ?Sized,
{
    let columns = ScrollColumns::new(text, color);
    log::info!("scrolling {text:?} over {} ticks", columns.len());

    let mut ticks = 0;
    for column in columns {
        if shutdown.is_requested() {
            log::info!("scroll interrupted after {ticks} ticks");
            return Ok(ScrollOutcome::Interrupted { ticks });
        }
        frame.set_column(COLUMNS - 1, column)?;
        sink.render(frame)?;
        pacer.wait(tick);
        frame.shift_left();
        ticks += 1;
        log::debug!("tick {ticks}");
    }
    Ok(ScrollOutcome::Completed { ticks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_only_flushes() {
        let columns: Vec<Column> = ScrollColumns::new("", colors::WHITE).collect();
        assert_eq!(columns.len(), COLUMNS);
        assert!(columns.iter().all(|column| *column == BLANK_COLUMN));
    }

    #[test]
    fn states_follow_glyph_spacer_tail() {
        let mut columns = ScrollColumns::new("I", colors::WHITE);
        let mut states = vec![columns.state()];
        while columns.next().is_some() {
            states.push(columns.state());
        }
        assert_eq!(
            &states[..5],
            &[
                ScrollState::EmittingGlyph {
                    char_index: 0,
                    sub_column: 0,
                },
                ScrollState::EmittingGlyph {
                    char_index: 0,
                    sub_column: 1,
                },
                ScrollState::EmittingGlyph {
                    char_index: 0,
                    sub_column: 2,
                },
                ScrollState::EmittingSpacer { char_index: 0 },
                ScrollState::FlushingTail { remaining: COLUMNS },
            ]
        );
        assert_eq!(states.last(), Some(&ScrollState::Done));
        assert_eq!(states.len(), 4 + COLUMNS + 1);
    }

    #[test]
    fn length_counts_down_exactly() {
        let mut columns = ScrollColumns::new("AB", colors::WHITE);
        for expected in (0..=28).rev() {
            assert_eq!(columns.len(), expected);
            columns.next();
        }
        assert_eq!(columns.next(), None);
    }

    #[test]
    fn glyph_columns_use_the_text_color() {
        let first = ScrollColumns::new("I", colors::BLUE).next();
        // 'I' column 0 is 0x11: rows 0 and 4
        assert_eq!(
            first,
            Some([
                colors::BLUE,
                colors::BLACK,
                colors::BLACK,
                colors::BLACK,
                colors::BLUE,
            ])
        );
    }

    #[test]
    fn interrupted_outcome_becomes_shutdown_error() {
        assert_eq!(ScrollOutcome::Completed { ticks: 3 }.into_result().ok(), Some(3));
        let interrupted = ScrollOutcome::Interrupted { ticks: 2 };
        assert_eq!(interrupted.ticks(), 2);
        assert!(matches!(interrupted.into_result(), Err(Error::ShutdownRequested)));
    }
}
