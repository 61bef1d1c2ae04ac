//! Output sinks: where a [`CylinderFrame`] ends up.
//!
//! Every animation talks to an [`OutputSink`] and never to hardware directly:
//!
//! - [`StripSink`] maps cells onto the physical strip and writes them through
//!   any [`SmartLedsWrite`](smart_leds::SmartLedsWrite) transport,
//! - [`SimulatorSink`] (feature `window`) paints the matrix into a desktop window,
//! - [`PreviewSink`] records frames and saves them as an animated PNG.
//!
//! All three render the same logical frame, so a program checked in the
//! simulator lights the same LEDs on the cylinder.

use smart_leds::RGB8;

use crate::Result;
use crate::led2d::CylinderFrame;

pub mod preview;
pub mod simulator;
pub mod strip;

pub use preview::PreviewSink;
#[cfg(feature = "window")]
pub use simulator::SimulatorSink;
pub use simulator::paint_cells;
pub use strip::StripSink;

/// A display that can show the cylinder's frame.
pub trait OutputSink {
    /// Show every cell of `frame`.
    ///
    /// # Errors
    ///
    /// [`Error::HardwareWrite`](crate::Error::HardwareWrite) if the transport
    /// fails; the frame may be partially shown.
    fn render(&mut self, frame: &CylinderFrame) -> Result<()>;

    /// Write one pixel and show it immediately. `None` leaves the pixel as it is.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`](crate::Error::InvalidCoordinate) for cells
    /// outside the matrix, or a transport error.
    fn draw_single(&mut self, row: usize, column: usize, color: Option<RGB8>) -> Result<()>;

    /// Release the sink. Sinks that buffer output write it here.
    ///
    /// # Errors
    ///
    /// Whatever the sink's final write reports.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn render(&mut self, frame: &CylinderFrame) -> Result<()> {
        (**self).render(frame)
    }

    fn draw_single(&mut self, row: usize, column: usize, color: Option<RGB8>) -> Result<()> {
        (**self).draw_single(row, column, color)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<T: OutputSink + ?Sized> OutputSink for Box<T> {
    fn render(&mut self, frame: &CylinderFrame) -> Result<()> {
        (**self).render(frame)
    }

    fn draw_single(&mut self, row: usize, column: usize, color: Option<RGB8>) -> Result<()> {
        (**self).draw_single(row, column, color)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
