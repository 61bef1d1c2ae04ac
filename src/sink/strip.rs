//! The physical cylinder: one serpentine WS2812 strip.

use smart_leds::{RGB8, SmartLedsWrite};

use crate::cylinder::{LED_COUNT, physical_index};
use crate::led2d::CylinderFrame;
use crate::led_strip::Frame1d;
use crate::sink::OutputSink;
use crate::{Error, Result};

/// Renders frames onto the strip through a [`SmartLedsWrite`] transport.
///
/// The sink keeps the last colors it sent in strip order. Every update
/// writes all [`LED_COUNT`] pixels in one call, so the strip only latches
/// once the whole buffer is on the wire.
///
/// ```rust
/// use led_cylinder::led2d::CylinderFrame;
/// use led_cylinder::led_strip::colors;
/// use led_cylinder::sink::{OutputSink, StripSink};
/// use smart_leds::{SmartLedsWrite, RGB8};
///
/// #[derive(Default)]
/// struct Recorder(Vec<RGB8>);
///
/// impl SmartLedsWrite for Recorder {
///     type Error = core::convert::Infallible;
///     type Color = RGB8;
///     fn write<T, I>(&mut self, pixels: T) -> Result<(), Self::Error>
///     where
///         T: IntoIterator<Item = I>,
///         I: Into<RGB8>,
///     {
///         self.0 = pixels.into_iter().map(Into::into).collect();
///         Ok(())
///     }
/// }
///
/// let mut sink = StripSink::new(Recorder::default());
/// let mut frame = CylinderFrame::new();
/// frame[(1, 0)] = colors::RED; // column 1, row 0
/// sink.render(&frame)?;
/// assert_eq!(sink.strip()[9], colors::RED);
/// # Ok::<(), led_cylinder::Error>(())
/// ```
pub struct StripSink<D> {
    driver: D,
    strip: Frame1d<LED_COUNT>,
}

impl<D> StripSink<D>
where
    D: SmartLedsWrite<Color = RGB8>,
    D::Error: core::fmt::Debug,
{
    /// Wrap a transport. Nothing is written until the first render.
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            strip: Frame1d::new(),
        }
    }

    /// Colors last sent, in strip order.
    #[must_use]
    pub const fn strip(&self) -> &Frame1d<LED_COUNT> {
        &self.strip
    }

    /// Give the transport back.
    pub fn into_inner(self) -> D {
        self.driver
    }

    fn flush(&mut self) -> Result<()> {
        self.driver
            .write(self.strip.iter().copied())
            .map_err(|err| {
                log::warn!("strip write failed: {err:?}");
                Error::HardwareWrite {
                    detail: format!("{err:?}"),
                }
            })
    }
}

impl<D> OutputSink for StripSink<D>
where
    D: SmartLedsWrite<Color = RGB8>,
    D::Error: core::fmt::Debug,
{
    fn render(&mut self, frame: &CylinderFrame) -> Result<()> {
        for (row, column, color) in frame.cells() {
            self.strip[physical_index(row, column)?] = color;
        }
        self.flush()
    }

    fn draw_single(&mut self, row: usize, column: usize, color: Option<RGB8>) -> Result<()> {
        let index = physical_index(row, column)?;
        let Some(color) = color else {
            return Ok(());
        };
        self.strip[index] = color;
        self.flush()
    }
}
