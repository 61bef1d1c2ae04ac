//! Desktop stand-in for the cylinder, drawn with `embedded-graphics`.
//!
//! The cylinder is unrolled into a flat 400×100 canvas: each cell is an
//! 18×18 square inside a 20×20 slot, leaving a 1-pixel black gutter on every
//! side. [`paint_cells`] works on any [`DrawTarget`], so the layout can be
//! checked off-screen; the `window` feature adds [`SimulatorSink`], which
//! shows the canvas in an SDL window.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, Point, Primitive, RgbColor, Size};
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::Drawable;
use smart_leds::RGB8;

use crate::cylinder::{COLUMNS, ROWS};
use crate::led2d::CylinderFrame;
use crate::led_strip::ToRgb888;

/// Pixels per cell slot on the canvas.
pub const CELL_PITCH: u32 = 20;

/// Side of the lit square inside a slot.
pub const CELL_SIZE: u32 = CELL_PITCH - 2;

/// Canvas size for the whole unrolled cylinder.
pub const CANVAS_SIZE: Size = Size::new(COLUMNS as u32 * CELL_PITCH, ROWS as u32 * CELL_PITCH);

/// Screen rectangle for the cell at `(row, column)`.
#[must_use]
pub const fn cell_rectangle(row: usize, column: usize) -> Rectangle {
    Rectangle::new(
        Point::new(
            (column as u32 * CELL_PITCH + 1) as i32,
            (row as u32 * CELL_PITCH + 1) as i32,
        ),
        Size::new(CELL_SIZE, CELL_SIZE),
    )
}

/// Fill the cell at `(row, column)` with `color`.
///
/// # Errors
///
/// Whatever the draw target reports.
pub fn paint_cell<T>(target: &mut T, row: usize, column: usize, color: RGB8) -> Result<(), T::Error>
where
    T: DrawTarget<Color = Rgb888>,
{
    cell_rectangle(row, column)
        .into_styled(PrimitiveStyle::with_fill(color.to_rgb888()))
        .draw(target)
}

/// Clear `target` to black and paint every cell of `frame`.
///
/// # Errors
///
/// Whatever the draw target reports.
pub fn paint_cells<T>(target: &mut T, frame: &CylinderFrame) -> Result<(), T::Error>
where
    T: DrawTarget<Color = Rgb888>,
{
    target.clear(Rgb888::BLACK)?;
    for (row, column, color) in frame.cells() {
        paint_cell(target, row, column, color)?;
    }
    Ok(())
}

#[cfg(feature = "window")]
pub use window::SimulatorSink;

#[cfg(feature = "window")]
mod window {
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics_simulator::{
        OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    };
    use smart_leds::RGB8;

    use super::{CANVAS_SIZE, paint_cell, paint_cells};
    use crate::cylinder::physical_index;
    use crate::led2d::CylinderFrame;
    use crate::shutdown::ShutdownSignal;
    use crate::sink::OutputSink;
    use crate::{Error, Result};

    /// Shows the cylinder in a desktop window.
    ///
    /// Closing the window requests shutdown through the shared
    /// [`ShutdownSignal`]; the frame being rendered when that happens is
    /// still completed.
    pub struct SimulatorSink {
        display: SimulatorDisplay<Rgb888>,
        window: Window,
        shutdown: ShutdownSignal,
    }

    impl SimulatorSink {
        /// Open a window titled `title`.
        #[must_use]
        pub fn new(title: &str, shutdown: ShutdownSignal) -> Self {
            let output_settings = OutputSettingsBuilder::new().scale(1).build();
            log::info!(
                "opening simulator window {}x{}",
                CANVAS_SIZE.width,
                CANVAS_SIZE.height
            );
            Self {
                display: SimulatorDisplay::new(CANVAS_SIZE),
                window: Window::new(title, &output_settings),
                shutdown,
            }
        }

        fn present(&mut self) {
            self.window.update(&self.display);
            for event in self.window.events() {
                if matches!(event, SimulatorEvent::Quit) {
                    log::info!("simulator window closed");
                    self.shutdown.request();
                }
            }
        }
    }

    fn canvas_error(err: impl core::fmt::Debug) -> Error {
        Error::HardwareWrite {
            detail: format!("simulator canvas: {err:?}"),
        }
    }

    impl OutputSink for SimulatorSink {
        fn render(&mut self, frame: &CylinderFrame) -> Result<()> {
            paint_cells(&mut self.display, frame).map_err(canvas_error)?;
            self.present();
            Ok(())
        }

        fn draw_single(&mut self, row: usize, column: usize, color: Option<RGB8>) -> Result<()> {
            physical_index(row, column)?;
            let Some(color) = color else {
                return Ok(());
            };
            paint_cell(&mut self.display, row, column, color).map_err(canvas_error)?;
            self.present();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_fits_every_cell() {
        let last = cell_rectangle(ROWS - 1, COLUMNS - 1);
        assert_eq!(CANVAS_SIZE, Size::new(400, 100));
        assert_eq!(last.top_left, Point::new(381, 81));
        assert_eq!(last.bottom_right(), Some(Point::new(398, 98)));
    }
}
