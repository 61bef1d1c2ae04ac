//! Pixel-by-pixel effects that run between text scrolls.
//!
//! Unlike [`scroll_text`](crate::scroll::scroll_text), these draw straight to
//! the sink with [`OutputSink::draw_single`] and leave the frame buffer alone,
//! so call [`clear_display`] afterwards to get back to a known state.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;
use smart_leds::RGB8;

use crate::Result;
use crate::cylinder::{COLUMNS, LED_COUNT, ROWS};
use crate::led2d::CylinderFrame;
use crate::led_strip::unpack_rgb;
use crate::scroll::Pacer;
use crate::shutdown::ShutdownSignal;
use crate::sink::OutputSink;

/// Packed sparkle colors; white (`0xFFFFFF`) is left out.
const SPARKLE_COLORS: Range<u32> = 0..0xFF_FF_FF;

/// Light every cell in `color`, row by row from the top-left, waiting `wait`
/// after each one.
///
/// # Errors
///
/// [`Error::ShutdownRequested`](crate::Error::ShutdownRequested) if shutdown
/// is requested part way through, or the sink's error.
pub fn color_wipe<S, P>(
    sink: &mut S,
    pacer: &mut P,
    shutdown: &ShutdownSignal,
    color: RGB8,
    wait: Duration,
) -> Result<()>
where
    S: OutputSink + ?Sized,
    P: Pacer + ?Sized,
{
    log::info!("color wipe ({}, {}, {})", color.r, color.g, color.b);
    for cell in 0..LED_COUNT {
        shutdown.check()?;
        sink.draw_single(cell / COLUMNS, cell % COLUMNS, Some(color))?;
        pacer.wait(wait);
    }
    Ok(())
}

/// Draw `cycles` random colors on random cells, waiting `wait` after each one.
///
/// # Errors
///
/// [`Error::ShutdownRequested`](crate::Error::ShutdownRequested) if shutdown
/// is requested part way through, or the sink's error.
pub fn sparkle<S, P, R>(
    sink: &mut S,
    pacer: &mut P,
    shutdown: &ShutdownSignal,
    rng: &mut R,
    cycles: usize,
    wait: Duration,
) -> Result<()>
where
    S: OutputSink + ?Sized,
    P: Pacer + ?Sized,
    R: Rng,
{
    log::info!("sparkle for {cycles} cycles");
    for _ in 0..cycles {
        shutdown.check()?;
        let row = rng.gen_range(0..ROWS);
        let column = rng.gen_range(0..COLUMNS);
        let color = unpack_rgb(rng.gen_range(SPARKLE_COLORS));
        sink.draw_single(row, column, Some(color))?;
        pacer.wait(wait);
    }
    Ok(())
}

/// Blank the frame buffer and show it.
///
/// # Errors
///
/// The sink's error.
pub fn clear_display<S>(frame: &mut CylinderFrame, sink: &mut S) -> Result<()>
where
    S: OutputSink + ?Sized,
{
    frame.clear();
    sink.render(frame)
}
