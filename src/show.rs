//! The cylinder's endless show: scroll a message, sparkle, wipe, repeat.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use smart_leds::RGB8;

use crate::effects::{clear_display, color_wipe, sparkle};
use crate::led2d::CylinderFrame;
use crate::led_strip::{colors, unpack_rgb};
use crate::scroll::{Pacer, scroll_text};
use crate::shutdown::ShutdownSignal;
use crate::sink::OutputSink;
use crate::{Error, Result};

/// Message scrolled by default.
pub const DEFAULT_TEXT: &str = "LED MATRIX CYLINDER";

/// What the show plays and how fast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowSettings {
    /// Scrolled message.
    pub text: String,
    /// Time per scroll column.
    pub scroll_tick: Duration,
    /// Random pixels drawn by the sparkle effect.
    pub sparkle_cycles: usize,
    /// Time per sparkle pixel.
    pub sparkle_wait: Duration,
    /// Wipe colors, in order.
    pub wipe_colors: Vec<RGB8>,
    /// Time per wiped pixel.
    pub wipe_wait: Duration,
    /// Time per pixel of the black wipe run on exit.
    pub exit_wipe_wait: Duration,
}

impl Default for ShowSettings {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_owned(),
            scroll_tick: Duration::from_millis(40),
            sparkle_cycles: 5000,
            sparkle_wait: Duration::from_millis(1),
            wipe_colors: vec![
                RGB8::new(0, 255, 0),
                RGB8::new(0, 0, 255),
                RGB8::new(255, 0, 0),
            ],
            wipe_wait: Duration::from_millis(25),
            exit_wipe_wait: Duration::from_millis(10),
        }
    }
}

/// Halved packed scroll colors; doubling spans `0x000000..=0xFFFFFE`.
const SCROLL_COLOR_HALVES: RangeInclusive<u32> = 0..=0xFF_FF_FF / 2;

/// A random color for the scrolled text. The packed `0xRRGGBB` value is
/// always even, so the blue channel's lowest bit is clear.
pub fn random_scroll_color<R: Rng>(rng: &mut R) -> RGB8 {
    unpack_rgb(rng.gen_range(SCROLL_COLOR_HALVES) * 2)
}

/// Everything the show needs to draw.
pub struct Show<'a, S: ?Sized, P: ?Sized, R> {
    /// Frame buffer shared by every segment.
    pub frame: &'a mut CylinderFrame,
    /// Where frames go.
    pub sink: &'a mut S,
    /// Blocks between steps.
    pub pacer: &'a mut P,
    /// Stops the show between steps.
    pub shutdown: &'a ShutdownSignal,
    /// Source of scroll and sparkle colors.
    pub rng: &'a mut R,
}

impl<S, P, R> Show<'_, S, P, R>
where
    S: OutputSink + ?Sized,
    P: Pacer + ?Sized,
    R: Rng,
{
    /// Play every segment once: scroll, sparkle, clear, wipes, clear.
    ///
    /// A hardware failure ends only the segment it happened in; the show
    /// moves on to the next one.
    ///
    /// # Errors
    ///
    /// [`Error::ShutdownRequested`] once shutdown is requested, or any
    /// non-hardware error from a segment.
    pub fn run_once(&mut self, settings: &ShowSettings) -> Result<()> {
        let color = random_scroll_color(self.rng);
        segment(
            "scroll",
            scroll_text(
                self.frame,
                self.sink,
                self.pacer,
                self.shutdown,
                &settings.text,
                color,
                settings.scroll_tick,
            )
            .and_then(|outcome| outcome.into_result().map(drop)),
        )?;
        segment(
            "sparkle",
            sparkle(
                self.sink,
                self.pacer,
                self.shutdown,
                self.rng,
                settings.sparkle_cycles,
                settings.sparkle_wait,
            ),
        )?;
        segment("clear", clear_display(self.frame, self.sink))?;
        for &wipe_color in &settings.wipe_colors {
            segment(
                "wipe",
                color_wipe(
                    self.sink,
                    self.pacer,
                    self.shutdown,
                    wipe_color,
                    settings.wipe_wait,
                ),
            )?;
        }
        segment("clear", clear_display(self.frame, self.sink))?;
        self.shutdown.check()
    }

    /// Repeat [`Self::run_once`] until shutdown is requested.
    ///
    /// # Errors
    ///
    /// Any error other than [`Error::ShutdownRequested`] from a segment.
    pub fn run(&mut self, settings: &ShowSettings) -> Result<()> {
        let mut rounds: u64 = 0;
        loop {
            match self.run_once(settings) {
                Ok(()) => {
                    rounds += 1;
                    log::debug!("show round {rounds} done");
                }
                Err(Error::ShutdownRequested) => {
                    log::info!("show stopped after {rounds} full rounds");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Black wipe for leaving the LEDs dark on exit. Runs even after shutdown
/// has been requested.
///
/// # Errors
///
/// The sink's error.
pub fn clear_on_exit<S, P>(sink: &mut S, pacer: &mut P, settings: &ShowSettings) -> Result<()>
where
    S: OutputSink + ?Sized,
    P: Pacer + ?Sized,
{
    color_wipe(
        sink,
        pacer,
        &ShutdownSignal::new(),
        colors::BLACK,
        settings.exit_wipe_wait,
    )
}

fn segment(name: &str, result: Result<()>) -> Result<()> {
    match result {
        Err(Error::HardwareWrite { detail }) => {
            log::warn!("{name} segment aborted: {detail}");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::led_strip::pack_rgb;

    #[test]
    fn scroll_colors_are_even() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let packed = pack_rgb(random_scroll_color(&mut rng));
            assert_eq!(packed % 2, 0);
            assert!(packed < 0xFF_FF_FF);
        }
    }

    #[test]
    fn scroll_colors_reach_the_largest_even_value() {
        assert_eq!(*SCROLL_COLOR_HALVES.start(), 0);
        assert_eq!(SCROLL_COLOR_HALVES.end() * 2, 0xFF_FF_FE);
    }

    #[test]
    fn hardware_failures_end_only_the_segment() {
        let failed = Err(Error::HardwareWrite {
            detail: "bus gone".to_owned(),
        });
        assert!(segment("wipe", failed).is_ok());
        assert!(matches!(
            segment("wipe", Err(Error::ShutdownRequested)),
            Err(Error::ShutdownRequested)
        ));
    }

    #[test]
    fn defaults_match_the_classic_show() {
        let settings = ShowSettings::default();
        assert_eq!(settings.text, "LED MATRIX CYLINDER");
        assert_eq!(settings.scroll_tick, Duration::from_millis(40));
        assert_eq!(settings.wipe_colors[0], RGB8::new(0, 255, 0));
        assert_eq!(settings.sparkle_cycles, 5000);
    }
}
