#![allow(missing_docs, reason = "integration tests")]
//! Effects and the show playlist, run against a sink that counts what it sees.

use std::time::Duration;

use led_cylinder::cylinder::{COLUMNS, LED_COUNT};
use led_cylinder::effects::{clear_display, color_wipe, sparkle};
use led_cylinder::led2d::CylinderFrame;
use led_cylinder::led_strip::{RGB8, colors};
use led_cylinder::scroll::Pacer;
use led_cylinder::show::{Show, ShowSettings, clear_on_exit};
use led_cylinder::shutdown::ShutdownSignal;
use led_cylinder::sink::{OutputSink, PreviewSink};
use led_cylinder::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct CountingPacer(usize);

impl Pacer for CountingPacer {
    fn wait(&mut self, _duration: Duration) {
        self.0 += 1;
    }
}

/// Fails every `draw_single`; renders succeed.
#[derive(Default)]
struct FlakySink {
    renders: usize,
    failed_draws: usize,
}

impl OutputSink for FlakySink {
    fn render(&mut self, _frame: &CylinderFrame) -> Result<()> {
        self.renders += 1;
        Ok(())
    }

    fn draw_single(&mut self, _row: usize, _column: usize, _color: Option<RGB8>) -> Result<()> {
        self.failed_draws += 1;
        Err(Error::HardwareWrite {
            detail: "no strip".to_owned(),
        })
    }
}

fn quick_settings() -> ShowSettings {
    ShowSettings {
        text: "OK".to_owned(),
        scroll_tick: Duration::ZERO,
        sparkle_cycles: 10,
        sparkle_wait: Duration::ZERO,
        wipe_wait: Duration::ZERO,
        exit_wipe_wait: Duration::ZERO,
        ..ShowSettings::default()
    }
}

#[test]
fn color_wipe_fills_row_by_row() {
    let mut sink = PreviewSink::in_memory(1);
    let mut pacer = CountingPacer::default();
    color_wipe(
        &mut sink,
        &mut pacer,
        &ShutdownSignal::new(),
        colors::GREEN,
        Duration::ZERO,
    )
    .expect("wipe succeeds");

    assert_eq!(pacer.0, LED_COUNT);
    assert_eq!(sink.frames().len(), LED_COUNT);
    // After 21 pixels the whole top row and the first cell of row 1 are lit.
    let frame = sink.frames()[COLUMNS];
    assert!((0..COLUMNS).all(|column| frame[(column, 0)] == colors::GREEN));
    assert_eq!(frame[(0, 1)], colors::GREEN);
    assert_eq!(frame[(1, 1)], colors::BLACK);
    assert_eq!(sink.frames()[LED_COUNT - 1], CylinderFrame::filled(colors::GREEN));
}

#[test]
fn color_wipe_stops_on_shutdown() {
    let shutdown = ShutdownSignal::new();
    shutdown.request();
    let mut sink = PreviewSink::in_memory(1);
    let result = color_wipe(
        &mut sink,
        &mut CountingPacer::default(),
        &shutdown,
        colors::RED,
        Duration::ZERO,
    );
    assert!(matches!(result, Err(Error::ShutdownRequested)));
    assert!(sink.frames().is_empty());
}

#[test]
fn sparkle_draws_one_pixel_per_cycle() {
    let mut sink = PreviewSink::in_memory(1);
    let mut pacer = CountingPacer::default();
    let mut rng = StdRng::seed_from_u64(42);
    sparkle(
        &mut sink,
        &mut pacer,
        &ShutdownSignal::new(),
        &mut rng,
        50,
        Duration::ZERO,
    )
    .expect("sparkle succeeds");

    assert_eq!(sink.frames().len(), 50);
    assert_eq!(pacer.0, 50);
}

#[test]
fn clear_display_renders_a_blank_frame() {
    let mut frame = CylinderFrame::filled(colors::WHITE);
    let mut sink = PreviewSink::in_memory(1);
    clear_display(&mut frame, &mut sink).expect("clear succeeds");
    assert!(frame.is_blank());
    assert!(sink.frames()[0].is_blank());
}

#[test]
fn one_round_plays_every_segment() {
    let settings = quick_settings();
    let mut frame = CylinderFrame::new();
    let mut sink = PreviewSink::in_memory(1);
    let mut pacer = CountingPacer::default();
    let mut rng = StdRng::seed_from_u64(1);
    let shutdown = ShutdownSignal::new();

    Show {
        frame: &mut frame,
        sink: &mut sink,
        pacer: &mut pacer,
        shutdown: &shutdown,
        rng: &mut rng,
    }
    .run_once(&settings)
    .expect("round completes");

    let scroll_ticks = 4 * 2 + COLUMNS;
    let wipes = settings.wipe_colors.len() * LED_COUNT;
    assert_eq!(pacer.0, scroll_ticks + 10 + wipes);
    // scroll + sparkle + clear + wipes + clear
    assert_eq!(sink.frames().len(), scroll_ticks + 10 + 1 + wipes + 1);
    assert!(sink.frames().last().expect("frames recorded").is_blank());
}

#[test]
fn hardware_failures_do_not_stop_the_round() {
    let mut sink = FlakySink::default();
    let mut rng = StdRng::seed_from_u64(3);
    let shutdown = ShutdownSignal::new();

    Show {
        frame: &mut CylinderFrame::new(),
        sink: &mut sink,
        pacer: &mut CountingPacer::default(),
        shutdown: &shutdown,
        rng: &mut rng,
    }
    .run_once(&quick_settings())
    .expect("round completes despite failures");

    // Sparkle and each of the three wipes fail on their first pixel.
    assert_eq!(sink.failed_draws, 4);
    assert_eq!(sink.renders, 4 * 2 + COLUMNS + 2);
}

#[test]
fn run_returns_once_shutdown_is_requested() {
    let shutdown = ShutdownSignal::new();
    shutdown.request();
    let mut sink = PreviewSink::in_memory(1);
    let mut rng = StdRng::seed_from_u64(5);

    Show {
        frame: &mut CylinderFrame::new(),
        sink: &mut sink,
        pacer: &mut CountingPacer::default(),
        shutdown: &shutdown,
        rng: &mut rng,
    }
    .run(&quick_settings())
    .expect("shutdown ends the show cleanly");

    assert!(sink.frames().is_empty());
}

#[test]
fn clear_on_exit_wipes_black_after_shutdown() {
    let shutdown = ShutdownSignal::new();
    shutdown.request();
    let mut sink = PreviewSink::in_memory(1);
    sink.render(&CylinderFrame::filled(colors::WHITE)).expect("render");

    clear_on_exit(&mut sink, &mut CountingPacer::default(), &quick_settings())
        .expect("exit wipe ignores the shutdown request");

    assert_eq!(sink.frames().len(), 1 + LED_COUNT);
    assert!(sink.frames().last().expect("frames recorded").is_blank());
}
