//! Run the LED cylinder show on the strip, in a simulator window, or into an APNG preview.
//!
//! ```text
//! cylinder --backend window --text "HELLO"
//! cylinder --backend strip --spi-device /dev/spidev0.0 -c
//! cylinder --backend preview --output cylinder.png
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use led_cylinder::led2d::CylinderFrame;
use led_cylinder::scroll::ThreadSleep;
use led_cylinder::show::{DEFAULT_TEXT, Show, ShowSettings, clear_on_exit};
use led_cylinder::shutdown::ShutdownSignal;
use led_cylinder::sink::{OutputSink, PreviewSink};
use led_cylinder::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scroll text around a 5x20 LED cylinder")]
struct Args {
    /// Clear the display on exit
    #[arg(short, long)]
    clear: bool,
    /// Where to draw
    #[arg(long, value_enum, default_value_t = Backend::default())]
    backend: Backend,
    /// Message to scroll
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,
    /// Milliseconds per scroll column
    #[arg(long, default_value_t = 40)]
    tick_ms: u16,
    /// spidev node wired to the strip's data line
    #[arg(long, default_value = "/dev/spidev0.0")]
    spi_device: PathBuf,
    /// APNG written by the preview backend
    #[arg(long, default_value = "cylinder.png")]
    output: PathBuf,
    /// Play the show once instead of until Ctrl-C (always once for `preview`)
    #[arg(long)]
    once: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Desktop simulator window (feature `window`)
    Window,
    /// WS2812 strip on a Linux SPI bus (feature `rpi`)
    Strip,
    /// Record frames to an animated PNG
    Preview,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "window") {
            Self::Window
        } else {
            Self::Preview
        }
    }
}

type DynError = Box<dyn std::error::Error>;

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    match inner_main(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn inner_main(args: Args) -> Result<(), DynError> {
    let shutdown = ShutdownSignal::new();
    shutdown.install_interrupt_handler()?;
    log::info!("Press Ctrl-C to quit.");
    if !args.clear {
        log::info!("Use \"-c\" to clear the LEDs on exit");
    }

    let settings = ShowSettings {
        text: args.text.clone(),
        scroll_tick: Duration::from_millis(u64::from(args.tick_ms)),
        ..ShowSettings::default()
    };
    let mut sink = open_sink(&args, &shutdown)?;
    let mut frame = CylinderFrame::new();
    let mut rng = rand::thread_rng();
    let mut pacer = ThreadSleep;

    let mut show = Show {
        frame: &mut frame,
        sink: &mut *sink,
        pacer: &mut pacer,
        shutdown: &shutdown,
        rng: &mut rng,
    };
    let once = args.once || args.backend == Backend::Preview;
    let played = if once {
        match show.run_once(&settings) {
            Err(Error::ShutdownRequested) => Ok(()),
            other => other,
        }
    } else {
        show.run(&settings)
    };

    if args.clear {
        clear_on_exit(&mut *sink, &mut pacer, &settings)?;
    }
    sink.finish()?;
    played?;
    Ok(())
}

fn open_sink(args: &Args, shutdown: &ShutdownSignal) -> Result<Box<dyn OutputSink>, DynError> {
    match args.backend {
        Backend::Preview => Ok(Box::new(PreviewSink::new(&args.output, args.tick_ms))),
        Backend::Window => open_window(shutdown),
        Backend::Strip => open_strip(args),
    }
}

#[cfg(feature = "window")]
fn open_window(shutdown: &ShutdownSignal) -> Result<Box<dyn OutputSink>, DynError> {
    Ok(Box::new(led_cylinder::sink::SimulatorSink::new(
        "Pi Cylinder",
        shutdown.clone(),
    )))
}

#[cfg(not(feature = "window"))]
fn open_window(_shutdown: &ShutdownSignal) -> Result<Box<dyn OutputSink>, DynError> {
    Err("the window backend needs the `window` feature".into())
}

#[cfg(all(feature = "rpi", target_os = "linux"))]
fn open_strip(args: &Args) -> Result<Box<dyn OutputSink>, DynError> {
    use led_cylinder::led_strip::Ws2812Spi;
    use led_cylinder::sink::StripSink;

    let driver = Ws2812Spi::open_spidev(&args.spi_device)?;
    Ok(Box::new(StripSink::new(driver)))
}

#[cfg(not(all(feature = "rpi", target_os = "linux")))]
fn open_strip(args: &Args) -> Result<Box<dyn OutputSink>, DynError> {
    Err(format!(
        "cannot open {}: the strip backend needs the `rpi` feature on Linux",
        args.spi_device.display()
    )
    .into())
}
