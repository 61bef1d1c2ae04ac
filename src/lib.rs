//! Scrolling text and light effects for a 5×20 LED cylinder.
//!
//! The cylinder is one strip of 100 WS2812 LEDs wound in a serpentine: down
//! column 0, up column 1, and so on around the circumference. Programs draw on
//! a logical [`CylinderFrame`](led2d::CylinderFrame) and hand it to an
//! [`OutputSink`](sink::OutputSink): the physical strip, a simulator window,
//! or an off-screen APNG preview. All of them show the same picture.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use led_cylinder::led2d::CylinderFrame;
//! use led_cylinder::led_strip::colors;
//! use led_cylinder::scroll::{scroll_text, ScrollOutcome, ThreadSleep};
//! use led_cylinder::shutdown::ShutdownSignal;
//! use led_cylinder::sink::PreviewSink;
//!
//! let mut frame = CylinderFrame::new();
//! let mut sink = PreviewSink::in_memory(40);
//! let outcome = scroll_text(
//!     &mut frame,
//!     &mut sink,
//!     &mut ThreadSleep,
//!     &ShutdownSignal::new(),
//!     "HI",
//!     colors::ORANGE,
//!     Duration::ZERO,
//! )?;
//! assert_eq!(outcome, ScrollOutcome::Completed { ticks: 28 });
//! assert!(frame.is_blank());
//! # Ok::<(), led_cylinder::Error>(())
//! ```
//!
//! # Glossary
//!
//! - **Serpentine wiring:** consecutive columns run in opposite vertical
//!   directions, so the strip never jumps back to the top.
//! - **Logical coordinate:** `(row, column)` in the 5×20 frame, `(0, 0)` at the top-left.
//! - **Physical index:** an LED's 0-based position along the strip.
//! - **Tick:** one step of the scroll: write the right edge, render, wait, shift left.
//! - **Glyph:** the 3×5 bitmap for one character.
//! - **Latch:** the low period after WS2812 data that makes the strip show the new colors.

pub mod cylinder;
pub mod effects;
mod error;
pub mod font;
pub mod led2d;
pub mod led_strip;
pub mod scroll;
pub mod show;
pub mod shutdown;
pub mod sink;
pub mod to_png;

pub use crate::error::{Error, Result};
