//! Headless sink that records what would have been shown.

use std::path::PathBuf;

use smart_leds::RGB8;

use crate::Result;
use crate::cylinder::physical_index;
use crate::led2d::CylinderFrame;
use crate::sink::OutputSink;
use crate::to_png::write_frames_apng;

/// Largest side of the written preview image, in pixels.
pub const PREVIEW_MAX_DIMENSION: u32 = 800;

/// Frames kept by default; one full show round fits.
pub const DEFAULT_MAX_FRAMES: usize = 6_000;

/// Records one snapshot per update and, on [`OutputSink::finish`], writes
/// them to an animated PNG.
///
/// `draw_single` updates are recorded against the last rendered frame, so a
/// color wipe shows up one pixel per frame. Once `max_frames` are held,
/// later updates still track the current frame but are not recorded.
#[derive(Debug)]
pub struct PreviewSink {
    output_path: Option<PathBuf>,
    frame_delay_ms: u16,
    max_frames: usize,
    current: CylinderFrame,
    frames: Vec<CylinderFrame>,
}

impl PreviewSink {
    /// Record frames and write them to `output_path` when finished.
    pub fn new(output_path: impl Into<PathBuf>, frame_delay_ms: u16) -> Self {
        Self {
            output_path: Some(output_path.into()),
            ..Self::in_memory(frame_delay_ms)
        }
    }

    /// Record frames without writing a file.
    #[must_use]
    pub const fn in_memory(frame_delay_ms: u16) -> Self {
        Self {
            output_path: None,
            frame_delay_ms,
            max_frames: DEFAULT_MAX_FRAMES,
            current: CylinderFrame::new(),
            frames: Vec::new(),
        }
    }

    /// Keep at most `max_frames` frames.
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Every frame recorded so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[CylinderFrame] {
        &self.frames
    }

    fn record(&mut self) {
        if self.frames.len() < self.max_frames {
            self.frames.push(self.current);
            if self.frames.len() == self.max_frames {
                log::warn!(
                    "preview holds {} frames; later frames are dropped",
                    self.max_frames
                );
            }
        }
    }
}

impl OutputSink for PreviewSink {
    fn render(&mut self, frame: &CylinderFrame) -> Result<()> {
        self.current = frame.snapshot();
        self.record();
        Ok(())
    }

    fn draw_single(&mut self, row: usize, column: usize, color: Option<RGB8>) -> Result<()> {
        physical_index(row, column)?;
        let Some(color) = color else {
            return Ok(());
        };
        self.current[(column, row)] = color;
        self.record();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let Some(output_path) = self.output_path.take() else {
            return Ok(());
        };
        write_frames_apng(
            &self.frames,
            &output_path,
            PREVIEW_MAX_DIMENSION,
            self.frame_delay_ms,
        )
    }
}
