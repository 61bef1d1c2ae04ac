//! Off-screen previews of frames as PNG and animated PNG files.
//!
//! Each cell is drawn as a round, softly faded "LED" on a black background,
//! sized so the whole image fits within a requested maximum dimension.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder, ScaledFloat};

use crate::Result;
use crate::led2d::Frame2d;

/// Approximates how an LED's brightness looks to the eye.
const PREVIEW_INVERSE_GAMMA: f32 = 2.2;

/// Write `frame` as a single PNG no wider or taller than `target_max_dimension` pixels.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) or [`Error::Png`](crate::Error::Png) if the
/// file cannot be written.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let style = PreviewStyle::fit::<W, H>(target_max_dimension);
    let (width, height, pixels) = style.panel_pixels(frame);

    let mut encoder = Encoder::new(create_output(output_path)?, width, height);
    configure(&mut encoder);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    log::info!("wrote PNG to {}", output_path.display());
    Ok(())
}

/// Write `frames` as a looping APNG, each frame shown for `frame_delay_ms`.
///
/// An empty `frames` slice writes nothing.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) or [`Error::Png`](crate::Error::Png) if the
/// file cannot be written.
pub fn write_frames_apng<const W: usize, const H: usize>(
    frames: &[Frame2d<W, H>],
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
    frame_delay_ms: u16,
) -> Result<()> {
    let output_path = output_path.as_ref();
    if frames.is_empty() {
        log::warn!("no frames to write to {}", output_path.display());
        return Ok(());
    }
    let style = PreviewStyle::fit::<W, H>(target_max_dimension);
    let frame_count = u32::try_from(frames.len()).unwrap_or(u32::MAX);
    let (width, height, _) = style.panel_pixels(&frames[0]);

    let mut encoder = Encoder::new(create_output(output_path)?, width, height);
    configure(&mut encoder);
    encoder.set_animated(frame_count, 0)?;
    let mut writer = encoder.write_header()?;
    for frame in frames.iter().take(frame_count as usize) {
        let (_, _, pixels) = style.panel_pixels(frame);
        writer.set_frame_delay(frame_delay_ms.max(1), 1000)?;
        writer.write_image_data(&pixels)?;
    }
    writer.finish()?;
    log::info!("wrote {frame_count}-frame APNG to {}", output_path.display());
    Ok(())
}

fn create_output(output_path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(output_path)?))
}

/// Geometry of one drawn LED.
#[derive(Clone, Copy, Debug)]
struct PreviewStyle {
    cell_size: u32,
    led_radius: u32,
    fade_width: u32,
}

impl PreviewStyle {
    /// Largest cells whose image still fits inside `target_max_dimension`.
    fn fit<const W: usize, const H: usize>(target_max_dimension: u32) -> Self {
        let mut cell_size = target_max_dimension.max(4);
        while cell_size > 4 {
            let style = Self::with_cell_size(cell_size);
            let border = style.led_radius * 2;
            let max_dimension = (W.max(H) as u32) * cell_size + border;
            if max_dimension <= target_max_dimension {
                break;
            }
            cell_size -= 1;
        }
        Self::with_cell_size(cell_size)
    }

    fn with_cell_size(cell_size: u32) -> Self {
        let led_margin = (cell_size / 8).max(1);
        let led_radius = ((cell_size - led_margin * 2) / 2).max(1);
        Self {
            cell_size,
            led_radius,
            fade_width: (led_radius / 3).max(1),
        }
    }

    /// 16-bit big-endian RGB pixels for `frame`, with a border of one LED radius.
    fn panel_pixels<const W: usize, const H: usize>(
        self,
        frame: &Frame2d<W, H>,
    ) -> (u32, u32, Vec<u8>) {
        let border = self.led_radius;
        let width = (W as u32) * self.cell_size + border * 2;
        let height = (H as u32) * self.cell_size + border * 2;
        let mut bytes = vec![0u8; (width * height * 6) as usize];
        let center = (self.cell_size as i32 - 1) / 2;
        let radius = self.led_radius as f32;
        let inner_radius = (self.led_radius - self.fade_width) as f32;
        let radius_sq = (self.led_radius * self.led_radius) as i32;

        for (row, column, color) in frame.cells() {
            let origin_x = border + (column as u32) * self.cell_size;
            let origin_y = border + (row as u32) * self.cell_size;
            for local_y in 0..self.cell_size {
                let delta_y = local_y as i32 - center;
                for local_x in 0..self.cell_size {
                    let delta_x = local_x as i32 - center;
                    let distance_sq = delta_x * delta_x + delta_y * delta_y;
                    if distance_sq > radius_sq {
                        continue;
                    }
                    let distance = (distance_sq as f32).sqrt();
                    let intensity = if distance <= inner_radius {
                        1.0
                    } else {
                        (1.0 - (distance - inner_radius) / (radius - inner_radius)).max(0.0)
                    };
                    let offset =
                        (((origin_y + local_y) * width + origin_x + local_x) * 6) as usize;
                    let channels = [color.r, color.g, color.b];
                    for (channel_index, channel) in channels.into_iter().enumerate() {
                        let value = linear_to_u16(to_linear(channel) * intensity);
                        let at = offset + channel_index * 2;
                        bytes[at..at + 2].copy_from_slice(&value.to_be_bytes());
                    }
                }
            }
        }

        (width, height, bytes)
    }
}

fn configure<Writer: std::io::Write>(encoder: &mut Encoder<'_, Writer>) {
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder.set_source_gamma(ScaledFloat::new(1.0));
}

fn to_linear(channel: u8) -> f32 {
    (f32::from(channel) / 255.0).powf(PREVIEW_INVERSE_GAMMA)
}

fn linear_to_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}
