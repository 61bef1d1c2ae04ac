//! WS2812 transport over an SPI bus.
//!
//! The data line of the strip is driven from the bus's MOSI pin clocked at
//! [`SPI_FREQUENCY_HZ`]. Every WS2812 data bit becomes three SPI bits
//! (`1 → 110`, `0 → 100`), so one bit lasts 1.25 µs. After the last pixel a run
//! of zero bytes holds the line low long enough for the strip to latch.

use embedded_hal::spi::SpiBus;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::led_strip::grb_bytes;

/// SPI clock the encoding is timed for.
pub const SPI_FREQUENCY_HZ: u32 = 2_400_000;

/// Zero bytes sent after the pixel data: 90 bytes at 2.4 MHz is 300 µs,
/// above the 280 µs reset time of current WS2812B parts.
pub const RESET_BYTES: usize = 90;

/// SPI bytes needed for one 8-bit color channel.
const BYTES_PER_CHANNEL: usize = 3;

/// Encodes pixels for WS2812 LEDs and writes them to an [`SpiBus`].
pub struct Ws2812Spi<B> {
    bus: B,
    buffer: Vec<u8>,
}

impl<B: SpiBus> Ws2812Spi<B> {
    /// Wrap a bus that is already configured for [`SPI_FREQUENCY_HZ`], mode 0, 8-bit words.
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            buffer: Vec::new(),
        }
    }

    /// Give the bus back.
    pub fn into_inner(self) -> B {
        self.bus
    }

    fn encode<I>(&mut self, pixels: I)
    where
        I: IntoIterator<Item = RGB8>,
    {
        self.buffer.clear();
        for pixel in pixels {
            for channel in grb_bytes(pixel) {
                self.buffer.extend_from_slice(&encode_channel(channel));
            }
        }
        self.buffer.resize(self.buffer.len() + RESET_BYTES, 0);
    }
}

impl<B: SpiBus> SmartLedsWrite for Ws2812Spi<B> {
    type Error = B::Error;
    type Color = RGB8;

    /// Encode every pixel first, then push the whole buffer in one write so
    /// the strip only latches once all colors are on the wire.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.encode(iterator.into_iter().map(Into::into));
        self.bus.write(&self.buffer)?;
        self.bus.flush()
    }
}

/// Expand one channel byte, MSB first, into 24 SPI bits.
#[must_use]
pub const fn encode_channel(value: u8) -> [u8; BYTES_PER_CHANNEL] {
    let mut bits: u32 = 0;
    let mut bit = 0;
    while bit < 8 {
        let pattern = if value & (0x80 >> bit) != 0 { 0b110 } else { 0b100 };
        bits = (bits << 3) | pattern;
        bit += 1;
    }
    [(bits >> 16) as u8, (bits >> 8) as u8, bits as u8]
}

#[cfg(all(feature = "rpi", target_os = "linux"))]
mod spidev {
    use linux_embedded_hal::SpidevBus;
    use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
    use std::path::Path;

    use super::{SPI_FREQUENCY_HZ, Ws2812Spi};
    use crate::{Error, Result};

    impl Ws2812Spi<SpidevBus> {
        /// Open a Linux spidev node (for example `/dev/spidev0.0` on a Raspberry Pi)
        /// and configure it for WS2812 timing.
        ///
        /// # Errors
        ///
        /// [`Error::HardwareWrite`] if the device cannot be opened, [`Error::Io`] if
        /// it rejects the bus options.
        pub fn open_spidev(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let mut bus = SpidevBus::open(path).map_err(|err| Error::HardwareWrite {
                detail: format!("opening {}: {err:?}", path.display()),
            })?;
            let options = SpidevOptions::new()
                .bits_per_word(8)
                .max_speed_hz(SPI_FREQUENCY_HZ)
                .mode(SpiModeFlags::SPI_MODE_0)
                .build();
            bus.configure(&options)?;
            log::info!("opened {} at {SPI_FREQUENCY_HZ} Hz", path.display());
            Ok(Self::new(bus))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_full_channels_encode_to_fixed_patterns() {
        // 100 repeated eight times
        assert_eq!(encode_channel(0x00), [0b1001_0010, 0b0100_1001, 0b0010_0100]);
        // 110 repeated eight times
        assert_eq!(encode_channel(0xFF), [0b1101_1011, 0b0110_1101, 0b1011_0110]);
    }

    #[test]
    fn msb_is_sent_first() {
        let encoded = encode_channel(0x80);
        assert_eq!(encoded[0] >> 5, 0b110);
        assert_eq!(encoded[2] & 0b111, 0b100);
    }
}
