use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::spi::Write;
use embedded_hal::digital::v2::OutputPin;

use crate::ball_display::{Region, SpriteDisplay};

// Panel RAM offset of the visible 160x80 window in landscape orientation
const X_OFFSET: u16 = 1;
const Y_OFFSET: u16 = 26;
// Pixels sent per update step
const CHUNK_PIXELS: usize = 64;

const CMD_SLPOUT: u8 = 0x11;
const CMD_INVON: u8 = 0x21;
const CMD_DISPON: u8 = 0x29;
const CMD_CASET: u8 = 0x2a;
const CMD_RASET: u8 = 0x2b;
const CMD_RAMWR: u8 = 0x2c;
const CMD_MADCTL: u8 = 0x36;
const CMD_COLMOD: u8 = 0x3a;

// Power-up sequence after sleep out: frame rate, inversion, power, VCOM and
// gamma settings for the 0.96" panel, then 16-bit colour in landscape
static INIT_SEQUENCE: [(u8, &[u8]); 16] = [
    (CMD_INVON, &[]),
    (0xb1, &[0x05, 0x3a, 0x3a]),
    (0xb2, &[0x05, 0x3a, 0x3a]),
    (0xb3, &[0x05, 0x3a, 0x3a, 0x05, 0x3a, 0x3a]),
    (0xb4, &[0x03]),
    (0xc0, &[0x62, 0x02, 0x04]),
    (0xc1, &[0xc0]),
    (0xc2, &[0x0d, 0x00]),
    (0xc3, &[0x8d, 0x6a]),
    (0xc4, &[0x8d, 0xee]),
    (0xc5, &[0x0e]),
    (
        0xe0,
        &[
            0x10, 0x0e, 0x02, 0x03, 0x0e, 0x07, 0x02, 0x07, 0x0a, 0x12, 0x27, 0x37, 0x00, 0x0d,
            0x0e, 0x10,
        ],
    ),
    (
        0xe1,
        &[
            0x10, 0x0e, 0x03, 0x03, 0x0f, 0x06, 0x02, 0x08, 0x0a, 0x13, 0x26, 0x36, 0x00, 0x0d,
            0x0e, 0x10,
        ],
    ),
    (CMD_COLMOD, &[0x05]),
    (CMD_MADCTL, &[0x78]),
    (CMD_DISPON, &[]),
];

#[derive(Debug, PartialEq, Eq)]
pub enum DisplayError<SpiE, PinE> {
    Spi(SpiE),
    Pin(PinE),
    // Region does not fit on the panel
    OutOfBounds,
    // Fewer pixels than the region needs
    BufferSize,
    // A sprite is still being drawn
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteState {
    Idle,
    Column,
    Row,
    MemoryWrite,
    Pixels,
}

/// ST7735S driver for the 160x80 panel over a write-only SPI bus.
pub struct St7735<SPI, DC, CS, RST> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    state: SpriteState,
    region: Region,
    cursor: usize,
}

impl<SPI, DC, CS, RST, SpiE, PinE> St7735<SPI, DC, CS, RST>
where
    SPI: Write<u8, Error = SpiE>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        St7735 {
            spi,
            dc,
            cs,
            rst,
            state: SpriteState::Idle,
            region: Region::full_screen(),
            cursor: 0,
        }
    }

    /// Hardware reset followed by the panel power-up sequence. Blocks for a
    /// few hundred milliseconds.
    pub fn init<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), DisplayError<SpiE, PinE>> {
        self.cs.set_high().map_err(DisplayError::Pin)?;
        self.rst.set_low().map_err(DisplayError::Pin)?;
        delay.delay_ms(200);
        self.rst.set_high().map_err(DisplayError::Pin)?;
        delay.delay_ms(20);

        self.select()?;
        self.write_command(CMD_SLPOUT, &[])?;
        delay.delay_ms(100);

        for (command, data) in INIT_SEQUENCE.iter() {
            self.write_command(*command, data)?;
        }

        self.deselect()?;
        self.state = SpriteState::Idle;

        return Ok(());
    }

    pub fn state(&self) -> SpriteState {
        self.state
    }

    pub fn release(self) -> (SPI, DC, CS, RST) {
        (self.spi, self.dc, self.cs, self.rst)
    }

    fn step(&mut self, pixels: &[u16]) -> Result<SpriteState, DisplayError<SpiE, PinE>> {
        match self.state {
            SpriteState::Idle => {}
            SpriteState::Column => {
                self.select()?;
                let start = self.region.x + X_OFFSET;
                let end = start + self.region.width - 1;
                self.write_command(CMD_CASET, &Self::window_bytes(start, end))?;
                self.state = SpriteState::Row;
            }
            SpriteState::Row => {
                let start = self.region.y + Y_OFFSET;
                let end = start + self.region.height - 1;
                self.write_command(CMD_RASET, &Self::window_bytes(start, end))?;
                self.state = SpriteState::MemoryWrite;
            }
            SpriteState::MemoryWrite => {
                self.write_command(CMD_RAMWR, &[])?;
                self.cursor = 0;
                self.state = SpriteState::Pixels;
            }
            SpriteState::Pixels => {
                let count = self.region.pixel_count();
                let end = count.min(self.cursor + CHUNK_PIXELS);
                let chunk = pixels
                    .get(self.cursor..end)
                    .ok_or(DisplayError::BufferSize)?;
                self.write_pixels(chunk)?;
                self.cursor = end;

                if self.cursor == count {
                    self.deselect()?;
                    self.state = SpriteState::Idle;
                }
            }
        }

        return Ok(self.state);
    }

    fn window_bytes(start: u16, end: u16) -> [u8; 4] {
        let [start_hi, start_lo] = start.to_be_bytes();
        let [end_hi, end_lo] = end.to_be_bytes();
        [start_hi, start_lo, end_hi, end_lo]
    }

    fn write_command(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError<SpiE, PinE>> {
        self.dc.set_low().map_err(DisplayError::Pin)?;
        self.spi.write(&[command]).map_err(DisplayError::Spi)?;

        if !data.is_empty() {
            self.dc.set_high().map_err(DisplayError::Pin)?;
            self.spi.write(data).map_err(DisplayError::Spi)?;
        }

        return Ok(());
    }

    fn write_pixels(&mut self, pixels: &[u16]) -> Result<(), DisplayError<SpiE, PinE>> {
        let mut bytes = [0u8; CHUNK_PIXELS * 2];

        for (pair, pixel) in bytes.chunks_exact_mut(2).zip(pixels) {
            pair.copy_from_slice(&pixel.to_be_bytes());
        }

        self.dc.set_high().map_err(DisplayError::Pin)?;
        self.spi
            .write(&bytes[..pixels.len() * 2])
            .map_err(DisplayError::Spi)
    }

    fn select(&mut self) -> Result<(), DisplayError<SpiE, PinE>> {
        self.cs.set_low().map_err(DisplayError::Pin)
    }

    fn deselect(&mut self) -> Result<(), DisplayError<SpiE, PinE>> {
        self.cs.set_high().map_err(DisplayError::Pin)
    }
}

impl<SPI, DC, CS, RST, SpiE, PinE> SpriteDisplay for St7735<SPI, DC, CS, RST>
where
    SPI: Write<u8, Error = SpiE>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    type Error = DisplayError<SpiE, PinE>;

    fn register_sprite(&mut self, region: Region, pixels: &[u16]) -> Result<(), Self::Error> {
        if self.state != SpriteState::Idle {
            return Err(DisplayError::Busy);
        }

        if !region.fits_screen() {
            return Err(DisplayError::OutOfBounds);
        }

        if pixels.len() < region.pixel_count() {
            return Err(DisplayError::BufferSize);
        }

        // Nothing to draw, stay idle
        if region.pixel_count() == 0 {
            return Ok(());
        }

        self.region = region;
        self.cursor = 0;
        self.state = SpriteState::Column;

        return Ok(());
    }

    fn update_sprite(&mut self, pixels: &[u16]) -> nb::Result<(), Self::Error> {
        match self.step(pixels) {
            Ok(SpriteState::Idle) => Ok(()),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(error) => {
                // Abandon the sprite so the next one can be registered
                self.state = SpriteState::Idle;
                let _ = self.deselect();
                Err(nb::Error::Other(error))
            }
        }
    }
}
