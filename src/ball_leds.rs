use embedded_hal::digital::v2::OutputPin;

const RED_BIT: u8 = 0x01;
const GREEN_BIT: u8 = 0x02;
const BLUE_BIT: u8 = 0x04;

/// Colours of the on-board RGB LED, one bit per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LedColor {
    Black = 0,
    Red = RED_BIT,
    Green = GREEN_BIT,
    Yellow = RED_BIT | GREEN_BIT,
    Blue = BLUE_BIT,
    Magenta = RED_BIT | BLUE_BIT,
    Cyan = GREEN_BIT | BLUE_BIT,
    White = RED_BIT | GREEN_BIT | BLUE_BIT,
}

impl LedColor {
    pub fn mask(self) -> u8 {
        self as u8
    }
}

/// Status LEDs addressed through a channel mask.
///
/// Implementors only store and output a mask; colour operations are built on
/// top of that.
pub trait StatusLeds {
    type Error;

    fn mask(&self) -> u8;
    fn write_mask(&mut self, mask: u8) -> Result<(), Self::Error>;

    /// Lights exactly the channels of `color`.
    fn set_color(&mut self, color: LedColor) -> Result<(), Self::Error> {
        self.write_mask(color.mask())
    }

    fn set(&mut self, color: LedColor) -> Result<(), Self::Error> {
        let mask = self.mask() | color.mask();
        self.write_mask(mask)
    }

    fn clear(&mut self, color: LedColor) -> Result<(), Self::Error> {
        let mask = self.mask() & !color.mask();
        self.write_mask(mask)
    }

    fn toggle(&mut self, color: LedColor) -> Result<(), Self::Error> {
        let mask = self.mask() ^ color.mask();
        self.write_mask(mask)
    }
}

/// Common-anode RGB LED on three GPIOs. A channel is lit when its pin is low.
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    mask: u8,
}

impl<R, G, B, E> RgbLed<R, G, B>
where
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    /// Takes the pins and switches every channel off.
    pub fn new(red: R, green: G, blue: B) -> Result<Self, E> {
        let mut led = RgbLed {
            red,
            green,
            blue,
            mask: LedColor::White.mask(),
        };
        led.write_mask(LedColor::Black.mask())?;

        return Ok(led);
    }

    fn drive<P: OutputPin<Error = E>>(pin: &mut P, lit: bool) -> Result<(), E> {
        if lit {
            pin.set_low()
        } else {
            pin.set_high()
        }
    }
}

impl<R, G, B, E> StatusLeds for RgbLed<R, G, B>
where
    R: OutputPin<Error = E>,
    G: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
{
    type Error = E;

    fn mask(&self) -> u8 {
        self.mask
    }

    fn write_mask(&mut self, mask: u8) -> Result<(), E> {
        Self::drive(&mut self.red, mask & RED_BIT != 0)?;
        Self::drive(&mut self.green, mask & GREEN_BIT != 0)?;
        Self::drive(&mut self.blue, mask & BLUE_BIT != 0)?;
        self.mask = mask & LedColor::White.mask();

        return Ok(());
    }
}
