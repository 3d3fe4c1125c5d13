//! Hands a finished frame to the display and waits for it to be drawn.

use log::{trace, warn};

use crate::ball_display::{Region, SpriteDisplay};
use crate::ball_error::BallError;
use crate::ball_frame::FrameBuffer;
use crate::ball_leds::{LedColor, StatusLeds};

/// Registers the whole frame with the display and steps the draw until the
/// display is idle again. Returns the number of steps taken.
///
/// The green LED is lit while the display is busy and cleared once it is
/// idle. The frame stays borrowed until the draw has completed, so it cannot
/// be rendered into meanwhile. There is no timeout: a display that never
/// goes idle keeps this loop spinning.
pub fn present<D, L>(
    display: &mut D,
    leds: &mut L,
    frame: &FrameBuffer,
) -> Result<u32, BallError<D::Error, L::Error>>
where
    D: SpriteDisplay,
    L: StatusLeds,
{
    let pixels = frame.pixels();
    display
        .register_sprite(Region::full_screen(), pixels)
        .map_err(BallError::Display)?;

    let mut steps = 0;

    loop {
        steps += 1;

        match display.update_sprite(pixels) {
            Err(nb::Error::WouldBlock) => {
                leds.set(LedColor::Green).map_err(BallError::Led)?;
            }
            Ok(()) => {
                leds.clear(LedColor::Green).map_err(BallError::Led)?;
                trace!("frame presented in {} steps", steps);
                return Ok(steps);
            }
            Err(nb::Error::Other(error)) => {
                warn!("display step {} failed", steps);
                let _ = leds.clear(LedColor::Green);
                return Err(BallError::Display(error));
            }
        }
    }
}

/// Draws the whole frame with the display's blocking path.
pub fn present_blocking<D: SpriteDisplay>(display: &mut D, frame: &FrameBuffer) -> Result<(), D::Error> {
    display.draw_sprite(Region::full_screen(), frame.pixels())
}

#[cfg(test)]
pub(crate) mod mock {
    use core::convert::Infallible;

    use crate::ball_display::{Region, SpriteDisplay};
    use crate::ball_leds::StatusLeds;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Call {
        Register,
        Busy,
        Idle,
    }

    /// Display that needs a fixed number of steps per sprite and records
    /// every call.
    pub struct MockDisplay {
        pub steps_per_sprite: u32,
        pub remaining: u32,
        pub calls: Vec<Call>,
        pub fail_at: Option<usize>,
    }

    impl MockDisplay {
        pub fn new(steps_per_sprite: u32) -> Self {
            MockDisplay {
                steps_per_sprite,
                remaining: 0,
                calls: Vec::new(),
                fail_at: None,
            }
        }
    }

    impl SpriteDisplay for MockDisplay {
        type Error = &'static str;

        fn register_sprite(&mut self, region: Region, pixels: &[u16]) -> Result<(), Self::Error> {
            if self.remaining != 0 {
                return Err("registered while busy");
            }

            assert_eq!(pixels.len(), region.pixel_count());
            self.calls.push(Call::Register);
            self.remaining = self.steps_per_sprite;
            Ok(())
        }

        fn update_sprite(&mut self, _pixels: &[u16]) -> nb::Result<(), Self::Error> {
            if self.fail_at == Some(self.calls.len()) {
                self.remaining = 0;
                return Err(nb::Error::Other("bus fault"));
            }

            if self.remaining > 1 {
                self.remaining -= 1;
                self.calls.push(Call::Busy);
                Err(nb::Error::WouldBlock)
            } else {
                self.remaining = 0;
                self.calls.push(Call::Idle);
                Ok(())
            }
        }
    }

    /// LEDs that keep the mask and every mask written.
    #[derive(Default)]
    pub struct MockLeds {
        pub mask: u8,
        pub history: Vec<u8>,
    }

    impl StatusLeds for MockLeds {
        type Error = Infallible;

        fn mask(&self) -> u8 {
            self.mask
        }

        fn write_mask(&mut self, mask: u8) -> Result<(), Self::Error> {
            self.mask = mask;
            self.history.push(mask);
            Ok(())
        }
    }
}
