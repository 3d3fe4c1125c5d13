use log::info;

use crate::ball_config::{HEIGHT, WIDTH};
use crate::ball_display::SpriteDisplay;
use crate::ball_error::BallError;
use crate::ball_frame::FrameBuffer;
use crate::ball_handoff;
use crate::ball_leds::{LedColor, StatusLeds};
use crate::ball_physics::BallState;

/// Owns the demo loop: render, present, advance physics.
pub struct BallController<'a, D: SpriteDisplay, L: StatusLeds> {
    display: D,
    leds: L,
    frame: &'a mut FrameBuffer,
    state: BallState,
    frame_count: u32,
}

impl<'a, D: SpriteDisplay, L: StatusLeds> BallController<'a, D, L> {
    /// Takes an initialised display and switches the LEDs off. The ball
    /// starts at the origin moving down and to the right.
    pub fn new(display: D, mut leds: L, frame: &'a mut FrameBuffer) -> Result<Self, BallError<D::Error, L::Error>> {
        leds.set_color(LedColor::Black).map_err(BallError::Led)?;

        info!("amiga ball ready on a {}x{} panel", WIDTH, HEIGHT);

        Ok(BallController {
            display,
            leds,
            frame,
            state: BallState::new(),
            frame_count: 0,
        })
    }

    /// Produces one frame. The display has finished drawing it when this
    /// returns, so the next call may render into the buffer again.
    pub fn tick(&mut self) -> Result<(), BallError<D::Error, L::Error>> {
        self.frame.render(&self.state);
        self.present()?;

        // Heartbeat, one flip per frame
        self.leds.toggle(LedColor::Red).map_err(BallError::Led)?;

        self.state.tick();
        self.frame_count = self.frame_count.wrapping_add(1);

        return Ok(());
    }

    /// Runs frames for as long as the display and LEDs keep working. Only
    /// returns with the error that stopped the loop.
    pub fn run(&mut self) -> BallError<D::Error, L::Error> {
        loop {
            if let Err(error) = self.tick() {
                return error;
            }
        }
    }

    pub fn state(&self) -> &BallState {
        &self.state
    }

    pub fn frame(&self) -> &FrameBuffer {
        &*self.frame
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    #[cfg(not(feature = "busy-draw"))]
    fn present(&mut self) -> Result<(), BallError<D::Error, L::Error>> {
        ball_handoff::present(&mut self.display, &mut self.leds, &*self.frame)?;
        return Ok(());
    }

    #[cfg(feature = "busy-draw")]
    fn present(&mut self) -> Result<(), BallError<D::Error, L::Error>> {
        ball_handoff::present_blocking(&mut self.display, &*self.frame).map_err(BallError::Display)
    }
}
