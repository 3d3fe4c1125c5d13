use crate::ball_config::{PIXEL_COUNT, Q8_SHIFT, WIDTH};
use crate::ball_physics::BallState;
use crate::ball_shader::shade;

// Colour written where the sphere is not hit
const BACKGROUND: u16 = 0x0000;

/// Row-major RGB565 pixels for the whole panel.
pub struct FrameBuffer {
    pixels: [u16; PIXEL_COUNT],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        FrameBuffer {
            pixels: [BACKGROUND; PIXEL_COUNT],
        }
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        self.pixels[y * WIDTH + x]
    }

    /// Shades every pixel for the given ball state, overwriting the previous
    /// frame completely.
    pub fn render(&mut self, state: &BallState) {
        for (ty, row) in self.pixels.chunks_exact_mut(WIDTH).enumerate() {
            let fy = ((ty as i32) << Q8_SHIFT) - state.py;

            for (tx, pixel) in row.iter_mut().enumerate() {
                let fx = ((tx as i32) << Q8_SHIFT) - state.px;
                *pixel = shade(fx, fy, state.phase).unwrap_or(BACKGROUND);
            }
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
