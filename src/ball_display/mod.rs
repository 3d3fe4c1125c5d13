use crate::ball_config::{HEIGHT, WIDTH};

mod st7735;
pub use st7735::*;

/// Rectangle of the panel a sprite is drawn into, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn full_screen() -> Self {
        Region::new(0, 0, WIDTH as u16, HEIGHT as u16)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn fits_screen(&self) -> bool {
        self.x as usize + self.width as usize <= WIDTH
            && self.y as usize + self.height as usize <= HEIGHT
    }
}

/// A display that draws a sprite in small steps so the caller keeps control
/// between them.
///
/// `register_sprite` arms a draw and `update_sprite` performs one bounded
/// piece of it: `WouldBlock` while busy, `Ok(())` once idle. The same pixels
/// must be passed to every call belonging to one draw, and a new sprite may
/// only be registered after `update_sprite` reported idle.
pub trait SpriteDisplay {
    type Error;

    fn register_sprite(&mut self, region: Region, pixels: &[u16]) -> Result<(), Self::Error>;
    fn update_sprite(&mut self, pixels: &[u16]) -> nb::Result<(), Self::Error>;

    /// Draws a sprite to completion before returning.
    fn draw_sprite(&mut self, region: Region, pixels: &[u16]) -> Result<(), Self::Error> {
        self.register_sprite(region, pixels)?;
        nb::block!(self.update_sprite(pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_screen_covers_panel() {
        let region = Region::full_screen();

        assert_eq!(region.pixel_count(), WIDTH * HEIGHT);
        assert!(region.fits_screen());
    }

    #[test]
    fn region_past_edge_does_not_fit() {
        assert!(!Region::new(1, 0, WIDTH as u16, 1).fits_screen());
        assert!(!Region::new(0, HEIGHT as u16, 1, 1).fits_screen());
        assert!(Region::new(150, 70, 10, 10).fits_screen());
    }
}
