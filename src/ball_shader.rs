//! Per-pixel shading of the rotating checkered sphere.
//!
//! There is no geometry here: a pixel offset from the ball origin is mapped
//! straight to a colour with a handful of fixed-point steps.

use crate::ball_math::{approx_asin, approx_reciprocal, trapezoid_remap};

// Centre of the 64x64 logical canvas, Q8
const CANVAS_CENTER: i32 = 32 << 8;
// Tilt of the spin axis, cosine and sine in Q13
const TILT_COS: i32 = 8028;
const TILT_SIN: i32 = 1627;
// Squared radius of the visible disc
const DISC_RADIUS_SQ: i64 = 1 << 26;
// Angles wrap at 13 bits
const ANGLE_MASK: i32 = 0x1fff;
const Q13_SHIFT: u32 = 13;

// Channel maxima of RGB565
const RED_MAX: i32 = 0x1f;
const GREEN_MAX: i32 = 0x3f;
const BLUE_MAX: i32 = 0x1f;

/// Shades one pixel.
///
/// `dx` and `dy` are the Q8 offsets of the pixel from the ball origin and
/// `phase` is the spin phase. Returns `None` for background pixels.
pub fn shade(dx: i32, dy: i32, phase: i32) -> Option<u16> {
    let (x, y) = project(dx, dy);

    let r = radius_sq(x, y);
    if r > DISC_RADIUS_SQ {
        return None;
    }
    let r = r as i32;

    // Squeeze longitude lines together toward the poles
    let x = (x * approx_reciprocal(y)) >> Q13_SHIFT;
    let u = approx_asin(x).wrapping_add(phase) & ANGLE_MASK;
    let v = approx_asin(y) & ANGLE_MASK;

    let (red, green, blue) = surface_color(u, v);
    let limb = limb_factor(r);

    Some(pack_rgb565(
        (red * limb) >> 8,
        (green * limb) >> 8,
        (blue * limb) >> 8,
    ))
}

/// Moves a pixel offset onto the half-scale canvas around the sphere centre
/// and rotates it by the tilt of the spin axis.
pub fn project(dx: i32, dy: i32) -> (i32, i32) {
    let x = (dx >> 1) - CANVAS_CENTER;
    let y = (dy >> 1) - CANVAS_CENTER;

    (
        (TILT_COS * x + TILT_SIN * y) >> Q13_SHIFT,
        (-TILT_SIN * x + TILT_COS * y) >> Q13_SHIFT,
    )
}

pub fn radius_sq(x: i32, y: i32) -> i64 {
    let x = i64::from(x);
    let y = i64::from(y);

    x * x + y * y
}

/// Unlit checker colour for a pair of 13-bit surface angles, as 5/6/5-bit
/// channels.
pub fn surface_color(u: i32, v: i32) -> (i32, i32, i32) {
    let cu = trapezoid_remap(u);
    let cv = trapezoid_remap(v);
    let cc = (((cu - 128) * (cv - 128)) >> 7) + 128;

    (RED_MAX, (GREEN_MAX * cc) >> 8, (BLUE_MAX * cc) >> 8)
}

/// Brightness multiplier in `[0, 256]` for a squared radius inside the disc.
/// Only the outer rim is darkened.
pub fn limb_factor(r: i32) -> i32 {
    256 - trapezoid_remap((1 << 12) - (r >> 14))
}

pub fn pack_rgb565(red: i32, green: i32, blue: i32) -> u16 {
    ((red << 11) | (green << 5) | blue) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Pixel offset that lands on the sphere centre
    const CENTER_OFFSET: i32 = 2 * CANVAS_CENTER;

    #[test]
    fn centre_is_fully_lit() {
        assert_eq!(project(CENTER_OFFSET, CENTER_OFFSET), (0, 0));
        assert_eq!(limb_factor(0), 256);

        let (red, green, blue) = surface_color(0, 0);
        assert_eq!(
            shade(CENTER_OFFSET, CENTER_OFFSET, 0),
            Some(pack_rgb565(red, green, blue))
        );
        assert_eq!(shade(CENTER_OFFSET, CENTER_OFFSET, 0), Some(0xffff));
    }

    #[test]
    fn corner_of_canvas_is_background() {
        assert_eq!(shade(0, 0, 0), None);
        assert_eq!(shade(CENTER_OFFSET + 16600, CENTER_OFFSET, 0), None);
    }

    #[test]
    fn rim_is_darkened() {
        assert_eq!(limb_factor(1 << 26), 0);
        assert_eq!(limb_factor(3840 << 14), 256);
        assert_eq!(limb_factor(3968 << 14), 128);
    }

    #[test]
    fn surface_pattern_alternates() {
        // Both angles bright, or both dark, gives the light tile
        assert_eq!(surface_color(0, 0), (31, 63, 31));
        assert_eq!(surface_color(1000, 1000), (31, 63, 31));
        // One bright and one dark gives the dark tile
        assert_eq!(surface_color(0, 1000), (31, 0, 0));
    }

    #[test]
    fn pack_places_channels() {
        assert_eq!(pack_rgb565(0x1f, 0, 0), 0xf800);
        assert_eq!(pack_rgb565(0, 0x3f, 0), 0x07e0);
        assert_eq!(pack_rgb565(0, 0, 0x1f), 0x001f);
    }

    #[test]
    fn extreme_phase_wraps() {
        let a = shade(CENTER_OFFSET + 300, CENTER_OFFSET - 700, i32::MAX);
        let b = shade(CENTER_OFFSET + 300, CENTER_OFFSET - 700, i32::MAX);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn hit_iff_inside_disc(dx in -(1 << 16)..(1 << 16), dy in -(1 << 16)..(1 << 16), phase in 0..(1 << 20)) {
            let (x, y) = project(dx, dy);
            let inside = radius_sq(x, y) <= DISC_RADIUS_SQ;
            prop_assert_eq!(shade(dx, dy, phase).is_some(), inside);
        }

        #[test]
        fn phase_repeats_every_turn(dx in 0..(1 << 15), dy in 0..(1 << 15), phase in -(1 << 20)..(1 << 20)) {
            prop_assert_eq!(shade(dx, dy, phase), shade(dx, dy, phase + 8192));
        }
    }
}
