//! Fixed-point helpers used by the sphere shader.
//!
//! Positions and ratios come in as Q8, angles as Q13. Everything is plain
//! `i32` arithmetic with explicit shifts.

use crate::ball_reciprocal_table::BALL_RECIPROCAL_TABLE;

// Largest input accepted by the reciprocal lookup, one step short of index 32
const RECIPROCAL_CLAMP: i32 = (32 << 8) - 1;
// Pre-scale of the arcsine input (11/8)
const ASIN_SCALE_NUM: i32 = 11;
const ASIN_SCALE_SHIFT: u32 = 3;
// Cubic and quintic series coefficients, Q13
const ASIN_C3: i32 = 1365;
const ASIN_C5: i32 = 614;
const Q13_SHIFT: u32 = 13;

// Breakpoints of the remap profile
const REMAP_RAMP: i32 = 256;
const REMAP_RISE_START: i32 = 4096;

/// Approximates `8192 / sqrt(1 - (x / 32)^2)` for a Q8 input.
///
/// The sign of `x` is ignored and its magnitude is clamped just below 32, so
/// the result grows toward the singularity without ever reaching it.
pub fn approx_reciprocal(x: i32) -> i32 {
    let x = x.saturating_abs().min(RECIPROCAL_CLAMP);

    let m = (x >> 8) as usize;
    let f = x & 0xff;
    let v0 = BALL_RECIPROCAL_TABLE[m];
    let v1 = BALL_RECIPROCAL_TABLE[m + 1];

    return (v0 * (256 - f) + v1 * f) >> 8;
}

/// Degree-5 arcsine series on a Q13 input.
///
/// The domain is not checked. Multiplication wraps, so an input outside the
/// unit range still gives a deterministic result.
pub fn approx_asin(x: i32) -> i32 {
    let x = x.wrapping_mul(ASIN_SCALE_NUM) >> ASIN_SCALE_SHIFT;
    let x2 = x.wrapping_mul(x) >> Q13_SHIFT;
    let x3 = x2.wrapping_mul(x) >> Q13_SHIFT;
    let x5 = x2.wrapping_mul(x3) >> Q13_SHIFT;

    let tail = ASIN_C3
        .wrapping_mul(x3)
        .wrapping_add(ASIN_C5.wrapping_mul(x5))
        >> Q13_SHIFT;

    return x.wrapping_add(tail);
}

/// Maps a 13-bit angle to an intensity in `[0, 256]`.
///
/// Falls from 256 to 0 over `[0, 256)`, holds 0 until 4096, rises back to 256
/// over `[4096, 4352)` and holds 256 after that.
pub fn trapezoid_remap(x: i32) -> i32 {
    if x < REMAP_RAMP {
        return REMAP_RAMP - x;
    }

    if x < REMAP_RISE_START {
        return 0;
    }

    if x < REMAP_RISE_START + REMAP_RAMP {
        return x - REMAP_RISE_START;
    }

    return REMAP_RAMP;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reciprocal_is_exact_at_breakpoints() {
        assert_eq!(approx_reciprocal(0), 8192);

        for i in 0..32 {
            assert_eq!(approx_reciprocal(i << 8), BALL_RECIPROCAL_TABLE[i as usize]);
        }
    }

    #[test]
    fn reciprocal_is_monotonic_up_to_clamp() {
        let mut last = approx_reciprocal(0);

        for x in 1..(32 << 8) {
            let value = approx_reciprocal(x);
            assert!(value >= last, "dropped at {}: {} < {}", x, value, last);
            last = value;
        }
    }

    #[test]
    fn reciprocal_saturates_past_clamp() {
        let edge = approx_reciprocal(RECIPROCAL_CLAMP);
        assert_eq!(approx_reciprocal(32 << 8), edge);
        assert_eq!(approx_reciprocal(1 << 20), edge);
        assert_eq!(approx_reciprocal(i32::MIN), edge);
        assert!(edge < 65535);
    }

    #[test]
    fn reciprocal_interpolates_halfway() {
        // Halfway between 8192 and 8196
        assert_eq!(approx_reciprocal(128), 8194);
    }

    #[test]
    fn asin_known_values() {
        assert_eq!(approx_asin(0), 0);
        assert_eq!(approx_asin(8), 11);
        assert_eq!(approx_asin(8192), 17830);
    }

    #[test]
    fn asin_is_increasing_on_unit_range() {
        let mut last = approx_asin(-8192);

        for x in -8191..=8192 {
            let value = approx_asin(x);
            assert!(value >= last, "dropped at {}", x);
            last = value;
        }
    }

    #[test]
    fn asin_out_of_range_is_deterministic() {
        assert_eq!(approx_asin(i32::MAX), approx_asin(i32::MAX));
        assert_eq!(approx_asin(1 << 24), approx_asin(1 << 24));
    }

    #[test]
    fn remap_breakpoints() {
        assert_eq!(trapezoid_remap(0), 256);
        assert_eq!(trapezoid_remap(128), 128);
        assert_eq!(trapezoid_remap(256), 0);
        assert_eq!(trapezoid_remap(4095), 0);
        assert_eq!(trapezoid_remap(4096), 0);
        assert_eq!(trapezoid_remap(4224), 128);
        assert_eq!(trapezoid_remap(4352), 256);
        assert_eq!(trapezoid_remap(8191), 256);
    }

    proptest! {
        #[test]
        fn reciprocal_is_even(x in -(1 << 16)..(1 << 16)) {
            prop_assert_eq!(approx_reciprocal(x), approx_reciprocal(-x));
        }

        #[test]
        fn reciprocal_stays_between_table_ends(x in any::<i32>()) {
            let value = approx_reciprocal(x);
            prop_assert!(value >= 8192);
            prop_assert!(value <= 65535);
        }

        #[test]
        fn remap_stays_in_unit_range(x in 0..8192i32) {
            let value = trapezoid_remap(x);
            prop_assert!((0..=256).contains(&value));
        }
    }
}
