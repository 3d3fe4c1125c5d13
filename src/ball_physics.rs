use crate::ball_config::{
    FLOOR_Y, GRAVITY, INITIAL_VELOCITY, LEFT_WALL_X, RIGHT_WALL_X, SPIN_STEP,
};

/// Position, velocity and spin of the ball. Every field is Q8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallState {
    pub px: i32,
    pub py: i32,
    pub dx: i32,
    pub dy: i32,
    pub phase: i32,
}

impl BallState {
    pub const fn new() -> Self {
        BallState {
            px: 0,
            py: 0,
            dx: INITIAL_VELOCITY,
            dy: INITIAL_VELOCITY,
            phase: 0,
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// Collisions reflect the overshoot back inside the box in the same
    /// tick. A velocity larger than the distance to a wall can still tunnel
    /// through it.
    pub fn tick(&mut self) {
        self.px += self.dx;
        self.py += self.dy;

        if self.dx > 0 {
            self.phase = self.phase.wrapping_add(SPIN_STEP);
        } else {
            self.phase = self.phase.wrapping_sub(SPIN_STEP);
        }

        if self.py > FLOOR_Y {
            self.py = 2 * FLOOR_Y - self.py;
            self.dy = -self.dy;
        }

        if self.px > RIGHT_WALL_X {
            self.px = 2 * RIGHT_WALL_X - self.px;
            self.dx = -self.dx;
        }

        if self.px < LEFT_WALL_X {
            self.px = 2 * LEFT_WALL_X - self.px;
            self.dx = -self.dx;
        }

        self.dy += GRAVITY;
    }
}

impl Default for BallState {
    fn default() -> Self {
        Self::new()
    }
}
