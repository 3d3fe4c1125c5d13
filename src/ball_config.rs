// Panel resolution in pixels (ST7735S 160x80, landscape)
pub const WIDTH: usize = 160;
pub const HEIGHT: usize = 80;
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

// Fractional bits of every position, velocity and phase value
pub const Q8_SHIFT: u32 = 8;
pub const Q8_ONE: i32 = 1 << Q8_SHIFT;

// Bounding box of the simulation, in Q8 pixels
pub const FLOOR_Y: i32 = 16 << 8;
pub const RIGHT_WALL_X: i32 = 96 << 8;
pub const LEFT_WALL_X: i32 = -64 << 8;

// Downward acceleration added to the vertical velocity every tick
pub const GRAVITY: i32 = 1 << 4;
// Rotation advanced per tick, sign follows the horizontal direction of travel
pub const SPIN_STEP: i32 = 1 << 8;
// Velocity the ball starts with on both axes
pub const INITIAL_VELOCITY: i32 = Q8_ONE;
