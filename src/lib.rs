//! Amiga ball demo: a checkered sphere bouncing across a 160x80 RGB565 panel,
//! shaded per pixel with fixed-point arithmetic only.
#![cfg_attr(not(test), no_std)]

pub mod ball_config;
pub mod ball_controller;
pub mod ball_display;
pub mod ball_error;
pub mod ball_frame;
pub mod ball_handoff;
pub mod ball_leds;
pub mod ball_math;
pub mod ball_physics;
pub mod ball_shader;

mod ball_reciprocal_table;
