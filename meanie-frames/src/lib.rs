mod code;

pub use code::make_frame;
use frame_lib::Frame;
use std::f64::consts::PI;

/// Frames in one half turn. The sprite is symmetric, so half a turn loops.
pub const FRAME_COUNT: usize = 16;
pub const ATLAS_PREFIX: &str = "Meanie";

pub fn theta_for(i: usize) -> f64 {
    PI * i as f64 / FRAME_COUNT as f64
}

pub fn frames() -> impl Iterator<Item = Frame> {
    (0..FRAME_COUNT).map(|i| Frame::new(i, make_frame(theta_for(i))))
}
