mod code;

pub use code::make_frame;
use frame_lib::Frame;

/// Frames for one light to advance into the next light's slot.
pub const FRAME_COUNT: usize = 8;
pub const LIGHT_COUNT: usize = 3;
pub const ATLAS_PREFIX: &str = "MiniBoss";

pub fn frames() -> impl Iterator<Item = Frame> {
    (0..FRAME_COUNT).map(|i| Frame::new(i, make_frame(i, FRAME_COUNT, LIGHT_COUNT)))
}
