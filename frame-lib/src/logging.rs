//! Logging setup shared by the frame generators.
//!
//! Frames go to stdout, log records go to stderr, so `RUST_LOG=debug` never
//! corrupts a printed stream.

pub use log::{debug, error, info, trace, warn};

pub fn init() {
    env_logger::init();
}
