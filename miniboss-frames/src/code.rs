use std::f64::consts::PI;

use frame_lib::{canvas, CANVAS, CENTER};
use log::debug;
use svg::node::element::Rectangle;
use svg::Document;

const TRACK_RADIUS: f64 = 28.0;
const LIGHT_HEIGHT: f64 = 10.0;
const LIGHT_COLOR: &str = "#FF8585";

/// Projects an angle on the semicircle `[0, π]` onto x in `[4, 60]`.
fn track_position(theta: f64) -> f64 {
    CENTER - TRACK_RADIUS * theta.cos()
}

/// Horizontal extent of light `j`. A light covers the first half of its slot,
/// clipped at the end of the semicircle.
fn light_span(step: f64, dframe: f64, j: usize) -> (f64, f64) {
    let theta0 = step * j as f64 + dframe;
    let theta1 = PI.min(theta0 + step / 2.0);
    (track_position(theta0), track_position(theta1))
}

// Invisible, but pins the pasted bounding box to the full frame.
fn background() -> Rectangle {
    Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", CANVAS)
        .set("height", CANVAS)
        .set("fill", "none")
}

fn make_light((t0, t1): (f64, f64)) -> Rectangle {
    Rectangle::new()
        .set("x", t0)
        .set("y", CENTER - LIGHT_HEIGHT / 2.0)
        .set("width", t1 - t0)
        .set("height", LIGHT_HEIGHT)
        .set("fill", LIGHT_COLOR)
}

/// Lights for frame `i` of `n`, with `num` lights sharing the semicircle.
///
/// Only the lights are drawn; the hull they sit on is pasted separately.
/// A light whose clipped span is empty (it has reached the end of the track)
/// is left out.
pub fn make_frame(i: usize, n: usize, num: usize) -> Document {
    assert!(num > 0, "light count must be positive");
    assert!(n > 0, "frame count must be positive");

    let step = PI / num as f64;
    let dframe = step * i as f64 / n as f64;

    (0..num)
        .filter_map(|j| {
            let (t0, t1) = light_span(step, dframe, j);
            if t1 > t0 {
                Some(make_light((t0, t1)))
            } else {
                debug!("frame {}: light {} is off the track", i, j);
                None
            }
        })
        .fold(canvas().add(background()), |doc, light| doc.add(light))
}
