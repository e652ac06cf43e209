use frame_lib::{canvas, CENTER};
use itertools::iproduct;
use log::trace;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path};
use svg::Document;

const INK: &str = "blue";
const BODY_RADIUS: f64 = 20.0;
const EYE_HEIGHT: f64 = 24.0;
const MOUTH_TOP: f64 = CENTER - BODY_RADIUS;
const MOUTH_BOTTOM: f64 = CENTER + BODY_RADIUS;
// below this the arc is too thin for editors to draw, use a line instead
const STRAIGHT_MOUTH: f64 = 0.001;

/// Distance of the outer and inner end of each eye from the vertical axis.
fn eye_offsets(cos: f64) -> (f64, f64) {
    (27.0 * cos + 1.0, 14.0 * cos - 1.0)
}

fn make_eye((sign_x, sign_y): (f64, f64), (outer, inner): (f64, f64)) -> Line {
    let y = CENTER + sign_y * EYE_HEIGHT;
    Line::new()
        .set("x1", CENTER + sign_x * outer)
        .set("x2", CENTER + sign_x * inner)
        .set("y1", y)
        .set("y2", y)
        .set("stroke", INK)
        .set("style", "stroke-width:3")
}

fn make_mouth(cos: f64) -> Path {
    let width = BODY_RADIUS * cos;
    let start = (CENTER, MOUTH_TOP);

    let data = if width.abs() < STRAIGHT_MOUTH {
        Data::new().move_to(start).line_to((CENTER, MOUTH_BOTTOM))
    } else {
        // bows right while cos > 0, left after the quarter turn
        let sweep = if width < 0.0 { 1 } else { 0 };
        Data::new().move_to(start).elliptical_arc_by((
            width.abs(),
            BODY_RADIUS,
            0,
            1,
            sweep,
            0,
            MOUTH_BOTTOM - MOUTH_TOP,
        ))
    };

    Path::new()
        .set("d", data)
        .set("stroke", INK)
        .set("fill", "none")
        .set("style", "stroke-width:4")
}

/// One pose of the meanie, `theta` in `[0, π)`.
///
/// The first pose (`theta == 0`) has no mouth; every later one has exactly one.
pub fn make_frame(theta: f64) -> Document {
    let cos = theta.cos();
    let offsets = eye_offsets(cos);
    trace!("theta {:.4}: eye offsets {:?}", theta, offsets);

    let body = Circle::new()
        .set("cx", CENTER)
        .set("cy", CENTER)
        .set("r", BODY_RADIUS)
        .set("fill", "none")
        .set("stroke", INK)
        .set("style", "stroke-width:4");

    let document = iproduct!([-1.0, 1.0], [1.0, -1.0])
        .map(|signs| make_eye(signs, offsets))
        .fold(canvas().add(body), |doc, eye| doc.add(eye));

    if theta > 0.0 {
        document.add(make_mouth(cos))
    } else {
        document
    }
}
