//! Pointer-driven decoration: card tilt and hero parallax.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Pointer distance from the card centre per degree of tilt.
pub const TILT_DIVISOR: f64 = 20.0;

/// Parallax travel per unit of normalized pointer offset, multiplied by orb index + 1.
pub const PARALLAX_STEP_PX: f64 = 20.0;

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` inside a
/// `width` × `height` card (card-local coordinates).
#[must_use]
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
    (rotate_x, rotate_y)
}

/// Inline transform for a tilted, lifted card.
#[must_use]
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rx, ry) = tilt_angles(x, y, width, height);
    format!("perspective(1000px) rotateX({rx}deg) rotateY({ry}deg) translateY(-8px)")
}

/// Pointer position mapped to `-1..=1` on each axis. A zero-sized window maps to the centre.
#[must_use]
pub fn normalized_pointer(client_x: f64, client_y: f64, inner_width: f64, inner_height: f64) -> (f64, f64) {
    let axis = |pos: f64, extent: f64| if extent > 0.0 { (pos / extent - 0.5) * 2.0 } else { 0.0 };
    (axis(client_x, inner_width), axis(client_y, inner_height))
}

/// Translation for each of `orb_count` orbs; deeper orbs travel further.
#[must_use]
pub fn parallax_offsets(pointer: (f64, f64), orb_count: usize) -> Vec<(f64, f64)> {
    (1..=orb_count)
        .map(|depth| {
            #[allow(clippy::cast_precision_loss)]
            let speed = depth as f64 * PARALLAX_STEP_PX;
            (pointer.0 * speed, pointer.1 * speed)
        })
        .collect()
}

#[must_use]
pub fn translate(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", offset.0, offset.1)
}
