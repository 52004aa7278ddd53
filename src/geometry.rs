//! 2D point math for hand and tick placement.
//!
//! All rotation on the watch face goes through [`rotate_coordinate`]: hand
//! tips, hand bases, and tick endpoints are all polar offsets from the
//! surface center. 0° points at 12 o'clock and angles grow clockwise, which
//! matches how clock rotations are specified everywhere else in the crate.

use embedded_graphics::geometry::Point;

/// A 2D point in surface coordinates.
///
/// Kept in `f32` so sub-pixel hand positions accumulate correctly through
/// the angle math; converted to integer [`Point`]s only at the draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Add an offset to this point's coordinates.
    pub fn add_offset(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }

    /// Truncate to an integer pixel position for drawing.
    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Return a coordinate rotated around `center`.
///
/// Converts a polar offset (`degrees`, `distance`) to a Cartesian point
/// relative to `center`. 0° is straight up: the angle is shifted by -90°
/// before the radian conversion so `cos`/`sin` place 0° at 12 o'clock
/// instead of 3 o'clock.
pub fn rotate_coordinate(center: Vec2, degrees: f32, distance: f32) -> Vec2 {
    let radians = (degrees - 90.0).to_radians();
    let mut result = Vec2::new(radians.cos() * distance, radians.sin() * distance);
    result.add_offset(center);
    result
}

// =============================================================================
// Unit Tests
// =============================================================================
