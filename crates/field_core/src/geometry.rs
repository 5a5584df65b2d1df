use serde::{Deserialize, Serialize};

/// Field coordinate [yd], origin at the centre of the pitch.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin
    #[inline]
    pub fn distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Pull a point back onto the circle of `radius` along its own ray.
///
/// Points on or inside the circle (including the origin) come back unchanged,
/// as do non-finite points, which have no ray to follow.
pub fn clip_to_circle(point: Point, radius: f64) -> Point {
    if !point.is_finite() {
        return point;
    }
    let d = point.distance();
    if d <= radius {
        return point;
    }
    // hypot overflows near f64::MAX; normalize by the larger component first
    let (x, y, d) = if d.is_finite() {
        (point.x, point.y, d)
    } else {
        let m = point.x.abs().max(point.y.abs());
        let (x, y) = (point.x / m, point.y / m);
        (x, y, x.hypot(y))
    };
    let scale = radius / d;
    Point::new(x * scale, y * scale)
}

/// Reflect across the vertical axis (right-handed <-> left-handed).
#[inline]
pub fn mirror_horizontal(point: Point) -> Point {
    Point::new(-point.x, point.y)
}
